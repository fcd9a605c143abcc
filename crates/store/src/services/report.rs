use models::{booking::Booking, room::Room};

use crate::directory::Directory;

pub struct ReportService;

impl ReportService {
    /// Every room paired with the bookings that reference it, both in
    /// insertion order
    pub fn rooms_with_bookings(directory: &Directory) -> Vec<(Room, Vec<Booking>)> {
        directory
            .rooms()
            .iter()
            .map(|room| {
                let booked = directory
                    .bookings()
                    .iter()
                    .filter(|booking| booking.room_id == room.id)
                    .cloned()
                    .collect();

                (room.clone(), booked)
            })
            .collect()
    }

    /// Every booking paired with its room; `None` when the room reference
    /// does not resolve
    pub fn customers_with_bookings(directory: &Directory) -> Vec<(Booking, Option<Room>)> {
        directory
            .bookings()
            .iter()
            .map(|booking| (booking.clone(), directory.find_room(booking.room_id).cloned()))
            .collect()
    }

    /// One customer's bookings with rooms resolved, insertion order.
    /// Customer names match by exact string equality.
    pub fn customer_history(
        directory: &Directory,
        customer_name: &str,
    ) -> Vec<(Booking, Option<Room>)> {
        directory
            .bookings_by_customer(customer_name)
            .into_iter()
            .map(|booking| (booking.clone(), directory.find_room(booking.room_id).cloned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use models::{ids::RoomId, time_slot::TimeSlot};

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn slot(begin: &str, end: &str) -> TimeSlot {
        TimeSlot::from_strings(begin, end).unwrap()
    }

    fn sample_directory() -> (Directory, RoomId, RoomId) {
        let mut directory = Directory::new();
        let first = directory.create_room(4, vec!["tv".to_string()], 20.0);
        let second = directory.create_room(10, vec![], 50.0);

        directory
            .create_booking(
                "Alice".to_string(),
                first.id,
                date("2024-01-01"),
                slot("09:00", "10:00"),
            )
            .unwrap();
        directory
            .create_booking(
                "Bob".to_string(),
                first.id,
                date("2024-01-02"),
                slot("14:00", "15:00"),
            )
            .unwrap();
        directory
            .create_booking(
                "Alice".to_string(),
                second.id,
                date("2024-01-03"),
                slot("09:00", "10:00"),
            )
            .unwrap();

        (directory, first.id, second.id)
    }

    #[test]
    fn test_rooms_with_bookings_attaches_matching_bookings() {
        let (directory, first, second) = sample_directory();

        let report = ReportService::rooms_with_bookings(&directory);
        assert_eq!(report.len(), 2);

        let (room, booked) = &report[0];
        assert_eq!(room.id, first);
        assert_eq!(booked.len(), 2);
        assert!(booked.iter().all(|booking| booking.room_id == first));

        let (room, booked) = &report[1];
        assert_eq!(room.id, second);
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].customer_name, "Alice");
    }

    #[test]
    fn test_rooms_without_bookings_get_an_empty_list() {
        let mut directory = Directory::new();
        directory.create_room(2, vec![], 5.0);

        let report = ReportService::rooms_with_bookings(&directory);
        assert_eq!(report.len(), 1);
        assert!(report[0].1.is_empty());
    }

    #[test]
    fn test_customers_with_bookings_yields_one_row_per_booking() {
        let (directory, first, _) = sample_directory();

        let rows = ReportService::customers_with_bookings(&directory);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0.customer_name, "Alice");
        assert_eq!(rows[1].0.customer_name, "Bob");
        assert_eq!(rows[0].1.as_ref().map(|room| room.id), Some(first));
    }

    #[test]
    fn test_customer_history_filters_by_exact_name() {
        let (directory, first, second) = sample_directory();

        let history = ReportService::customer_history(&directory, "Alice");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].0.room_id, first);
        assert_eq!(history[1].0.room_id, second);

        assert!(ReportService::customer_history(&directory, "alice").is_empty());
        assert!(ReportService::customer_history(&directory, "Mallory").is_empty());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let (directory, _, _) = sample_directory();

        assert_eq!(
            ReportService::rooms_with_bookings(&directory),
            ReportService::rooms_with_bookings(&directory)
        );
        assert_eq!(
            ReportService::customers_with_bookings(&directory),
            ReportService::customers_with_bookings(&directory)
        );
    }
}
