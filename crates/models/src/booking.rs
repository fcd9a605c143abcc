use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    ids::{BookingId, RoomId},
    time_slot::TimeSlot,
};

/// Wire format for calendar dates ("2024-01-01")
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a booking.
///
/// Bookings are confirmed at creation and never change afterwards; there is
/// no cancellation path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// A reservation of one room for one date and time slot by a named customer.
///
/// Customers have no entity of their own; they are identified by exact
/// string equality on `customer_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    /// When the booking record was created
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a confirmed booking stamped with the current time
    pub fn new(customer_name: String, room_id: RoomId, date: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            id: BookingId::new(),
            customer_name,
            room_id,
            date,
            slot,
            booked_at: Utc::now(),
            status: BookingStatus::Confirmed,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Booking {
        Booking::new(
            "Alice".to_string(),
            RoomId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            TimeSlot::from_strings("09:00", "10:00").unwrap(),
        )
    }

    #[test]
    fn test_new_booking_is_confirmed() {
        assert_eq!(sample().status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        assert_eq!(BookingStatus::Confirmed.to_string(), "confirmed");
    }

    #[test]
    fn test_date_format_matches_wire_shape() {
        let booking = sample();
        assert_eq!(booking.date.format(DATE_FORMAT).to_string(), "2024-01-01");
    }
}
