use chrono::NaiveDate;
use models::{booking::Booking, ids::RoomId, room::Room, time_slot::TimeSlot};

use crate::error::StoreError;

/// In-memory directory of rooms and bookings.
///
/// Both collections keep insertion order and every lookup is a linear scan;
/// collection sizes are expected to stay small. The double-booking check and
/// the insert run inside one `&mut self` call, so wrapping the directory in
/// a single lock is enough to keep the no-overlap invariant when handlers
/// run in parallel. State lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct Directory {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new room and returns the stored record.
    ///
    /// Always succeeds; seat count, amenities and rate are stored as given.
    pub fn create_room(
        &mut self,
        number_of_seats: u32,
        amenities: Vec<String>,
        price_per_hour: f64,
    ) -> Room {
        let room = Room::new(number_of_seats, amenities, price_per_hour);
        self.rooms.push(room.clone());

        room
    }

    /// All rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Reserves `slot` on `date` for the given room.
    ///
    /// Fails with [`StoreError::RoomNotFound`] when the room id is unknown,
    /// and with [`StoreError::DoubleBooked`] when the slot conflicts with an
    /// existing booking for the same room and date under
    /// [`TimeSlot::conflicts_with`]. The slot itself is not validated;
    /// a reversed `begin`/`end` pair is stored as given.
    pub fn create_booking(
        &mut self,
        customer_name: String,
        room_id: RoomId,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Booking, StoreError> {
        if self.find_room(room_id).is_none() {
            return Err(StoreError::RoomNotFound(room_id));
        }

        let double_booked = self
            .bookings
            .iter()
            .filter(|booking| booking.room_id == room_id && booking.date == date)
            .any(|booking| slot.conflicts_with(&booking.slot));

        if double_booked {
            return Err(StoreError::DoubleBooked { room_id, date });
        }

        let booking = Booking::new(customer_name, room_id, date, slot);
        self.bookings.push(booking.clone());

        Ok(booking)
    }

    /// All bookings in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings made under exactly this customer name, case-sensitive,
    /// insertion order
    pub fn bookings_by_customer(&self, customer_name: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.customer_name == customer_name)
            .collect()
    }
}
