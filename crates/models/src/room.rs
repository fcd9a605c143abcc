use serde::Serialize;

use crate::ids::RoomId;

/// A reservable meeting room.
///
/// Seat count, amenities and rate are stored as given; nothing polices
/// capacity against bookings. Rooms are never updated or deleted once
/// registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub number_of_seats: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

impl Room {
    /// Creates a room with a freshly assigned id
    pub fn new(number_of_seats: u32, amenities: Vec<String>, price_per_hour: f64) -> Self {
        Self {
            id: RoomId::new(),
            number_of_seats,
            amenities,
            price_per_hour,
        }
    }
}
