use chrono::NaiveDate;
use models::ids::RoomId;
use thiserror::Error;

/// Failures surfaced by booking creation.
///
/// The display strings double as the messages returned to API callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The referenced room id does not exist
    #[error("Room not found")]
    RoomNotFound(RoomId),

    /// The requested slot conflicts with an existing booking on the same
    /// room and date
    #[error("Room is already booked for the given time")]
    DoubleBooked { room_id: RoomId, date: NaiveDate },
}
