use models::room::Room;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub number_of_seats: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: String,
    pub number_of_seats: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            number_of_seats: room.number_of_seats,
            amenities: room.amenities,
            price_per_hour: room.price_per_hour,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithBookingsResponse {
    pub id: String,
    pub number_of_seats: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
    pub booked_data: Vec<BookedSlot>,
}

/// A booking projected down to the fields shown in the room listing
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}
