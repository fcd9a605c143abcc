use axum::{Json, extract::State, http::StatusCode};
use log::info;
use models::{
    booking::{Booking, DATE_FORMAT},
    room::Room,
    time_slot::TIME_FORMAT,
};
use store::services::report::ReportService;

use crate::dtos::room::{BookedSlot, CreateRoomRequest, RoomResponse, RoomWithBookingsResponse};
use crate::state::SharedDirectory;

/// Register a new room
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(directory): State<SharedDirectory>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), StatusCode> {
    let mut directory = directory
        .write()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let room = directory.create_room(
        payload.number_of_seats,
        payload.amenities,
        payload.price_per_hour,
    );
    info!("Created room {}", room.id);

    Ok((StatusCode::CREATED, Json(RoomResponse::from(room))))
}

/// List all rooms, each with its booked slots
#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = Vec<RoomWithBookingsResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(directory): State<SharedDirectory>,
) -> Result<Json<Vec<RoomWithBookingsResponse>>, StatusCode> {
    let directory = directory
        .read()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let rooms = ReportService::rooms_with_bookings(&directory)
        .into_iter()
        .map(|(room, bookings)| convert_to_room_with_bookings(room, bookings))
        .collect();

    Ok(Json(rooms))
}

/// Helper function to convert a room and its bookings to an API response
fn convert_to_room_with_bookings(room: Room, bookings: Vec<Booking>) -> RoomWithBookingsResponse {
    let booked_data = bookings
        .into_iter()
        .map(|booking| BookedSlot {
            customer_name: booking.customer_name,
            date: booking.date.format(DATE_FORMAT).to_string(),
            start_time: booking.slot.begin.format(TIME_FORMAT).to_string(),
            end_time: booking.slot.end.format(TIME_FORMAT).to_string(),
        })
        .collect();

    RoomWithBookingsResponse {
        id: room.id.to_string(),
        number_of_seats: room.number_of_seats,
        amenities: room.amenities,
        price_per_hour: room.price_per_hour,
        booked_data,
    }
}
