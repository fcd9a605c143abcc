use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use log::{info, warn};
use models::{booking::DATE_FORMAT, ids::RoomId, time_slot::TimeSlot};

use crate::dtos::booking::{BookingResponse, CreateBookingRequest, ErrorResponse};
use crate::state::SharedDirectory;

type Rejection = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Reserve a room for a date and time slot
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Unknown room, conflicting slot or malformed date/time", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(directory): State<SharedDirectory>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), Rejection> {
    // An unparseable id cannot reference any room
    let room_id: RoomId = payload
        .room_id
        .parse()
        .map_err(|_| bad_request("Room not found"))?;

    let date = NaiveDate::parse_from_str(&payload.date, DATE_FORMAT)
        .map_err(|_| bad_request("Invalid date, expected YYYY-MM-DD"))?;
    let slot = TimeSlot::from_strings(&payload.start_time, &payload.end_time)
        .ok_or_else(|| bad_request("Invalid time, expected HH:MM"))?;

    let mut directory = directory.write().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }),
        )
    })?;

    match directory.create_booking(payload.customer_name, room_id, date, slot) {
        Ok(booking) => {
            info!("Created booking {} for room {room_id}", booking.id);
            Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
        }
        Err(err) => {
            warn!("Rejected booking for room {room_id} on {date}: {err}");
            Err(bad_request(err.to_string()))
        }
    }
}
