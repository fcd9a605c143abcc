use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models::{booking::DATE_FORMAT, room::Room, time_slot::TIME_FORMAT};
use store::services::report::ReportService;

use crate::dtos::customer::{CustomerBookingRow, CustomerHistoryRow};
use crate::state::SharedDirectory;

/// Shown when a booking's room reference does not resolve
const UNKNOWN_ROOM: &str = "Unknown";

fn room_name(room: Option<Room>) -> String {
    room.map(|room| room.id.to_string())
        .unwrap_or_else(|| UNKNOWN_ROOM.to_string())
}

/// List every booking with its customer and room
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "Customer bookings retrieved successfully", body = Vec<CustomerBookingRow>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(directory): State<SharedDirectory>,
) -> Result<Json<Vec<CustomerBookingRow>>, StatusCode> {
    let directory = directory
        .read()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let rows = ReportService::customers_with_bookings(&directory)
        .into_iter()
        .map(|(booking, room)| CustomerBookingRow {
            customer_name: booking.customer_name,
            room_name: room_name(room),
            date: booking.date.format(DATE_FORMAT).to_string(),
            start_time: booking.slot.begin.format(TIME_FORMAT).to_string(),
            end_time: booking.slot.end.format(TIME_FORMAT).to_string(),
        })
        .collect();

    Ok(Json(rows))
}

/// Booking history for one customer, possibly empty
#[utoipa::path(
    get,
    path = "/customers/{customer_name}/bookings",
    params(
        ("customer_name" = String, Path, description = "Exact customer name, case-sensitive")
    ),
    responses(
        (status = 200, description = "Booking history retrieved successfully", body = Vec<CustomerHistoryRow>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn customer_bookings(
    State(directory): State<SharedDirectory>,
    Path(customer_name): Path<String>,
) -> Result<Json<Vec<CustomerHistoryRow>>, StatusCode> {
    let directory = directory
        .read()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let rows = ReportService::customer_history(&directory, &customer_name)
        .into_iter()
        .map(|(booking, room)| CustomerHistoryRow {
            room_name: room_name(room),
            date: booking.date.format(DATE_FORMAT).to_string(),
            start_time: booking.slot.begin.format(TIME_FORMAT).to_string(),
            end_time: booking.slot.end.format(TIME_FORMAT).to_string(),
            booking_id: booking.id.to_string(),
            booking_date: booking.booked_at,
            booking_status: booking.status.to_string(),
        })
        .collect();

    Ok(Json(rows))
}
