use chrono::{DateTime, Utc};
use models::booking::{Booking, DATE_FORMAT};
use models::time_slot::TIME_FORMAT;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub customer_name: String,
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    /// Start of the slot, "HH:MM"
    pub start_time: String,
    /// End of the slot (exclusive), "HH:MM"
    pub end_time: String,
    pub room_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub customer_name: String,
    pub room_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_date: DateTime<Utc>,
    pub booking_status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            customer_name: booking.customer_name,
            room_id: booking.room_id.to_string(),
            date: booking.date.format(DATE_FORMAT).to_string(),
            start_time: booking.slot.begin.format(TIME_FORMAT).to_string(),
            end_time: booking.slot.end.format(TIME_FORMAT).to_string(),
            booking_date: booking.booked_at,
            booking_status: booking.status.to_string(),
        }
    }
}

/// Body returned with 4xx responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
