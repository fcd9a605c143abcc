use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One row per booking in the customer listing.
///
/// `room_name` carries the room's id string ("Unknown" when the reference
/// does not resolve); rooms have no separate display name.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingRow {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// One row per booking in a single customer's history, full metadata
/// included
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerHistoryRow {
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: String,
    pub booking_date: DateTime<Utc>,
    pub booking_status: String,
}
