use crate::routes::{booking, customer, health, room, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        room::create_room,
        room::list_rooms,
        booking::create_booking,
        customer::list_customers,
        customer::customer_bookings
    ),
    tags(
        (name = "Rooms", description = "Room registration and listing"),
        (name = "Bookings", description = "Reservation creation"),
        (name = "Customers", description = "Customer booking views"),
        (name = "Health", description = "Service liveness"),
    ),
    info(
        title = "Room Booking API",
        version = "1.0.0",
        description = "Meeting room booking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
