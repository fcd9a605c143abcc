use std::env;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod routes;
mod state;
mod utils;

use crate::doc::ApiDoc;
use crate::state::SharedDirectory;

const DEFAULT_PORT: u16 = 3000;

/// Builds the application router around a shared directory
fn app(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/rooms",
            post(routes::room::create_room).get(routes::room::list_rooms),
        )
        .route("/bookings", post(routes::booking::create_booking))
        .route("/customers", get(routes::customer::list_customers))
        .route(
            "/customers/{customer_name}/bookings",
            get(routes::customer::customer_bookings),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(directory)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = app(state::new_shared_directory());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
