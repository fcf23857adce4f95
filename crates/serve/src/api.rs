//! API routes for the Wayfare serve crate

use crate::handlers::{handle_details, handle_ping, handle_root, handle_search, AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// API routes configuration
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/ping", get(handle_ping))
        .route("/api/search", post(handle_search))
        .route("/api/details", post(handle_details))
}
