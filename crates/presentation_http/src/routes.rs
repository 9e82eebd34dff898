//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing view
        .route("/", get(handlers::landing::landing))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Check API (v1)
        .route("/v1/checks/url", post(handlers::url_check::check_url))
        .route(
            "/v1/checks/screenshot",
            post(handlers::image_checks::check_screenshot),
        )
        .route("/v1/checks/ocr", post(handlers::image_checks::extract_text))
        .route("/v1/checks/text", post(handlers::text_checks::check_text))
        .route(
            "/v1/checks/naturalness",
            post(handlers::text_checks::check_naturalness),
        )
        .route(
            "/v1/checks/contact",
            post(handlers::contact_lookup::lookup_contact),
        )
        // Attach state
        .with_state(state)
}
