//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/availability", post(handlers::check_availability))
        .route("/reserve", post(handlers::reserve))
        .route("/release", post(handlers::release))
        .route("/schedule", get(handlers::schedule))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
