//! HTTP handlers for the REST API.
//!
//! Each handler decodes a [`WindowRequest`], parses it, and delegates to the
//! shared [`Scheduler`](slotbook_engine::Scheduler).

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use slotbook_engine::{Confirmation, ScheduleSnapshot, TimeWindow, WindowRequest};

use crate::error::AppError;
use crate::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reservations: usize,
}

fn parse_payload(
    payload: Result<Json<WindowRequest>, JsonRejection>,
) -> Result<TimeWindow, AppError> {
    let Json(request) = payload?;
    Ok(request.parse()?)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reservations: state.scheduler.len(),
    }))
}

/// POST /availability
///
/// Responds with a bare JSON boolean.
pub async fn check_availability(
    State(state): State<AppState>,
    payload: Result<Json<WindowRequest>, JsonRejection>,
) -> HandlerResult<bool> {
    let window = parse_payload(payload)?;
    Ok(Json(state.scheduler.check_availability(&window)?))
}

/// POST /reserve
pub async fn reserve(
    State(state): State<AppState>,
    payload: Result<Json<WindowRequest>, JsonRejection>,
) -> HandlerResult<Confirmation> {
    let window = parse_payload(payload)?;
    Ok(Json(state.scheduler.reserve(window)?))
}

/// POST /release
pub async fn release(
    State(state): State<AppState>,
    payload: Result<Json<WindowRequest>, JsonRejection>,
) -> HandlerResult<Confirmation> {
    let window = parse_payload(payload)?;
    Ok(Json(state.scheduler.release(&window)?))
}

/// GET /schedule
///
/// Dumps every day in the store, keyed by `YYYY-MM-DD`.
pub async fn schedule(State(state): State<AppState>) -> Json<ScheduleSnapshot> {
    Json(state.scheduler.schedule())
}
