//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use slotbook_engine::ScheduleError;
use tracing::debug;

/// JSON body returned with every rejected request.
///
/// `code` is the engine's stable error code (`UNAVAILABLE`,
/// `DURATION_TOO_SHORT`, ...) or `INVALID_BODY` when the payload never
/// reached the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

const TIMESTAMP_HINT: &str = "Timestamps must be RFC 3339, e.g. '2014-09-12T11:45:26.371Z'";

impl ApiError {
    /// Body for a payload that could not be decoded; `rejection` is the
    /// decoder's own explanation.
    pub fn invalid_body(rejection: impl Into<String>) -> Self {
        Self {
            code: "INVALID_BODY".to_string(),
            message: "Request body is not a valid window request".to_string(),
            details: Some(rejection.into()),
        }
    }
}

impl From<&ScheduleError> for ApiError {
    fn from(err: &ScheduleError) -> Self {
        let details = match err {
            ScheduleError::MalformedTimestamp { .. } => Some(TIMESTAMP_HINT.to_string()),
            _ => None,
        };
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be decoded as JSON
    InvalidBody(String),
    /// Rejected by the scheduling engine
    Schedule(ScheduleError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Schedule(ScheduleError::Unavailable) => StatusCode::CONFLICT,
            AppError::Schedule(ScheduleError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Schedule(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            AppError::Schedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::InvalidBody(rejection) => ApiError::invalid_body(rejection.clone()),
            AppError::Schedule(e) => ApiError::from(e),
        };

        debug!(status = status.as_u16(), code = %error.code, "request rejected");
        (status, Json(error)).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError::Schedule(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}
