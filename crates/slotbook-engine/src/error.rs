//! Error types for slotbook-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::window::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A raw `start` or `end` value was not an RFC 3339 timestamp.
    #[error("Malformed {field} timestamp '{value}': {reason}")]
    MalformedTimestamp {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("Window start {start} is not before window end {end}")]
    InvertedRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Window lasts {actual_seconds}s, below the minimum appointment length of {min_minutes} minutes")]
    DurationTooShort {
        actual_seconds: i64,
        min_minutes: i64,
    },

    #[error("Window lasts {actual_seconds}s, above the maximum appointment length of {max_minutes} minutes")]
    DurationTooLong {
        actual_seconds: i64,
        max_minutes: i64,
    },

    #[error("Requested window conflicts with an existing reservation")]
    Unavailable,

    #[error("No reservation matches the requested window")]
    NotFound,

    #[error("Invalid duration limits: minimum {min_minutes} minutes, maximum {max_minutes} minutes")]
    InvalidLimits { min_minutes: i64, max_minutes: i64 },
}

impl ScheduleError {
    /// True for errors describing a bad candidate window rather than the
    /// state of the schedule.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScheduleError::MalformedTimestamp { .. }
                | ScheduleError::InvertedRange { .. }
                | ScheduleError::DurationTooShort { .. }
                | ScheduleError::DurationTooLong { .. }
        )
    }

    /// Stable machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleError::MalformedTimestamp { .. } => "MALFORMED_TIMESTAMP",
            ScheduleError::InvertedRange { .. } => "INVERTED_RANGE",
            ScheduleError::DurationTooShort { .. } => "DURATION_TOO_SHORT",
            ScheduleError::DurationTooLong { .. } => "DURATION_TOO_LONG",
            ScheduleError::Unavailable => "UNAVAILABLE",
            ScheduleError::NotFound => "NOT_FOUND",
            ScheduleError::InvalidLimits { .. } => "INVALID_LIMITS",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
