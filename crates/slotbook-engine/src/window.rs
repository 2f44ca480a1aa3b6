//! Appointment windows and the raw requests they are parsed from.
//!
//! A [`WindowRequest`] carries the four fields exactly as a client sent them.
//! [`WindowRequest::parse`] turns it into a typed [`TimeWindow`]; duration and
//! ordering rules are enforced separately by [`crate::validator`].

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A requested or booked interval between a requestor and an attendant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub requestor: String,
    pub attendant: String,
}

impl TimeWindow {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requestor: impl Into<String>,
        attendant: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            requestor: requestor.into(),
            attendant: attendant.into(),
        }
    }

    /// Length of the window. Negative when the range is inverted.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when both windows cover the same `start` and `end` instants,
    /// regardless of participants.
    pub fn same_interval(&self, other: &TimeWindow) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} ({} with {})",
            self.start.to_rfc3339(),
            self.end.to_rfc3339(),
            self.requestor,
            self.attendant
        )
    }
}

/// Which timestamp field of a request failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Start,
    End,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Start => f.write_str("start"),
            Field::End => f.write_str("end"),
        }
    }
}

/// Unparsed request payload.
///
/// Field names are matched in lowercase; the capitalized spellings used by
/// older clients (`Start`, `End`, ...) are accepted as aliases. Missing fields
/// deserialize as empty strings so that a missing timestamp surfaces as
/// [`ScheduleError::MalformedTimestamp`] rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRequest {
    #[serde(default, alias = "Start")]
    pub start: String,
    #[serde(default, alias = "End")]
    pub end: String,
    #[serde(default, alias = "Requestor")]
    pub requestor: String,
    #[serde(default, alias = "Attendant")]
    pub attendant: String,
}

impl WindowRequest {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        requestor: impl Into<String>,
        attendant: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            requestor: requestor.into(),
            attendant: attendant.into(),
        }
    }

    /// Parse both timestamps as RFC 3339 and normalize them to UTC.
    ///
    /// `start` is parsed first, so a request with two bad timestamps reports
    /// the `start` field.
    ///
    /// # Errors
    /// Returns `ScheduleError::MalformedTimestamp` naming the offending field
    /// and value.
    pub fn parse(&self) -> Result<TimeWindow> {
        let start = parse_timestamp(Field::Start, &self.start)?;
        let end = parse_timestamp(Field::End, &self.end)?;
        Ok(TimeWindow::new(
            start,
            end,
            self.requestor.clone(),
            self.attendant.clone(),
        ))
    }
}

fn parse_timestamp(field: Field, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ScheduleError::MalformedTimestamp {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
