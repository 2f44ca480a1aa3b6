//! Structural and duration checks applied to every candidate window.
//!
//! Durations are compared as whole [`Duration`] values. Both limits are
//! inclusive: a window exactly `min` or exactly `max` long is accepted.

use chrono::Duration;

use crate::error::{Result, ScheduleError};
use crate::window::TimeWindow;

/// Shortest bookable appointment.
pub const MIN_DURATION_MINUTES: i64 = 15;

/// Longest bookable appointment.
pub const MAX_DURATION_MINUTES: i64 = 8 * 60;

/// Hard upper bound for any configured maximum. Conflict detection scans only
/// the start day, end day and prior day, which covers every overlap only while
/// no window lasts longer than one day.
pub const MAX_CONFIGURABLE_MINUTES: i64 = 24 * 60;

/// Ceiling enforced by the legacy booking service, which turned away anything
/// longer than seven hours despite advertising eight.
pub const LEGACY_MAX_DURATION_MINUTES: i64 = 7 * 60;

/// Inclusive bounds on appointment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLimits {
    min: Duration,
    max: Duration,
}

impl WindowLimits {
    /// Build limits from minute counts.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidLimits` if `min_minutes` is not positive,
    /// exceeds `max_minutes`, or `max_minutes` exceeds
    /// [`MAX_CONFIGURABLE_MINUTES`].
    pub fn new(min_minutes: i64, max_minutes: i64) -> Result<Self> {
        let invalid = ScheduleError::InvalidLimits {
            min_minutes,
            max_minutes,
        };
        if min_minutes <= 0
            || min_minutes > max_minutes
            || max_minutes > MAX_CONFIGURABLE_MINUTES
        {
            return Err(invalid);
        }
        match (
            Duration::try_minutes(min_minutes),
            Duration::try_minutes(max_minutes),
        ) {
            (Some(min), Some(max)) => Ok(Self { min, max }),
            _ => Err(invalid),
        }
    }

    /// 15 minutes to 7 hours, matching the legacy service's observed behavior.
    pub fn legacy() -> Self {
        Self {
            min: Duration::minutes(MIN_DURATION_MINUTES),
            max: Duration::minutes(LEGACY_MAX_DURATION_MINUTES),
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Check that `window` is ordered and that its length is within bounds.
    ///
    /// # Errors
    /// - `InvertedRange` if `start` is not strictly before `end` (checked first,
    ///   whatever the length)
    /// - `DurationTooLong` if the window is longer than `max`
    /// - `DurationTooShort` if the window is shorter than `min`
    pub fn validate(&self, window: &TimeWindow) -> Result<()> {
        if window.start >= window.end {
            return Err(ScheduleError::InvertedRange {
                start: window.start,
                end: window.end,
            });
        }

        let duration = window.duration();
        if duration > self.max {
            return Err(ScheduleError::DurationTooLong {
                actual_seconds: duration.num_seconds(),
                max_minutes: self.max.num_minutes(),
            });
        }
        if duration < self.min {
            return Err(ScheduleError::DurationTooShort {
                actual_seconds: duration.num_seconds(),
                min_minutes: self.min.num_minutes(),
            });
        }

        Ok(())
    }
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self {
            min: Duration::minutes(MIN_DURATION_MINUTES),
            max: Duration::minutes(MAX_DURATION_MINUTES),
        }
    }
}

/// Validate `window` against the default limits.
pub fn validate(window: &TimeWindow) -> Result<()> {
    WindowLimits::default().validate(window)
}
