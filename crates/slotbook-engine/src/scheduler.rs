//! Reservation orchestration over a shared [`ScheduleStore`].
//!
//! ## Locking
//!
//! The store sits behind a single [`RwLock`]. `reserve` and `release` hold the
//! write lock across their whole check-then-mutate sequence, so two callers
//! can never both observe a window as free and both book it. Read-only calls
//! (`check_availability`, `conflicts`, `schedule`) share the read lock.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::conflict::{self, Conflict};
use crate::error::{Result, ScheduleError};
use crate::store::{DayKey, ScheduleSnapshot, ScheduleStore};
use crate::validator::WindowLimits;
use crate::window::TimeWindow;

pub const RESERVED_MESSAGE: &str = "Reservation confirmed.";
pub const RELEASED_MESSAGE: &str = "Release confirmed.";

/// What a successful mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Reserved,
    Released,
}

/// Receipt returned by [`Scheduler::reserve`] and [`Scheduler::release`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub status: Action,
    pub message: String,
    /// The window as stored: the booked value on reserve, the removed value on release.
    pub window: TimeWindow,
}

impl Confirmation {
    fn reserved(window: TimeWindow) -> Self {
        Self {
            status: Action::Reserved,
            message: RESERVED_MESSAGE.to_string(),
            window,
        }
    }

    fn released(window: TimeWindow) -> Self {
        Self {
            status: Action::Released,
            message: RELEASED_MESSAGE.to_string(),
            window,
        }
    }
}

/// Owns the schedule for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Scheduler {
    limits: WindowLimits,
    store: RwLock<ScheduleStore>,
}

impl Scheduler {
    /// Empty schedule with the default 15-minute to 8-hour limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: WindowLimits) -> Self {
        Self {
            limits,
            store: RwLock::new(ScheduleStore::new()),
        }
    }

    pub fn limits(&self) -> WindowLimits {
        self.limits
    }

    /// Validate `candidate` and report whether it could be booked right now.
    ///
    /// # Errors
    /// Returns the validation error if `candidate` is malformed; an invalid
    /// window is never reported as merely unavailable.
    pub fn check_availability(&self, candidate: &TimeWindow) -> Result<bool> {
        self.limits.validate(candidate)?;
        let available = conflict::is_available(&self.store.read(), candidate);
        debug!(window = %candidate, available, "checked availability");
        Ok(available)
    }

    /// Booked windows overlapping `candidate`.
    ///
    /// # Errors
    /// Returns the validation error if `candidate` is malformed.
    pub fn conflicts(&self, candidate: &TimeWindow) -> Result<Vec<Conflict>> {
        self.limits.validate(candidate)?;
        Ok(conflict::find_conflicts(&self.store.read(), candidate))
    }

    /// Book `candidate` under its start day if nothing overlaps it.
    ///
    /// # Errors
    /// - the validation error if `candidate` is malformed
    /// - `ScheduleError::Unavailable` if a booked window overlaps it
    pub fn reserve(&self, candidate: TimeWindow) -> Result<Confirmation> {
        self.limits.validate(&candidate)?;

        let mut store = self.store.write();
        let conflicts = conflict::find_conflicts(&store, &candidate);
        if let Some(first) = conflicts.first() {
            debug!(
                window = %candidate,
                conflicts = conflicts.len(),
                existing = %first.existing,
                overlap_minutes = first.overlap.num_minutes(),
                "reservation refused: window unavailable"
            );
            return Err(ScheduleError::Unavailable);
        }

        let key = DayKey::of(candidate.start);
        store.insert(key, candidate.clone());
        drop(store);

        info!(day = %key, window = %candidate, "reservation confirmed");
        Ok(Confirmation::reserved(candidate))
    }

    /// Remove the booked window with the same start and end as `candidate`.
    ///
    /// # Errors
    /// - the validation error if `candidate` is malformed
    /// - `ScheduleError::NotFound` if no booked window matches exactly
    pub fn release(&self, candidate: &TimeWindow) -> Result<Confirmation> {
        self.limits.validate(candidate)?;

        let key = DayKey::of(candidate.start);
        let removed = self
            .store
            .write()
            .remove_exact(key, candidate)
            .inspect_err(|_| {
                debug!(day = %key, window = %candidate, "release refused: no matching reservation");
            })?;

        info!(day = %key, window = %removed, "release confirmed");
        Ok(Confirmation::released(removed))
    }

    /// Copy of the full schedule.
    pub fn schedule(&self) -> ScheduleSnapshot {
        self.store.read().snapshot()
    }

    /// Number of booked windows.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}
