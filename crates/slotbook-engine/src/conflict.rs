//! Detect overlaps between a candidate window and booked windows.
//!
//! The store files windows by start day and no window lasts longer than a day,
//! so every booked window that can overlap a candidate started on one of three
//! days: the candidate's start day, its end day, or the day before its start.
//! Only those buckets are scanned.
//!
//! Adjacent windows (one ends exactly when the other starts) are NOT conflicts.

use chrono::Duration;

use crate::store::{DayKey, ScheduleStore};
use crate::window::TimeWindow;

/// A booked window that overlaps a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub existing: TimeWindow,
    pub overlap: Duration,
}

/// Two windows overlap iff `a.start < b.end && b.start < a.end`.
///
/// Equal starts or equal ends always overlap; touching boundaries never do.
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    a.start < b.end && b.start < a.end
}

/// Day buckets that may hold a window overlapping `candidate`, without
/// duplicates: start day, end day when different, then the prior day.
pub fn candidate_days(candidate: &TimeWindow) -> Vec<DayKey> {
    let start_key = DayKey::of(candidate.start);
    let end_key = DayKey::of(candidate.end);

    let mut days = vec![start_key];
    if end_key != start_key {
        days.push(end_key);
    }
    days.push(start_key.pred());
    days
}

/// True when no booked window overlaps `candidate`.
///
/// Stops at the first overlap found.
pub fn is_available(store: &ScheduleStore, candidate: &TimeWindow) -> bool {
    candidate_days(candidate).into_iter().all(|key| {
        store
            .slots_for(key)
            .iter()
            .all(|slot| !overlaps(candidate, slot))
    })
}

/// Every booked window overlapping `candidate`, with the length of each overlap.
pub fn find_conflicts(store: &ScheduleStore, candidate: &TimeWindow) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for key in candidate_days(candidate) {
        for slot in store.slots_for(key) {
            if overlaps(candidate, slot) {
                let overlap_start = candidate.start.max(slot.start);
                let overlap_end = candidate.end.min(slot.end);
                conflicts.push(Conflict {
                    existing: slot.clone(),
                    overlap: overlap_end - overlap_start,
                });
            }
        }
    }

    conflicts
}
