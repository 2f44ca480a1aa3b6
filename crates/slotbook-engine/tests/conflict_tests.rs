//! Tests for overlap detection across day buckets.

use chrono::Duration;
use slotbook_engine::conflict::{candidate_days, overlaps};
use slotbook_engine::{day_key, find_conflicts, is_available, ScheduleStore, TimeWindow};

fn window(start: &str, end: &str) -> TimeWindow {
    TimeWindow::new(start.parse().unwrap(), end.parse().unwrap(), "alice", "dr-bob")
}

/// Helper: store holding the given windows, each filed under its start day.
fn store_with(windows: &[TimeWindow]) -> ScheduleStore {
    let mut store = ScheduleStore::new();
    for w in windows {
        store.insert(day_key(w.start), w.clone());
    }
    store
}

// ── Interval relation ───────────────────────────────────────────────────────

#[test]
fn partial_overlap_conflicts() {
    // Booked 09:00-10:00, candidate 09:30-10:30 → 30-min overlap
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let candidate = window("2026-03-01T09:30:00Z", "2026-03-01T10:30:00Z");

    assert!(!is_available(&store, &candidate));

    let conflicts = find_conflicts(&store, &candidate);
    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].overlap, Duration::minutes(30));
}

#[test]
fn candidate_end_inside_existing_conflicts() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let candidate = window("2026-03-01T08:30:00Z", "2026-03-01T09:15:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn disjoint_windows_are_available() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let candidate = window("2026-03-01T11:00:00Z", "2026-03-01T12:00:00Z");

    assert!(is_available(&store, &candidate));
    assert!(find_conflicts(&store, &candidate).is_empty());
}

#[test]
fn touching_windows_are_available() {
    // Booked ends at 10:00, candidate starts at 10:00 → adjacent, NOT overlapping
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);

    let after = window("2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z");
    assert!(is_available(&store, &after), "end == start is not a conflict");

    let before = window("2026-03-01T08:00:00Z", "2026-03-01T09:00:00Z");
    assert!(is_available(&store, &before), "start == end is not a conflict");
}

#[test]
fn equal_starts_conflict() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let candidate = window("2026-03-01T09:00:00Z", "2026-03-01T09:30:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn equal_ends_conflict() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let candidate = window("2026-03-01T09:30:00Z", "2026-03-01T10:00:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn identical_window_conflicts() {
    let w = window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z");
    let store = store_with(&[w.clone()]);
    assert!(!is_available(&store, &w));
}

#[test]
fn candidate_containing_existing_conflicts() {
    // Booked 10:00-11:00 sits strictly inside candidate 09:00-12:00
    let store = store_with(&[window("2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z")]);
    let candidate = window("2026-03-01T09:00:00Z", "2026-03-01T12:00:00Z");

    let conflicts = find_conflicts(&store, &candidate);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].overlap,
        Duration::minutes(60),
        "overlap should be the length of the contained window"
    );
}

#[test]
fn candidate_inside_existing_conflicts() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T12:00:00Z")]);
    let candidate = window("2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn participants_do_not_affect_conflicts() {
    let store = store_with(&[window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")]);
    let mut candidate = window("2026-03-01T09:30:00Z", "2026-03-01T10:30:00Z");
    candidate.requestor = "carol".to_string();
    candidate.attendant = "dr-dave".to_string();
    assert!(!is_available(&store, &candidate));
}

#[test]
fn overlaps_is_symmetric() {
    let a = window("2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z");
    let b = window("2026-03-01T09:59:00Z", "2026-03-01T11:00:00Z");
    let c = window("2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z");

    assert!(overlaps(&a, &b) && overlaps(&b, &a));
    assert!(!overlaps(&a, &c) && !overlaps(&c, &a));
}

// ── Day boundaries ──────────────────────────────────────────────────────────

#[test]
fn prior_day_window_spilling_into_today_conflicts() {
    // Booked 2024-01-01 23:00 → 2024-01-02 02:00 (filed under Jan 1)
    let store = store_with(&[window("2024-01-01T23:00:00Z", "2024-01-02T02:00:00Z")]);
    let candidate = window("2024-01-02T01:00:00Z", "2024-01-02T03:00:00Z");

    assert!(!is_available(&store, &candidate));
    assert_eq!(find_conflicts(&store, &candidate)[0].overlap, Duration::hours(1));
}

#[test]
fn prior_day_window_containing_candidate_end_conflicts() {
    // Candidate starts at midnight and ends inside the spill-over window.
    let store = store_with(&[window("2024-01-01T22:00:00Z", "2024-01-02T03:00:00Z")]);
    let candidate = window("2024-01-02T00:00:00Z", "2024-01-02T01:00:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn candidate_spanning_midnight_hits_next_day_window() {
    // Booked early on Jan 2, candidate starts on Jan 1 and runs past midnight.
    let store = store_with(&[window("2024-01-02T01:00:00Z", "2024-01-02T02:00:00Z")]);
    let candidate = window("2024-01-01T22:00:00Z", "2024-01-02T01:30:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn candidate_spanning_midnight_containing_next_day_window_conflicts() {
    let store = store_with(&[window("2024-01-02T00:30:00Z", "2024-01-02T01:00:00Z")]);
    let candidate = window("2024-01-01T23:00:00Z", "2024-01-02T02:00:00Z");
    assert!(!is_available(&store, &candidate));
}

#[test]
fn prior_day_window_ending_at_midnight_touches_only() {
    let store = store_with(&[window("2024-01-01T20:00:00Z", "2024-01-02T00:00:00Z")]);
    let candidate = window("2024-01-02T00:00:00Z", "2024-01-02T01:00:00Z");
    assert!(is_available(&store, &candidate));
}

#[test]
fn windows_two_days_apart_never_conflict() {
    let store = store_with(&[window("2024-01-01T09:00:00Z", "2024-01-01T17:00:00Z")]);
    let candidate = window("2024-01-03T09:00:00Z", "2024-01-03T17:00:00Z");
    assert!(is_available(&store, &candidate));
}

#[test]
fn candidate_days_cover_start_end_and_prior_day() {
    let same_day = window("2024-01-02T09:00:00Z", "2024-01-02T10:00:00Z");
    let days: Vec<String> = candidate_days(&same_day).iter().map(|d| d.to_string()).collect();
    assert_eq!(days, vec!["2024-01-02", "2024-01-01"]);

    let spanning = window("2024-01-02T22:00:00Z", "2024-01-03T01:00:00Z");
    let days: Vec<String> = candidate_days(&spanning).iter().map(|d| d.to_string()).collect();
    assert_eq!(days, vec!["2024-01-02", "2024-01-03", "2024-01-01"]);
}

#[test]
fn empty_store_is_always_available() {
    let store = ScheduleStore::new();
    let candidate = window("2024-01-02T09:00:00Z", "2024-01-02T10:00:00Z");
    assert!(is_available(&store, &candidate));
}

#[test]
fn multiple_conflicts_across_days_all_found() {
    let store = store_with(&[
        window("2024-01-01T23:00:00Z", "2024-01-02T00:30:00Z"),
        window("2024-01-02T01:00:00Z", "2024-01-02T02:00:00Z"),
        window("2024-01-02T05:00:00Z", "2024-01-02T06:00:00Z"),
    ]);
    let candidate = window("2024-01-02T00:00:00Z", "2024-01-02T03:00:00Z");

    let conflicts = find_conflicts(&store, &candidate);
    assert_eq!(conflicts.len(), 2);
}
