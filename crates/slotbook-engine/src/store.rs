//! Day-bucketed storage of booked windows.
//!
//! Windows are filed under the [`DayKey`] of their start instant. The store
//! itself never checks for conflicts; that is the job of [`crate::conflict`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};
use crate::window::TimeWindow;

/// A UTC calendar day, stored as its day ordinal from the common era
/// (0001-01-01 is day 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(i32);

impl DayKey {
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        Self::from_date(timestamp.date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.num_days_from_ce())
    }

    pub fn ordinal(self) -> i32 {
        self.0
    }

    /// The calendar day immediately before this one.
    pub fn pred(self) -> Self {
        DayKey(self.0.saturating_sub(1))
    }

    pub fn date(self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.0)
    }
}

/// Day key of `timestamp`.
pub fn day_key(timestamp: DateTime<Utc>) -> DayKey {
    DayKey::of(timestamp)
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "day#{}", self.0),
        }
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(DayKey::from_date)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Booked windows grouped by start day, each day in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    days: BTreeMap<DayKey, Vec<TimeWindow>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows filed under `key`, empty if the day was never touched.
    pub fn slots_for(&self, key: DayKey) -> &[TimeWindow] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append `window` to the day `key`, creating the day if absent.
    pub fn insert(&mut self, key: DayKey, window: TimeWindow) {
        self.days.entry(key).or_default().push(window);
    }

    /// Remove the first window under `key` with the same `start` and `end` as
    /// `window`, returning the stored value. Participants are not compared.
    ///
    /// The day entry is kept even when it becomes empty.
    ///
    /// # Errors
    /// Returns `ScheduleError::NotFound` if no stored window matches.
    pub fn remove_exact(&mut self, key: DayKey, window: &TimeWindow) -> Result<TimeWindow> {
        let slots = self.days.get_mut(&key).ok_or(ScheduleError::NotFound)?;
        let index = slots
            .iter()
            .position(|slot| slot.same_interval(window))
            .ok_or(ScheduleError::NotFound)?;
        Ok(slots.remove(index))
    }

    /// Total number of booked windows across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every day, including days emptied by releases, in key order.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            days: self.days.clone(),
        }
    }
}

/// Point-in-time copy of the whole schedule.
///
/// Serializes as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleSnapshot {
    pub days: BTreeMap<DayKey, Vec<TimeWindow>>,
}

impl ScheduleSnapshot {
    pub fn slots_for(&self, key: DayKey) -> &[TimeWindow] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_windows(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
