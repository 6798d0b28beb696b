//! Availability intervals.
//!
//! This module provides [`Interval`], one contiguous block of availability
//! selected by the user, and the sort helper the formatter relies on.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One contiguous block of availability.
///
/// Represents a half-open range `[start, end)` in UTC. The calendar UI that
/// produced the selection owns the values; the formatter only ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Start of the block (inclusive).
    pub start: DateTime<Utc>,
    /// End of the block (exclusive).
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not strictly before `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start < end, "Interval start must be < end");
        Self { start, end }
    }

    /// Creates an interval from a start time and duration.
    pub fn from_duration(start: DateTime<Utc>, duration: Duration) -> Self {
        Self::new(start, start + duration)
    }

    /// Returns the duration of this interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if a datetime falls within this interval.
    ///
    /// Uses half-open interval semantics: `[start, end)`.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }

    /// Checks if this interval overlaps another.
    ///
    /// Two intervals overlap if each starts before the other ends.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Returns a copy of `intervals` sorted ascending by start time.
///
/// The sort is stable: intervals sharing a start time keep their original
/// relative order. The input slice is left untouched.
pub fn sort_by_start(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);
    sorted
}
