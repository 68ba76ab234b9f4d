//! Time span model and date arithmetic.
//!
//! All instants are local wall-clock times (`NaiveDateTime`). The board
//! works in the business's own time zone; the consumer converts before
//! handing assignments over.
//!
//! # Interval Semantics
//! Spans are half-open: `[start, end)`. A job ending at 12:00 and a job
//! starting at 12:00 do not overlap.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Milliseconds in one calendar day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeSpan {
    /// Creates a span. Returns `None` unless `start < end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Duration of this span.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in fractional days.
    #[inline]
    pub fn duration_days(&self) -> f64 {
        days_between(self.start, self.end)
    }

    /// Whether an instant falls within this span.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Whether `other` lies entirely within this span.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether two spans overlap (touching ends do not count).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The shared part of two spans, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// The last calendar date this span occupies.
    ///
    /// A span ending exactly at midnight does not occupy the following day.
    pub fn last_date(&self) -> NaiveDate {
        self.end
            .checked_sub_signed(TimeDelta::milliseconds(1))
            .map_or(self.end.date(), |t| t.date())
    }
}

/// Signed fractional days from `from` to `to`.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}
