//! Week window model.
//!
//! The visible 7-day period of the board. A window is an immutable value:
//! navigation produces a new window rather than mutating the old one.
//!
//! # Boundaries
//! `start` is local midnight on the configured first day of the week.
//! `end` is the last millisecond of the seventh day, so `[start, end]`
//! is closed on both sides.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use serde::Serialize;

/// Number of days in a window.
pub const DAYS_PER_WEEK: usize = 7;

/// Returns the most recent `first_day` on or before `date`.
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date.checked_sub_signed(TimeDelta::days(i64::from(back)))
        .unwrap_or(date)
}

/// A 7-day visible window anchored to a week boundary.
///
/// Only constructible through [`WeekWindow::containing`] and friends, so
/// the start is always a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    start: NaiveDate,
    first_day: Weekday,
}

impl WeekWindow {
    /// The window containing `date`.
    pub fn containing(date: NaiveDate, first_day: Weekday) -> Self {
        Self {
            start: week_start(date, first_day),
            first_day,
        }
    }

    /// The window containing today (local time).
    pub fn current(first_day: Weekday) -> Self {
        Self::containing(Local::now().date_naive(), first_day)
    }

    /// A new window offset by `weeks * 7` days.
    pub fn shift(&self, weeks: i64) -> Self {
        let moved = TimeDelta::try_weeks(weeks)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .unwrap_or(if weeks < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        Self::containing(moved, self.first_day)
    }

    /// The following week.
    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// The preceding week.
    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    /// First date of the window.
    pub fn first_date(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window.
    pub fn last_date(&self) -> NaiveDate {
        self.start
            .checked_add_signed(TimeDelta::days(6))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The configured first day of the week.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Local midnight on the first date.
    pub fn start(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// The last millisecond of the last date.
    pub fn end(&self) -> NaiveDateTime {
        self.start()
            .checked_add_signed(TimeDelta::days(7) - TimeDelta::milliseconds(1))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// The seven dates of the window, in order.
    pub fn dates(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        let mut dates = [self.start; DAYS_PER_WEEK];
        let mut day = self.start;
        for slot in dates.iter_mut() {
            *slot = day;
            day = day.succ_opt().unwrap_or(day);
        }
        dates
    }

    /// Column index of `date`, if it falls inside the window.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start).num_days();
        usize::try_from(offset).ok().filter(|&i| i < DAYS_PER_WEEK)
    }

    /// Whether `instant` falls within `[start, end]`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start() && instant <= self.end()
    }

    /// Whether the current local time falls within the window.
    pub fn contains_today(&self) -> bool {
        self.contains_at(Local::now().naive_local())
    }

    /// Whether `now` falls within the window.
    pub fn contains_at(&self, now: NaiveDateTime) -> bool {
        self.contains(now)
    }

    /// Header label, e.g. `"Oct 12 - 18, 2026"`.
    pub fn range_label(&self) -> String {
        let first = self.start;
        let last = self.last_date();
        if first.year() != last.year() {
            format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
        } else if first.month() != last.month() {
            format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
        } else {
            format!("{} - {}", first.format("%b %-d"), last.format("%-d, %Y"))
        }
    }
}
