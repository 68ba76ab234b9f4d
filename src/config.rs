//! Board configuration.
//!
//! One immutable [`BoardConfig`] is built at the composition root and
//! passed by reference to every engine. All fields have defaults, so a
//! host can deserialize a partial document:
//!
//! ```
//! use crew_calendar::config::BoardConfig;
//!
//! let config: BoardConfig = serde_json::from_str(r#"{ "layout": { "column_width": 120.0 } }"#).unwrap();
//! assert_eq!(config.layout.column_width, 120.0);
//! assert!(config.validate().is_ok());
//! ```

use chrono::{NaiveDate, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::TimeSpan;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Week convention.
    pub week: WeekConfig,
    /// Grid geometry.
    pub layout: LayoutConfig,
    /// Conflict classification.
    pub conflicts: ConflictConfig,
    /// Default business hours.
    pub work_day: WorkDay,
}

/// Week convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekConfig {
    /// First day of every week window.
    pub first_day: Weekday,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            first_day: Weekday::Mon,
        }
    }
}

/// Grid geometry in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of one day column.
    pub column_width: f64,
    /// Narrowest a block may be drawn.
    pub min_block_width: f64,
    /// Height of one stacked row.
    pub block_height: f64,
    /// Vertical gap between stacked rows.
    pub stack_gap: f64,
    /// Left offset used for blocks that cannot be placed on the grid.
    pub unscheduled_left: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 140.0,
            min_block_width: 48.0,
            block_height: 52.0,
            stack_gap: 4.0,
            unscheduled_left: -1.0,
        }
    }
}

impl LayoutConfig {
    /// Distance between the tops of two adjacent rows.
    #[inline]
    pub fn row_pitch(&self) -> f64 {
        self.block_height + self.stack_gap
    }
}

/// Conflict classification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictConfig {
    /// Largest gap (minutes) between two jobs still reported as back-to-back.
    pub back_to_back_buffer_minutes: i64,
    /// Whether non-overlapping jobs on the same calendar day are reported.
    pub flag_same_day: bool,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            back_to_back_buffer_minutes: 0,
            flag_same_day: true,
        }
    }
}

impl ConflictConfig {
    /// The back-to-back buffer as a duration.
    pub fn buffer(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.back_to_back_buffer_minutes).unwrap_or(TimeDelta::zero())
    }
}

/// Default business hours applied to dropped jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkDay {
    /// Start of the work day, minutes after midnight.
    pub start_minute: u32,
    /// End of the work day, minutes after midnight.
    pub end_minute: u32,
    /// Working days per week, for load metrics.
    pub days_per_week: u32,
}

impl Default for WorkDay {
    fn default() -> Self {
        Self {
            start_minute: 8 * 60,
            end_minute: 17 * 60,
            days_per_week: 5,
        }
    }
}

impl WorkDay {
    /// The work window on `date`. `None` if the hours are invalid.
    pub fn on(&self, date: NaiveDate) -> Option<TimeSpan> {
        let start = NaiveTime::from_num_seconds_from_midnight_opt(self.start_minute * 60, 0)?;
        let end = NaiveTime::from_num_seconds_from_midnight_opt(self.end_minute * 60, 0)?;
        TimeSpan::new(date.and_time(start), date.and_time(end))
    }

    /// Length of the work day in hours.
    pub fn hours(&self) -> f64 {
        f64::from(self.end_minute.saturating_sub(self.start_minute)) / 60.0
    }
}

impl BoardConfig {
    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        for (field, value) in [
            ("layout.column_width", layout.column_width),
            ("layout.min_block_width", layout.min_block_width),
            ("layout.block_height", layout.block_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(layout.stack_gap.is_finite() && layout.stack_gap >= 0.0) {
            return Err(ConfigError::NegativeGap(layout.stack_gap));
        }
        if self.conflicts.back_to_back_buffer_minutes < 0 {
            return Err(ConfigError::NegativeBuffer(
                self.conflicts.back_to_back_buffer_minutes,
            ));
        }
        let wd = &self.work_day;
        if wd.start_minute >= wd.end_minute || wd.end_minute > MINUTES_PER_DAY {
            return Err(ConfigError::InvalidWorkDay {
                start_minute: wd.start_minute,
                end_minute: wd.end_minute,
            });
        }
        if !(1..=7).contains(&wd.days_per_week) {
            return Err(ConfigError::InvalidDaysPerWeek(wd.days_per_week));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.week.first_day, Weekday::Mon);
        assert!((config.layout.row_pitch() - 56.0).abs() < 1e-10);
        assert!((config.work_day.hours() - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_document() {
        let config: BoardConfig = serde_json::from_str(
            r#"{ "week": { "first_day": "Sun" }, "conflicts": { "back_to_back_buffer_minutes": 30 } }"#,
        )
        .unwrap();
        assert_eq!(config.week.first_day, Weekday::Sun);
        assert_eq!(config.conflicts.buffer(), TimeDelta::minutes(30));
        assert!(config.conflicts.flag_same_day);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_work_window() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let span = WorkDay::default().on(date).unwrap();
        assert_eq!(span.start, date.and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(span.end, date.and_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_bad_layout() {
        let mut config = BoardConfig::default();
        config.layout.column_width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "layout.column_width", .. })
        ));

        let mut config = BoardConfig::default();
        config.layout.stack_gap = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::NegativeGap(_))));
    }

    #[test]
    fn test_rejects_bad_work_day() {
        let mut config = BoardConfig::default();
        config.work_day.start_minute = 17 * 60;
        config.work_day.end_minute = 8 * 60;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWorkDay { .. })));
        assert!(config.work_day.on(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()).is_none());

        let mut config = BoardConfig::default();
        config.work_day.days_per_week = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDaysPerWeek(0))));
    }

    #[test]
    fn test_rejects_negative_buffer() {
        let mut config = BoardConfig::default();
        config.conflicts.back_to_back_buffer_minutes = -5;
        assert!(matches!(config.validate(), Err(ConfigError::NegativeBuffer(-5))));
    }
}
