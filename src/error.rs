//! Error types.
//!
//! The engines themselves are infallible on bad data (they fall back and
//! log); errors are reserved for misconfiguration and misuse of the drag
//! state machine.

use thiserror::Error;

/// Invalid [`BoardConfig`](crate::config::BoardConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A dimension that must be positive is not.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// The stacking gap is negative.
    #[error("layout.stack_gap must not be negative, got {0}")]
    NegativeGap(f64),

    /// The back-to-back buffer is negative.
    #[error("conflicts.back_to_back_buffer_minutes must not be negative, got {0}")]
    NegativeBuffer(i64),

    /// The work day is empty or longer than a day.
    #[error("work day {start_minute}..{end_minute} is not a valid range of minutes within one day")]
    InvalidWorkDay { start_minute: u32, end_minute: u32 },

    /// Days per week outside 1..=7.
    #[error("work_day.days_per_week must be between 1 and 7, got {0}")]
    InvalidDaysPerWeek(u32),
}

/// Misuse of the drag coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// A drag was started while another is in progress.
    #[error("a drag of assignment '{active}' is already in progress")]
    SessionActive { active: String },

    /// The assignment to pick up is not in the feed.
    #[error("assignment '{0}' is not on the board")]
    UnknownAssignment(String),
}
