//! Assignment (job block) model.
//!
//! An assignment is a crew's scheduled commitment to a job over a time
//! range. The feed of assignments is owned by the external data layer;
//! this crate only reads it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::TimeSpan;

/// Highest meaningful priority value.
pub const MAX_PRIORITY: u8 = 10;

/// A job block on the crew calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Referenced job.
    pub job_id: String,
    /// Assigned crew. `None` = unassigned.
    pub crew_id: Option<String>,
    /// Scheduled start. Present iff `end` is present.
    pub start: Option<NaiveDateTime>,
    /// Scheduled end (exclusive).
    pub end: Option<NaiveDateTime>,
    /// Priority (0-10, higher = more important).
    pub priority: u8,
    /// Workflow status.
    pub status: AssignmentStatus,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Display color (e.g. `"#3b82f6"`).
    pub color: Option<String>,
}

/// Job workflow status.
///
/// Informational only; status filtering happens upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Not yet scheduled.
    #[default]
    Pending,
    /// Scheduled, not started.
    Scheduled,
    /// Work underway.
    InProgress,
    /// Work finished.
    Completed,
    /// Work called off.
    Cancelled,
}

/// How an assignment's dates place it on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// No dates (backlog work).
    Unscheduled,
    /// Dates present but inconsistent (only one end, or `end <= start`).
    Malformed,
    /// A valid `[start, end)` range.
    Scheduled(TimeSpan),
}

impl Assignment {
    /// Creates an unscheduled, unassigned assignment.
    pub fn new(id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            crew_id: None,
            start: None,
            end: None,
            priority: 0,
            status: AssignmentStatus::Pending,
            progress: 0,
            color: None,
        }
    }

    /// Assigns a crew.
    pub fn with_crew(mut self, crew_id: impl Into<String>) -> Self {
        self.crew_id = Some(crew_id.into());
        self
    }

    /// Sets the scheduled range and marks the assignment scheduled.
    pub fn with_schedule(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        if self.status == AssignmentStatus::Pending {
            self.status = AssignmentStatus::Scheduled;
        }
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the completion percentage.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Classifies the assignment's dates.
    pub fn slot(&self) -> Slot {
        match (self.start, self.end) {
            (None, None) => Slot::Unscheduled,
            (Some(start), Some(end)) => TimeSpan::new(start, end).map_or(Slot::Malformed, Slot::Scheduled),
            _ => Slot::Malformed,
        }
    }

    /// The scheduled span, if the dates are valid.
    pub fn span(&self) -> Option<TimeSpan> {
        match self.slot() {
            Slot::Scheduled(span) => Some(span),
            _ => None,
        }
    }

    /// Whether this assignment belongs to the given crew.
    pub fn is_on_crew(&self, crew_id: &str) -> bool {
        self.crew_id.as_deref() == Some(crew_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_assignment_builder() {
        let a = Assignment::new("A1", "J1")
            .with_crew("alpha")
            .with_schedule(at(8), at(17))
            .with_priority(7)
            .with_progress(40)
            .with_color("#ff0000");

        assert_eq!(a.id, "A1");
        assert_eq!(a.job_id, "J1");
        assert!(a.is_on_crew("alpha"));
        assert!(!a.is_on_crew("beta"));
        assert_eq!(a.status, AssignmentStatus::Scheduled);
        assert_eq!(a.priority, 7);
        assert_eq!(a.progress, 40);
        assert_eq!(a.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_slot_classification() {
        let unscheduled = Assignment::new("A1", "J1");
        assert_eq!(unscheduled.slot(), Slot::Unscheduled);
        assert!(unscheduled.span().is_none());

        let ok = Assignment::new("A2", "J2").with_schedule(at(8), at(17));
        assert!(matches!(ok.slot(), Slot::Scheduled(_)));

        let reversed = Assignment::new("A3", "J3").with_schedule(at(17), at(8));
        assert_eq!(reversed.slot(), Slot::Malformed);

        let empty = Assignment::new("A4", "J4").with_schedule(at(8), at(8));
        assert_eq!(empty.slot(), Slot::Malformed);

        let mut half = Assignment::new("A5", "J5");
        half.start = Some(at(8));
        assert_eq!(half.slot(), Slot::Malformed);
    }

    #[test]
    fn test_status_keeps_explicit_value() {
        let a = Assignment::new("A1", "J1")
            .with_status(AssignmentStatus::InProgress)
            .with_schedule(at(8), at(17));
        assert_eq!(a.status, AssignmentStatus::InProgress);
    }

    #[test]
    fn test_serde_status_names() {
        let a = Assignment::new("A1", "J1").with_status(AssignmentStatus::InProgress);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"in_progress\""));
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
