//! Commit channel: the only path from a drop to persisted change.
//!
//! The coordinator hands a [`MoveRequest`] to the channel and returns
//! whatever the channel returns, untouched. The channel may finish the
//! write synchronously (returning a `Result`) or start it and hand back
//! a pending handle (a receiver, a future, a task id); the coordinator
//! has already reset its state either way.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::WorkDay;
use crate::models::TimeSpan;

/// A request to move a job to a crew and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Moved assignment.
    pub assignment_id: String,
    /// Job of the moved assignment.
    pub job_id: String,
    /// Crew the job came from (`None` = was unassigned).
    pub from_crew_id: Option<String>,
    /// Crew the job goes to.
    pub to_crew_id: String,
    /// Target day.
    pub date: NaiveDate,
}

impl MoveRequest {
    /// The default work window on the target day.
    ///
    /// A drop onto a day means one full work day unless the channel
    /// decides otherwise.
    pub fn work_span(&self, work_day: &WorkDay) -> Option<TimeSpan> {
        work_day.on(self.date)
    }

    /// Whether the job changes crew.
    pub fn changes_crew(&self) -> bool {
        self.from_crew_id.as_deref() != Some(self.to_crew_id.as_str())
    }
}

/// Applies a move outside the engine.
pub trait CommitChannel {
    /// What the caller gets back: a result, or a handle to a pending one.
    type Outcome;

    /// Starts (or performs) the move.
    fn commit(&mut self, request: MoveRequest) -> Self::Outcome;
}

impl<F, T> CommitChannel for F
where
    F: FnMut(MoveRequest) -> T,
{
    type Outcome = T;

    fn commit(&mut self, request: MoveRequest) -> T {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(from: Option<&str>, to: &str) -> MoveRequest {
        MoveRequest {
            assignment_id: "A1".into(),
            job_id: "J1".into(),
            from_crew_id: from.map(Into::into),
            to_crew_id: to.into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        }
    }

    #[test]
    fn test_work_span_defaults_to_business_hours() {
        let span = request(Some("alpha"), "beta").work_span(&WorkDay::default()).unwrap();
        assert_eq!(span.start.format("%Y-%m-%d %H:%M").to_string(), "2026-10-15 08:00");
        assert_eq!(span.end.format("%H:%M").to_string(), "17:00");
    }

    #[test]
    fn test_changes_crew() {
        assert!(request(Some("alpha"), "beta").changes_crew());
        assert!(request(None, "beta").changes_crew());
        assert!(!request(Some("beta"), "beta").changes_crew());
    }

    #[test]
    fn test_closures_are_channels() {
        let mut seen = Vec::new();
        let mut channel = |r: MoveRequest| seen.push(r.to_crew_id);
        channel.commit(request(None, "beta"));
        assert_eq!(seen, vec!["beta".to_string()]);
    }
}
