//! Conflict records and the aggregated report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::TimeSpan;

/// How two same-crew assignments collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// One job lies entirely within the other.
    FullOverlap,
    /// The jobs share part of their time.
    PartialOverlap,
    /// No shared time, but the crew is booked twice on one calendar day.
    SameDayDouble,
    /// One job starts within the buffer after the other ends.
    BackToBack,
}

impl ConflictKind {
    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullOverlap => "Full overlap",
            Self::PartialOverlap => "Partial overlap",
            Self::SameDayDouble => "Same-day double booking",
            Self::BackToBack => "Back-to-back",
        }
    }
}

/// Conflict severity. Ordered: `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth a look; the crew can likely manage.
    Warning,
    /// The crew cannot be in two places at once.
    Error,
}

/// A conflict between exactly two assignments on one crew.
///
/// `first` is the earlier-starting assignment (ties by end, then id), so
/// a pair is always reported the same way regardless of feed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Earlier assignment id.
    pub first_id: String,
    /// Later assignment id.
    pub second_id: String,
    /// Job of the earlier assignment.
    pub first_job_id: String,
    /// Job of the later assignment.
    pub second_job_id: String,
    /// Crew both assignments belong to.
    pub crew_id: String,
    /// Classification.
    pub kind: ConflictKind,
    /// Severity.
    pub severity: Severity,
    /// Shared time, when the jobs actually overlap.
    pub overlap: Option<TimeSpan>,
    /// Length of the shared time in days (0 when they do not overlap).
    pub overlap_days: f64,
    /// Human-readable description.
    pub message: String,
}

impl Conflict {
    /// Whether `assignment_id` is one side of this conflict.
    pub fn involves(&self, assignment_id: &str) -> bool {
        self.first_id == assignment_id || self.second_id == assignment_id
    }

    /// The other side of the conflict, if `assignment_id` is one side.
    pub fn counterpart(&self, assignment_id: &str) -> Option<&str> {
        if self.first_id == assignment_id {
            Some(&self.second_id)
        } else if self.second_id == assignment_id {
            Some(&self.first_id)
        } else {
            None
        }
    }
}

/// Result of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Every conflict, grouped by crew in crew-id order.
    pub conflicts: Vec<Conflict>,
    /// `conflicts.len()`.
    pub total_conflicts: usize,
    /// Conflicts with [`Severity::Error`].
    pub error_count: usize,
    /// Conflicts with [`Severity::Warning`].
    pub warning_count: usize,
}

impl ConflictReport {
    /// Builds a report and its counters.
    pub fn new(conflicts: Vec<Conflict>) -> Self {
        let error_count = conflicts
            .iter()
            .filter(|c| c.severity == Severity::Error)
            .count();
        Self {
            total_conflicts: conflicts.len(),
            warning_count: conflicts.len() - error_count,
            error_count,
            conflicts,
        }
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Whether any conflict is an error.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Conflicts grouped by crew id.
    pub fn by_crew(&self) -> BTreeMap<&str, Vec<&Conflict>> {
        let mut groups: BTreeMap<&str, Vec<&Conflict>> = BTreeMap::new();
        for c in &self.conflicts {
            groups.entry(c.crew_id.as_str()).or_default().push(c);
        }
        groups
    }

    /// Conflicts involving one assignment.
    pub fn for_assignment(&self, assignment_id: &str) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.involves(assignment_id))
            .collect()
    }

    /// Worst severity involving one assignment, for block indicators.
    pub fn severity_for(&self, assignment_id: &str) -> Option<Severity> {
        self.conflicts
            .iter()
            .filter(|c| c.involves(assignment_id))
            .map(|c| c.severity)
            .max()
    }
}
