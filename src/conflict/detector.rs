//! Pairwise conflict detection within crew lanes.
//!
//! # Algorithm
//! Per crew: keep validly scheduled assignments, sort by start (then
//! end, then id), and classify every unordered pair once.
//!
//! | Pair relation | Kind | Severity |
//! |---------------|------|----------|
//! | one encloses the other | full-overlap | error |
//! | shared time otherwise | partial-overlap | error |
//! | gap `<=` buffer | back-to-back | warning |
//! | gap `>` buffer, same calendar day | same-day-double | error |
//!
//! With a roster, an overlap on a crew whose capacity is above 1 is a
//! warning as long as the number of jobs overlapping the shared time
//! stays within capacity.
//!
//! # Complexity
//! O(n²) per crew per feed. Lanes hold tens of jobs a week; large
//! rosters with hundreds of jobs per crew would need a sweep instead.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::report::{Conflict, ConflictKind, ConflictReport, Severity};
use crate::config::ConflictConfig;
use crate::models::{Assignment, Crew, TimeSpan};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Finds conflicts in an assignment feed.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    config: ConflictConfig,
}

/// A validly scheduled lane entry.
struct Entry<'a> {
    assignment: &'a Assignment,
    span: TimeSpan,
}

impl ConflictDetector {
    /// Creates a detector.
    pub fn new(config: ConflictConfig) -> Self {
        Self { config }
    }

    /// Detects conflicts, treating every overlap as an error.
    pub fn detect(&self, feed: &[Assignment]) -> ConflictReport {
        self.run(feed, &HashMap::new())
    }

    /// Detects conflicts using crew capacities and names from `roster`.
    pub fn detect_with_roster(&self, feed: &[Assignment], roster: &[Crew]) -> ConflictReport {
        let crews = roster.iter().map(|c| (c.id.as_str(), c)).collect();
        self.run(feed, &crews)
    }

    /// Detects conflicts within one crew's lane.
    ///
    /// Assignments from other crews are skipped.
    pub fn detect_lane(&self, crew: &Crew, lane: &[&Assignment]) -> Vec<Conflict> {
        let lane: Vec<&Assignment> = lane.iter().copied().filter(|a| a.is_on_crew(&crew.id)).collect();
        self.scan(&crew.id, crew.label(), crew.capacity, &lane)
    }

    fn run(&self, feed: &[Assignment], crews: &HashMap<&str, &Crew>) -> ConflictReport {
        let mut lanes: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
        for a in feed {
            if let Some(crew_id) = a.crew_id.as_deref() {
                lanes.entry(crew_id).or_default().push(a);
            }
        }

        let mut conflicts = Vec::new();
        for (crew_id, lane) in lanes {
            let (label, capacity) = crews
                .get(crew_id)
                .map_or((crew_id, 1), |c| (c.label(), c.capacity));
            conflicts.extend(self.scan(crew_id, label, capacity, &lane));
        }

        let report = ConflictReport::new(conflicts);
        debug!(
            total = report.total_conflicts,
            errors = report.error_count,
            warnings = report.warning_count,
            "conflict detection finished"
        );
        report
    }

    fn scan(&self, crew_id: &str, crew_label: &str, capacity: u32, lane: &[&Assignment]) -> Vec<Conflict> {
        let mut entries: Vec<Entry<'_>> = lane
            .iter()
            .filter_map(|&a| a.span().map(|span| Entry { assignment: a, span }))
            .collect();
        entries.sort_by(|x, y| {
            (x.span.start, x.span.end, &x.assignment.id).cmp(&(y.span.start, y.span.end, &y.assignment.id))
        });

        let mut conflicts = Vec::new();
        for (i, first) in entries.iter().enumerate() {
            for second in &entries[i + 1..] {
                if let Some((kind, severity, overlap)) = self.classify(first, second, &entries, capacity) {
                    conflicts.push(Conflict {
                        first_id: first.assignment.id.clone(),
                        second_id: second.assignment.id.clone(),
                        first_job_id: first.assignment.job_id.clone(),
                        second_job_id: second.assignment.job_id.clone(),
                        crew_id: crew_id.to_owned(),
                        kind,
                        severity,
                        overlap_days: overlap.map_or(0.0, |o| o.duration_days()),
                        message: describe(kind, first, second, overlap, crew_label),
                        overlap,
                    });
                }
            }
        }
        conflicts
    }

    /// `first` starts no later than `second`.
    fn classify(
        &self,
        first: &Entry<'_>,
        second: &Entry<'_>,
        lane: &[Entry<'_>],
        capacity: u32,
    ) -> Option<(ConflictKind, Severity, Option<TimeSpan>)> {
        if let Some(shared) = first.span.intersection(&second.span) {
            let kind = if first.span.encloses(&second.span) || second.span.encloses(&first.span) {
                ConflictKind::FullOverlap
            } else {
                ConflictKind::PartialOverlap
            };
            let concurrent = lane.iter().filter(|e| e.span.overlaps(&shared)).count();
            let severity = if capacity > 1 && concurrent <= capacity as usize {
                Severity::Warning
            } else {
                Severity::Error
            };
            return Some((kind, severity, Some(shared)));
        }

        let gap = second.span.start - first.span.end;
        if gap <= self.config.buffer() {
            return Some((ConflictKind::BackToBack, Severity::Warning, None));
        }
        if self.config.flag_same_day && first.span.last_date() == second.span.start.date() {
            return Some((ConflictKind::SameDayDouble, Severity::Error, None));
        }
        None
    }
}

fn describe(
    kind: ConflictKind,
    first: &Entry<'_>,
    second: &Entry<'_>,
    overlap: Option<TimeSpan>,
    crew: &str,
) -> String {
    let (a, b) = (&first.assignment.job_id, &second.assignment.job_id);
    let hours = overlap.map_or(0.0, |o| o.duration().num_minutes() as f64 / MINUTES_PER_HOUR);
    match kind {
        ConflictKind::FullOverlap => {
            let (outer, inner) = if first.span.encloses(&second.span) { (a, b) } else { (b, a) };
            format!("Job {inner} falls entirely within job {outer} for crew {crew} ({hours:.1}h overlap)")
        }
        ConflictKind::PartialOverlap => {
            format!("Jobs {a} and {b} overlap by {hours:.1}h for crew {crew}")
        }
        ConflictKind::SameDayDouble => format!(
            "Jobs {a} and {b} are both booked for crew {crew} on {}",
            second.span.start.date().format("%a %b %-d")
        ),
        ConflictKind::BackToBack => {
            let gap = (second.span.start - first.span.end).num_minutes();
            if gap == 0 {
                format!("Job {b} starts as job {a} ends for crew {crew}")
            } else {
                format!("Job {b} starts {gap} min after job {a} ends for crew {crew}")
            }
        }
    }
}
