//! Composition root for one crew calendar.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::load::CrewLoad;
use crate::config::BoardConfig;
use crate::conflict::{ConflictDetector, ConflictReport};
use crate::drag::{DragCoordinator, DragPayload, DragSnapshot};
use crate::error::{ConfigError, DragError};
use crate::layout::{BoardLayout, Position};
use crate::models::{Assignment, Crew, WeekWindow};
use crate::validation::{validate_feed, ValidationResult};

/// A weekly crew board: feed, roster, week, and everything derived
/// from them.
///
/// Derived data is recomputed whenever the feed or the week changes.
/// The drag coordinator is owned here and never shared between boards.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    config: BoardConfig,
    roster: Vec<Crew>,
    week: WeekWindow,
    feed: Vec<Assignment>,
    layout: BoardLayout,
    conflicts: ConflictReport,
    drag: DragCoordinator,
}

impl ScheduleBoard {
    /// Creates an empty board showing the week containing `anchor`.
    pub fn new(config: BoardConfig, roster: Vec<Crew>, anchor: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;
        let week = WeekWindow::containing(anchor, config.week.first_day);
        Ok(Self {
            config,
            roster,
            week,
            feed: Vec::new(),
            layout: BoardLayout::default(),
            conflicts: ConflictReport::default(),
            drag: DragCoordinator::new(),
        })
    }

    /// Replaces the assignment feed and recomputes positions and conflicts.
    ///
    /// Data-integrity problems are logged as warnings, not rejected.
    pub fn refresh(&mut self, feed: Vec<Assignment>) {
        if let Err(errors) = validate_feed(&feed, &self.roster) {
            for e in &errors {
                warn!(entity = %e.entity_id, kind = ?e.kind, "{}", e.message);
            }
        }
        self.feed = feed;
        self.relayout();
        self.conflicts = ConflictDetector::new(self.config.conflicts.clone())
            .detect_with_roster(&self.feed, &self.roster);
    }

    /// Moves the visible week by `weeks`.
    pub fn navigate(&mut self, weeks: i64) {
        self.show(self.week.shift(weeks));
    }

    /// Shows the week containing `date`.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.show(WeekWindow::containing(date, self.config.week.first_day));
    }

    fn show(&mut self, week: WeekWindow) {
        debug!(from = %self.week.first_date(), to = %week.first_date(), "week changed");
        self.week = week;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = BoardLayout::compute(&self.feed, &self.week, &self.config.layout);
    }

    /// The board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The visible week.
    pub fn week(&self) -> &WeekWindow {
        &self.week
    }

    /// Whether the visible week contains today.
    pub fn is_current_week(&self) -> bool {
        self.week.contains_today()
    }

    /// Active crews, in roster order.
    pub fn crews(&self) -> impl Iterator<Item = &Crew> {
        self.roster.iter().filter(|c| c.active)
    }

    /// The current feed.
    pub fn assignments(&self) -> &[Assignment] {
        &self.feed
    }

    /// Looks up an assignment.
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.feed.iter().find(|a| a.id == assignment_id)
    }

    /// Assignments in one crew lane, in feed order.
    pub fn lane(&self, crew_id: &str) -> Vec<&Assignment> {
        self.feed.iter().filter(|a| a.is_on_crew(crew_id)).collect()
    }

    /// Backlog: assignments without a crew or without dates.
    pub fn unassigned(&self) -> Vec<&Assignment> {
        self.feed
            .iter()
            .filter(|a| a.crew_id.is_none() || a.span().is_none())
            .collect()
    }

    /// Where to draw a block.
    pub fn position(&self, assignment_id: &str) -> Option<&Position> {
        self.layout.position(assignment_id)
    }

    /// The full layout.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Conflicts in the current feed.
    pub fn conflicts(&self) -> &ConflictReport {
        &self.conflicts
    }

    /// Weekly load per active crew.
    pub fn loads(&self) -> Vec<CrewLoad> {
        CrewLoad::calculate(&self.feed, &self.roster, &self.week, &self.config.work_day)
    }

    /// Runs the feed integrity checks.
    pub fn validate(&self) -> ValidationResult {
        validate_feed(&self.feed, &self.roster)
    }

    /// Drag state for highlighting.
    pub fn drag_state(&self) -> DragSnapshot<'_> {
        self.drag.snapshot()
    }

    /// The board's drag coordinator.
    pub fn drag(&mut self) -> &mut DragCoordinator {
        &mut self.drag
    }

    /// Picks up a block from the feed by id.
    pub fn start_drag(&mut self, assignment_id: &str) -> Result<DragPayload, DragError> {
        let assignment = self
            .assignment(assignment_id)
            .cloned()
            .ok_or_else(|| DragError::UnknownAssignment(assignment_id.to_owned()))?;
        let origin = assignment.crew_id.clone();
        self.drag.start_drag(assignment, origin)
    }
}
