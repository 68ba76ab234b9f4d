//! Whole-board layout pass.
//!
//! Groups the feed into crew lanes once and positions every block,
//! rather than recomputing the lane for each block as
//! [`position_for`](super::position_for) does.

use std::collections::{BTreeMap, HashMap};

use super::position::{place, warn_malformed, Position};
use super::stacking::{row_count, stack_rows};
use crate::config::LayoutConfig;
use crate::models::{Assignment, Slot, WeekWindow};

/// Lane key: a crew id, or `None` for dated work without a crew.
pub type LaneKey = Option<String>;

/// Positions for an entire assignment feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLayout {
    positions: HashMap<String, Position>,
    lane_rows: BTreeMap<LaneKey, usize>,
    unplaced: Vec<String>,
    row_pitch: f64,
}

impl BoardLayout {
    /// Lays out every assignment in `feed` for `window`.
    ///
    /// Feed order is the tie-breaker for equal start times. A duplicated
    /// id keeps a single position; `validate_feed` reports duplicates.
    pub fn compute(feed: &[Assignment], window: &WeekWindow, layout: &LayoutConfig) -> Self {
        let mut lanes: BTreeMap<LaneKey, Vec<&Assignment>> = BTreeMap::new();
        let mut positions = HashMap::with_capacity(feed.len());
        let mut unplaced = Vec::new();

        for a in feed {
            match a.slot() {
                Slot::Scheduled(_) => lanes.entry(a.crew_id.clone()).or_default().push(a),
                slot => {
                    if slot == Slot::Malformed {
                        warn_malformed(a);
                    }
                    if !positions.contains_key(&a.id) {
                        positions.insert(a.id.clone(), Position::unscheduled(a, layout));
                        unplaced.push(a.id.clone());
                    }
                }
            }
        }

        let mut lane_rows = BTreeMap::new();
        for (key, lane) in lanes {
            let rows = stack_rows(&lane);
            for (a, row) in lane.iter().zip(&rows) {
                if let (Some(span), Some(row)) = (a.span(), row) {
                    positions
                        .entry(a.id.clone())
                        .or_insert_with(|| place(span, *row, a.priority, window, layout));
                }
            }
            lane_rows.insert(key, row_count(&rows));
        }

        Self {
            positions,
            lane_rows,
            unplaced,
            row_pitch: layout.row_pitch(),
        }
    }

    /// Position of one assignment.
    pub fn position(&self, assignment_id: &str) -> Option<&Position> {
        self.positions.get(assignment_id)
    }

    /// All positions keyed by assignment id.
    pub fn positions(&self) -> &HashMap<String, Position> {
        &self.positions
    }

    /// Rows used by a crew lane (0 if the crew has no placed work).
    pub fn lane_rows(&self, crew_id: Option<&str>) -> usize {
        self.lane_rows
            .get(&crew_id.map(str::to_owned))
            .copied()
            .unwrap_or(0)
    }

    /// Lane height in pixels; an empty lane still gets one row.
    pub fn lane_height(&self, crew_id: Option<&str>) -> f64 {
        self.lane_rows(crew_id).max(1) as f64 * self.row_pitch
    }

    /// Ids of assignments drawn off-grid (no dates or bad dates).
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }
}
