//! Block positioning on the crew-by-day grid.
//!
//! # Geometry
//! - Left: whole days from the week start to the job start, clamped to
//!   the visible columns `[0, 6]`. Jobs that began last week still show
//!   in the first column.
//! - Width: job length in days rounded up (at least one column), never
//!   narrower than `min_block_width`.
//! - Top: stack row times row pitch (see [`stack_rows`]).
//! - Z-index: `priority / 2`, at least 1.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::stacking::stack_rows;
use crate::config::LayoutConfig;
use crate::models::{days_between, Assignment, Slot, TimeSpan, WeekWindow, DAYS_PER_WEEK, MAX_PRIORITY};

/// On-grid rectangle of a job block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the lane start (px).
    pub left: f64,
    /// Block width (px).
    pub width: f64,
    /// Vertical offset within the lane (px).
    pub top: f64,
    /// Paint order; higher draws above.
    pub z_index: u32,
    /// Stack row within the lane.
    pub row: usize,
    /// Day column of the left edge. `None` for off-grid blocks.
    pub column: Option<usize>,
}

impl Position {
    /// The sentinel position for blocks that cannot be placed by date.
    pub fn unscheduled(assignment: &Assignment, layout: &LayoutConfig) -> Self {
        Self {
            left: layout.unscheduled_left,
            width: layout.min_block_width,
            top: 0.0,
            z_index: z_index(assignment.priority),
            row: 0,
            column: None,
        }
    }

    /// Whether the block sits on the dated grid.
    pub fn is_on_grid(&self) -> bool {
        self.column.is_some()
    }
}

/// Paint order for a priority.
pub fn z_index(priority: u8) -> u32 {
    u32::from(priority.min(MAX_PRIORITY) / 2).max(1)
}

/// Positions one assignment against its lane.
///
/// `crew_assignments` is the candidate-overlap set; entries from other
/// crews are ignored, and `assignment` is added if it is missing. Bad
/// dates fall back to [`Position::unscheduled`].
pub fn position_for(
    assignment: &Assignment,
    window: &WeekWindow,
    crew_assignments: &[Assignment],
    layout: &LayoutConfig,
) -> Position {
    let span = match assignment.slot() {
        Slot::Scheduled(span) => span,
        Slot::Unscheduled => return Position::unscheduled(assignment, layout),
        Slot::Malformed => {
            warn_malformed(assignment);
            return Position::unscheduled(assignment, layout);
        }
    };

    let mut lane: Vec<&Assignment> = crew_assignments
        .iter()
        .filter(|b| b.crew_id == assignment.crew_id)
        .collect();
    let idx = match lane.iter().position(|b| b.id == assignment.id) {
        Some(idx) => idx,
        None => {
            lane.push(assignment);
            lane.len() - 1
        }
    };
    let row = stack_rows(&lane)[idx].unwrap_or(0);

    place(span, row, assignment.priority, window, layout)
}

/// Builds the rectangle for a validly scheduled block.
pub(crate) fn place(
    span: TimeSpan,
    row: usize,
    priority: u8,
    window: &WeekWindow,
    layout: &LayoutConfig,
) -> Position {
    let last_column = (DAYS_PER_WEEK - 1) as f64;
    let day_offset = days_between(window.start(), span.start)
        .floor()
        .clamp(0.0, last_column);
    let span_days = span.duration_days().ceil().max(1.0);

    Position {
        left: day_offset * layout.column_width,
        width: (span_days * layout.column_width).max(layout.min_block_width),
        top: row as f64 * layout.row_pitch(),
        z_index: z_index(priority),
        row,
        column: Some(day_offset as usize),
    }
}

pub(crate) fn warn_malformed(assignment: &Assignment) {
    warn!(
        assignment = %assignment.id,
        job = %assignment.job_id,
        start = ?assignment.start,
        end = ?assignment.end,
        "assignment has inconsistent dates; drawing it off-grid"
    );
}
