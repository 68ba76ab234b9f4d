//! Drag session state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Assignment;

/// A crew/day cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropTarget {
    /// Crew lane.
    pub crew_id: String,
    /// Day column.
    pub date: NaiveDate,
}

impl DropTarget {
    /// Creates a target cell.
    pub fn new(crew_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            crew_id: crew_id.into(),
            date,
        }
    }
}

/// An in-progress reassignment gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The block being dragged.
    pub assignment: Assignment,
    /// Crew the block was picked up from.
    pub origin_crew_id: Option<String>,
    /// Cell currently under the pointer, for highlighting.
    pub drop_target: Option<DropTarget>,
}

/// Coordinator state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A block is being dragged.
    Dragging(DragSession),
}

/// Read-only view of the drag state for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot<'a> {
    /// Whether a gesture is in progress.
    pub is_dragging: bool,
    /// The dragged block.
    pub dragged: Option<&'a Assignment>,
    /// The highlighted cell.
    pub drop_target: Option<&'a DropTarget>,
}

impl DragState {
    /// Rendering view of this state.
    pub fn snapshot(&self) -> DragSnapshot<'_> {
        match self {
            Self::Idle => DragSnapshot {
                is_dragging: false,
                dragged: None,
                drop_target: None,
            },
            Self::Dragging(session) => DragSnapshot {
                is_dragging: true,
                dragged: Some(&session.assignment),
                drop_target: session.drop_target.as_ref(),
            },
        }
    }
}
