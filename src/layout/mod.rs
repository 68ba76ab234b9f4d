//! Positioning engine.
//!
//! Turns assignments into rectangles on the weekly crew-by-day grid:
//! horizontal extent from dates, vertical offset from overlap stacking
//! within the crew lane, paint order from priority.
//!
//! Positions are derived values. They are recomputed from the current
//! feed and week window on every pass and never stored.

mod grid;
mod position;
mod stacking;

pub use grid::{BoardLayout, LaneKey};
pub use position::{position_for, z_index, Position};
pub use stacking::{row_count, stack_rows};
