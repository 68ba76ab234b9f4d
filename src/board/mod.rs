//! Board composition and weekly metrics.
//!
//! [`ScheduleBoard`] wires the engines together for one calendar view:
//! it owns the configuration, roster, visible week, current feed, the
//! derived layout and conflicts, and the drag coordinator.

mod load;
mod schedule_board;

pub use load::CrewLoad;
pub use schedule_board::ScheduleBoard;
