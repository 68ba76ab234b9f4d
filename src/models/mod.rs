//! Crew calendar domain models.
//!
//! Plain data types for the assignment feed, the crew roster, and the
//! visible week. All of them are read-only from the engine's point of
//! view; positions and conflicts are derived from them on demand.
//!
//! # Domain Mappings
//!
//! | crew-calendar | Trades business | Board UI |
//! |---------------|-----------------|----------|
//! | Assignment | Job visit | Job block |
//! | Crew | Field team | Lane (row group) |
//! | WeekWindow | Work week | Header + 7 columns |
//! | TimeSpan | Booked hours | Block extent |

mod assignment;
mod crew;
mod span;
mod week;

pub use assignment::{Assignment, AssignmentStatus, Slot, MAX_PRIORITY};
pub use crew::Crew;
pub use span::{days_between, TimeSpan, MS_PER_DAY};
pub use week::{week_start, WeekWindow, DAYS_PER_WEEK};
