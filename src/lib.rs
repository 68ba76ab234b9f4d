//! Crew scheduling calendar engine.
//!
//! Lays job assignments out on a weekly crew-by-day grid, detects
//! overlapping bookings within a crew, and coordinates drag-based
//! reassignment of jobs between crews and days. The crate only reads
//! the assignment feed and derives positions and conflicts from it;
//! every write goes through a caller-supplied commit channel.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Assignment`, `Crew`, `TimeSpan`, `WeekWindow`
//! - **`layout`**: Positioning engine — block rectangles and overlap stacking
//! - **`conflict`**: Conflict detector — pairwise overlap classification per crew
//! - **`drag`**: Drag/drop coordinator — gesture state machine and commit channel
//! - **`board`**: Composition root (`ScheduleBoard`) and weekly crew load
//! - **`validation`**: Feed integrity checks (duplicate IDs, unknown crews, bad dates)
//! - **`config`**: `BoardConfig`, one immutable value per board
//!
//! # Execution Model
//!
//! Everything is synchronous and single-threaded. Layout and conflict
//! detection are pure functions of the feed and the week window; the
//! drag coordinator resets itself before handing a move to the commit
//! channel and never waits for the write.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use crew_calendar::board::ScheduleBoard;
//! use crew_calendar::config::BoardConfig;
//! use crew_calendar::models::{Assignment, Crew};
//!
//! let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
//! let mut board = ScheduleBoard::new(
//!     BoardConfig::default(),
//!     vec![Crew::new("alpha"), Crew::new("beta")],
//!     monday,
//! )
//! .unwrap();
//!
//! board.refresh(vec![
//!     Assignment::new("A1", "J1")
//!         .with_crew("alpha")
//!         .with_schedule(monday.and_hms_opt(8, 0, 0).unwrap(), monday.and_hms_opt(17, 0, 0).unwrap()),
//! ]);
//!
//! assert_eq!(board.position("A1").unwrap().column, Some(0));
//! assert!(board.conflicts().is_empty());
//! assert_eq!(board.week().range_label(), "Oct 12 - 18, 2026");
//! ```

pub mod board;
pub mod config;
pub mod conflict;
pub mod drag;
pub mod error;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::{ConfigError, DragError};
