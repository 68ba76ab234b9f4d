//! Conflict detection.
//!
//! Finds every pair of same-crew assignments whose times collide,
//! classifies the collision, and reports each unordered pair exactly
//! once. Assignments without valid dates or without a crew never
//! conflict.
//!
//! # Usage
//!
//! ```
//! use crew_calendar::config::ConflictConfig;
//! use crew_calendar::conflict::{ConflictDetector, ConflictKind};
//! use crew_calendar::models::Assignment;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
//! let feed = vec![
//!     Assignment::new("A1", "J1").with_crew("alpha")
//!         .with_schedule(day.and_hms_opt(8, 0, 0).unwrap(), day.and_hms_opt(17, 0, 0).unwrap()),
//!     Assignment::new("A2", "J2").with_crew("alpha")
//!         .with_schedule(day.and_hms_opt(9, 0, 0).unwrap(), day.and_hms_opt(15, 0, 0).unwrap()),
//! ];
//!
//! let report = ConflictDetector::new(ConflictConfig::default()).detect(&feed);
//! assert_eq!(report.total_conflicts, 1);
//! assert_eq!(report.conflicts[0].kind, ConflictKind::FullOverlap);
//! ```

mod detector;
mod report;

pub use detector::ConflictDetector;
pub use report::{Conflict, ConflictKind, ConflictReport, Severity};
