//! Weekly crew load metrics.
//!
//! How much of each crew's week is booked, for lane headers and
//! capacity hints.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled hours | Booked time clipped to the visible week |
//! | Available hours | capacity × work-day hours × working days |
//! | Utilization | scheduled / available |

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::config::WorkDay;
use crate::models::{Assignment, Crew, TimeSpan, WeekWindow};

const MINUTES_PER_HOUR: f64 = 60.0;

/// One crew's booked load for a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewLoad {
    /// Crew id.
    pub crew_id: String,
    /// Assignments with booked time inside the week.
    pub jobs: usize,
    /// Booked hours inside the week.
    pub scheduled_hours: f64,
    /// Hours the crew can work in a week.
    pub available_hours: f64,
    /// `scheduled / available`; `None` when nothing is available.
    pub utilization: Option<f64>,
}

impl CrewLoad {
    /// Computes loads for every active crew in roster order.
    pub fn calculate(
        feed: &[Assignment],
        roster: &[Crew],
        window: &WeekWindow,
        work_day: &WorkDay,
    ) -> Vec<Self> {
        let visible = window
            .end()
            .checked_add_signed(TimeDelta::milliseconds(1))
            .and_then(|end| TimeSpan::new(window.start(), end));

        roster
            .iter()
            .filter(|c| c.active)
            .map(|crew| {
                let mut jobs = 0;
                let mut minutes = 0i64;
                for a in feed.iter().filter(|a| a.is_on_crew(&crew.id)) {
                    let booked = match (a.span(), visible) {
                        (Some(span), Some(visible)) => span.intersection(&visible),
                        _ => None,
                    };
                    if let Some(booked) = booked {
                        jobs += 1;
                        minutes += booked.duration().num_minutes();
                    }
                }

                let scheduled_hours = minutes as f64 / MINUTES_PER_HOUR;
                let available_hours =
                    f64::from(crew.capacity) * work_day.hours() * f64::from(work_day.days_per_week);
                Self {
                    crew_id: crew.id.clone(),
                    jobs,
                    scheduled_hours,
                    available_hours,
                    utilization: (available_hours > 0.0).then(|| scheduled_hours / available_hours),
                }
            })
            .collect()
    }

    /// Whether the crew is booked beyond its available hours.
    pub fn is_overbooked(&self) -> bool {
        self.utilization.is_some_and(|u| u > 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn week() -> WeekWindow {
        WeekWindow::containing(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(), Weekday::Mon)
    }

    #[test]
    fn test_load_basic() {
        let feed = vec![
            Assignment::new("A1", "J1").with_crew("alpha").with_schedule(at(12, 8), at(12, 17)),
            Assignment::new("A2", "J2").with_crew("alpha").with_schedule(at(13, 8), at(13, 17)),
            Assignment::new("A3", "J3").with_crew("beta").with_schedule(at(14, 8), at(14, 12)),
        ];
        let roster = [Crew::new("alpha"), Crew::new("beta").with_capacity(2)];
        let loads = CrewLoad::calculate(&feed, &roster, &week(), &WorkDay::default());

        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].jobs, 2);
        assert!((loads[0].scheduled_hours - 18.0).abs() < 1e-10);
        assert!((loads[0].available_hours - 45.0).abs() < 1e-10); // 9h × 5 days
        assert!((loads[0].utilization.unwrap() - 0.4).abs() < 1e-10);

        assert!((loads[1].available_hours - 90.0).abs() < 1e-10);
        assert!((loads[1].scheduled_hours - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_clips_to_week() {
        // Starts the previous Saturday, ends Monday noon.
        let feed = vec![Assignment::new("A1", "J1").with_crew("alpha").with_schedule(at(10, 12), at(12, 12))];
        let loads = CrewLoad::calculate(&feed, &[Crew::new("alpha")], &week(), &WorkDay::default());
        assert_eq!(loads[0].jobs, 1);
        assert!((loads[0].scheduled_hours - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_skips_inactive_and_unscheduled() {
        let feed = vec![
            Assignment::new("A1", "J1").with_crew("alpha"),
            Assignment::new("A2", "J2").with_crew("alpha").with_schedule(at(20, 8), at(20, 17)),
        ];
        let roster = [Crew::new("alpha"), Crew::new("idle").inactive()];
        let loads = CrewLoad::calculate(&feed, &roster, &week(), &WorkDay::default());
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].jobs, 0);
        assert_eq!(loads[0].scheduled_hours, 0.0);
        assert!(!loads[0].is_overbooked());
    }

    #[test]
    fn test_overbooked() {
        let feed = vec![Assignment::new("A1", "J1").with_crew("alpha").with_schedule(at(12, 0), at(15, 0))];
        let loads = CrewLoad::calculate(&feed, &[Crew::new("alpha")], &week(), &WorkDay::default());
        assert!(loads[0].is_overbooked()); // 72h booked vs 45h available
    }

    #[test]
    fn test_zero_capacity_has_no_utilization() {
        let loads = CrewLoad::calculate(&[], &[Crew::new("alpha").with_capacity(0)], &week(), &WorkDay::default());
        assert_eq!(loads[0].utilization, None);
    }
}
