//! Drag/drop state machine.
//!
//! ```text
//!            start_drag                 drop / cancel
//!   Idle ─────────────────▶ Dragging ─────────────────▶ Idle
//!                             │  ▲
//!                 enter/leave └──┘ (target highlight only)
//! ```
//!
//! A drop resets the state *before* the commit channel is called, so the
//! board never waits on the write. Errors, retries and refreshing the
//! feed belong to the caller.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::commit::{CommitChannel, MoveRequest};
use super::payload::DragPayload;
use super::session::{DragSession, DragSnapshot, DragState, DropTarget};
use crate::error::DragError;
use crate::models::Assignment;

/// Toolkit-neutral drag events.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// A block was picked up.
    Start {
        assignment: Assignment,
        origin_crew_id: Option<String>,
    },
    /// The pointer entered a cell.
    Enter(DropTarget),
    /// The pointer left `left`; `entered` is where it went, if known.
    Leave {
        left: DropTarget,
        entered: Option<DropTarget>,
    },
    /// The block was released over a cell with the transferred payload.
    Drop { payload: String, target: DropTarget },
    /// Escape pressed, or released outside any cell.
    Cancel,
}

/// Why a drop did not reach the commit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing was being dragged.
    NoSession,
    /// The payload is not a job-block drag.
    ForeignPayload,
    /// The payload names a different block than the one being dragged.
    PayloadMismatch,
}

/// Result of a drop.
#[derive(Debug, Clone, PartialEq)]
pub enum DropResult<T> {
    /// The move was handed to the channel; this is what it returned.
    Committed(T),
    /// The drop was a no-op.
    Ignored(IgnoreReason),
}

impl<T> DropResult<T> {
    /// The channel outcome, if the move was committed.
    pub fn into_outcome(self) -> Option<T> {
        match self {
            Self::Committed(outcome) => Some(outcome),
            Self::Ignored(_) => None,
        }
    }
}

/// Owns the drag state for one board.
///
/// Each board holds its own coordinator; there is no shared drag state.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    /// Creates an idle coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Rendering view of the current state.
    pub fn snapshot(&self) -> DragSnapshot<'_> {
        self.state.snapshot()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Whether `crew_id`/`date` is the highlighted cell.
    pub fn is_drop_target(&self, crew_id: &str, date: NaiveDate) -> bool {
        self.snapshot()
            .drop_target
            .is_some_and(|t| t.crew_id == crew_id && t.date == date)
    }

    /// `Idle → Dragging`. Returns the payload the UI should transfer.
    pub fn start_drag(
        &mut self,
        assignment: Assignment,
        origin_crew_id: Option<String>,
    ) -> Result<DragPayload, DragError> {
        if let DragState::Dragging(active) = &self.state {
            return Err(DragError::SessionActive {
                active: active.assignment.id.clone(),
            });
        }
        let payload = DragPayload::for_assignment(&assignment);
        debug!(assignment = %assignment.id, origin = ?origin_crew_id, "drag started");
        self.state = DragState::Dragging(DragSession {
            assignment,
            origin_crew_id,
            drop_target: None,
        });
        Ok(payload)
    }

    /// Highlights `target`. Ignored when idle.
    pub fn drag_enter(&mut self, target: DropTarget) {
        if let DragState::Dragging(session) = &mut self.state {
            session.drop_target = Some(target);
        }
    }

    /// Clears the highlight when the pointer really leaves it.
    ///
    /// Moving between nested parts of the same cell reports `entered` as
    /// that same cell and keeps the highlight. Leaving a cell that is no
    /// longer highlighted does nothing.
    pub fn drag_leave(&mut self, left: &DropTarget, entered: Option<&DropTarget>) {
        if let DragState::Dragging(session) = &mut self.state {
            if session.drop_target.as_ref() == Some(left) && entered != Some(left) {
                session.drop_target = None;
            }
        }
    }

    /// `Dragging → Idle` without committing.
    pub fn cancel(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            debug!(assignment = %session.assignment.id, "drag cancelled");
        }
    }

    /// Ends the gesture and forwards the move to `channel`.
    ///
    /// The state is `Idle` when this returns, whatever the payload and
    /// whatever the channel does. The channel is called at most once.
    pub fn drop<C: CommitChannel>(
        &mut self,
        payload: &str,
        target: DropTarget,
        channel: &mut C,
    ) -> DropResult<C::Outcome> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            debug!("drop without an active drag ignored");
            return DropResult::Ignored(IgnoreReason::NoSession);
        };
        let Some(payload) = DragPayload::from_transfer(payload) else {
            debug!(assignment = %session.assignment.id, "drop with foreign payload ignored");
            return DropResult::Ignored(IgnoreReason::ForeignPayload);
        };
        if payload.assignment_id != session.assignment.id {
            debug!(
                assignment = %session.assignment.id,
                payload = %payload.assignment_id,
                "drop payload names another block; ignored"
            );
            return DropResult::Ignored(IgnoreReason::PayloadMismatch);
        }

        let request = MoveRequest {
            assignment_id: session.assignment.id,
            job_id: session.assignment.job_id,
            from_crew_id: session.origin_crew_id,
            to_crew_id: target.crew_id,
            date: target.date,
        };
        info!(
            assignment = %request.assignment_id,
            job = %request.job_id,
            to_crew = %request.to_crew_id,
            date = %request.date,
            "committing drop"
        );
        DropResult::Committed(channel.commit(request))
    }

    /// Applies one event. Returns the drop result for `Drop` events.
    pub fn handle<C: CommitChannel>(
        &mut self,
        event: DragEvent,
        channel: &mut C,
    ) -> Result<Option<DropResult<C::Outcome>>, DragError> {
        match event {
            DragEvent::Start {
                assignment,
                origin_crew_id,
            } => {
                self.start_drag(assignment, origin_crew_id)?;
            }
            DragEvent::Enter(target) => self.drag_enter(target),
            DragEvent::Leave { left, entered } => self.drag_leave(&left, entered.as_ref()),
            DragEvent::Drop { payload, target } => {
                return Ok(Some(self.drop(&payload, target, channel)));
            }
            DragEvent::Cancel => self.cancel(),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::sync::mpsc;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        date(day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn j1() -> Assignment {
        Assignment::new("J1", "job-1")
            .with_crew("Alpha")
            .with_schedule(at(12, 8), at(13, 17))
    }

    fn transfer(a: &Assignment) -> String {
        DragPayload::for_assignment(a).to_transfer().unwrap()
    }

    #[test]
    fn test_drop_commits_and_resets() {
        let mut coordinator = DragCoordinator::new();
        let payload = coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();
        assert!(coordinator.is_dragging());
        assert_eq!(coordinator.snapshot().dragged.map(|a| a.id.as_str()), Some("J1"));

        // Thursday cell of crew Beta.
        let thursday = DropTarget::new("Beta", date(15));
        coordinator.drag_enter(thursday.clone());
        assert!(coordinator.is_drop_target("Beta", date(15)));

        let mut calls = Vec::new();
        let result = coordinator.drop(&payload.to_transfer().unwrap(), thursday, &mut |r: MoveRequest| {
            calls.push(r);
        });

        assert_eq!(result, DropResult::Committed(()));
        assert!(!coordinator.is_dragging());
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].job_id, "job-1");
        assert_eq!(calls[0].assignment_id, "J1");
        assert_eq!(calls[0].to_crew_id, "Beta");
        assert_eq!(calls[0].date, date(15));
        assert_eq!(calls[0].from_crew_id.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_reset_does_not_wait_for_commit() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();

        // The channel starts the write and hands back a pending result.
        let (tx, rx) = mpsc::channel::<Result<(), String>>();
        let mut pending = Some(rx);
        let mut channel = |_: MoveRequest| pending.take();
        let result = coordinator.drop(&transfer(&j1()), DropTarget::new("Beta", date(15)), &mut channel);

        assert!(!coordinator.is_dragging());
        let rx = result.into_outcome().flatten().unwrap();
        assert!(rx.try_recv().is_err()); // still unresolved

        // A new gesture can start before the write lands.
        assert!(coordinator.start_drag(j1(), None).is_ok());

        tx.send(Err("network down".into())).unwrap();
        assert_eq!(rx.recv().unwrap(), Err("network down".to_string()));
    }

    #[test]
    fn test_failed_commit_propagates_and_still_resets() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();
        let result = coordinator.drop(&transfer(&j1()), DropTarget::new("Beta", date(15)), &mut |_: MoveRequest| {
            Err::<(), _>("permission denied")
        });
        assert_eq!(result, DropResult::Committed(Err("permission denied")));
        assert_eq!(coordinator.state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_without_session_is_noop() {
        let mut coordinator = DragCoordinator::new();
        let mut called = false;
        let result = coordinator.drop(&transfer(&j1()), DropTarget::new("Beta", date(15)), &mut |_: MoveRequest| {
            called = true;
        });
        assert_eq!(result, DropResult::Ignored(IgnoreReason::NoSession));
        assert!(!called);
    }

    #[test]
    fn test_foreign_payload_ignored() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();
        let mut called = false;
        let result = coordinator.drop("text/plain: hello", DropTarget::new("Beta", date(15)), &mut |_: MoveRequest| {
            called = true;
        });
        assert_eq!(result, DropResult::Ignored(IgnoreReason::ForeignPayload));
        assert!(!called);
        assert!(!coordinator.is_dragging());
    }

    #[test]
    fn test_mismatched_payload_ignored() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();
        let other = Assignment::new("J9", "job-9");
        let result = coordinator.drop(&transfer(&other), DropTarget::new("Beta", date(15)), &mut |_: MoveRequest| ());
        assert_eq!(result, DropResult::Ignored(IgnoreReason::PayloadMismatch));
        assert!(!coordinator.is_dragging());
    }

    #[test]
    fn test_cancel_skips_commit() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), Some("Alpha".into())).unwrap();
        coordinator.drag_enter(DropTarget::new("Beta", date(15)));
        coordinator.cancel();
        assert_eq!(coordinator.state(), &DragState::Idle);
        assert!(coordinator.snapshot().drop_target.is_none());
        coordinator.cancel(); // idle cancel is harmless
    }

    #[test]
    fn test_single_session() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), None).unwrap();
        let err = coordinator.start_drag(Assignment::new("J2", "job-2"), None).unwrap_err();
        assert_eq!(err, DragError::SessionActive { active: "J1".into() });
        assert_eq!(coordinator.snapshot().dragged.unwrap().id, "J1");
    }

    #[test]
    fn test_leave_only_clears_on_real_exit() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_drag(j1(), None).unwrap();
        let cell = DropTarget::new("Beta", date(15));
        let next = DropTarget::new("Beta", date(16));

        coordinator.drag_enter(cell.clone());
        // Crossing a nested element inside the same cell.
        coordinator.drag_leave(&cell, Some(&cell));
        assert!(coordinator.is_drop_target("Beta", date(15)));

        // Entering the neighbour first, then the late leave of the old cell.
        coordinator.drag_enter(next.clone());
        coordinator.drag_leave(&cell, Some(&next));
        assert!(coordinator.is_drop_target("Beta", date(16)));

        coordinator.drag_leave(&next, None);
        assert!(coordinator.snapshot().drop_target.is_none());
        assert!(coordinator.is_dragging());
    }

    #[test]
    fn test_enter_when_idle_is_ignored() {
        let mut coordinator = DragCoordinator::new();
        coordinator.drag_enter(DropTarget::new("Beta", date(15)));
        assert_eq!(coordinator.state(), &DragState::Idle);
    }

    #[test]
    fn test_event_dispatch() {
        let mut coordinator = DragCoordinator::new();
        let mut moves = Vec::new();
        let mut channel = |r: MoveRequest| moves.push(r);
        let target = DropTarget::new("Beta", date(15));

        let events = vec![
            DragEvent::Start {
                assignment: j1(),
                origin_crew_id: Some("Alpha".into()),
            },
            DragEvent::Enter(target.clone()),
            DragEvent::Leave {
                left: target.clone(),
                entered: Some(target.clone()),
            },
        ];
        for event in events {
            assert_eq!(coordinator.handle(event, &mut channel).unwrap(), None);
        }
        assert!(coordinator.is_drop_target("Beta", date(15)));

        let dropped = coordinator
            .handle(
                DragEvent::Drop {
                    payload: transfer(&j1()),
                    target,
                },
                &mut channel,
            )
            .unwrap();
        assert_eq!(dropped, Some(DropResult::Committed(())));
        assert!(coordinator.handle(DragEvent::Cancel, &mut channel).unwrap().is_none());
        assert_eq!(moves.len(), 1);
    }
}
