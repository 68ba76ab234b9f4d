//! Drag/drop coordination.
//!
//! A four-event state machine (start, enter/leave, drop, cancel) that is
//! independent of any UI toolkit. The coordinator only reads assignment
//! data; the one way a drop changes anything is the [`CommitChannel`]
//! supplied by the caller.

mod commit;
mod coordinator;
mod payload;
mod session;

pub use commit::{CommitChannel, MoveRequest};
pub use coordinator::{DragCoordinator, DragEvent, DropResult, IgnoreReason};
pub use payload::DragPayload;
pub use session::{DragSession, DragSnapshot, DragState, DropTarget};
