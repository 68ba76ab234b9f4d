//! Drag transfer payload.
//!
//! The UI layer carries this payload through its native drag channel
//! (e.g. a data-transfer string). On drop it is parsed back; anything
//! that is not a job-block payload belongs to some other interaction on
//! the page and is ignored.

use serde::{Deserialize, Serialize};

use crate::models::Assignment;

/// Payload describing a job-block drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Dragged assignment.
    pub assignment_id: String,
    /// Job of the dragged assignment.
    pub job_id: String,
}

/// Wire form: `{"kind":"job-block","assignment_id":..,"job_id":..}`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum Transfer {
    JobBlock(DragPayload),
}

impl DragPayload {
    /// The payload for dragging `assignment`.
    pub fn for_assignment(assignment: &Assignment) -> Self {
        Self {
            assignment_id: assignment.id.clone(),
            job_id: assignment.job_id.clone(),
        }
    }

    /// Parses a transferred string. `None` for anything foreign.
    pub fn from_transfer(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw).ok()? {
            Transfer::JobBlock(payload) => Some(payload),
        }
    }

    /// Serializes for the UI's drag channel.
    pub fn to_transfer(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Transfer::JobBlock(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_round_trip() {
        let payload = DragPayload::for_assignment(&Assignment::new("A1", "J1"));
        let raw = payload.to_transfer().unwrap();
        assert!(raw.contains("\"kind\":\"job-block\""));
        assert_eq!(DragPayload::from_transfer(&raw), Some(payload));
    }

    #[test]
    fn test_foreign_payloads_rejected() {
        assert_eq!(DragPayload::from_transfer(""), None);
        assert_eq!(DragPayload::from_transfer("https://example.com"), None);
        assert_eq!(
            DragPayload::from_transfer(r#"{"kind":"file","assignment_id":"A1","job_id":"J1"}"#),
            None
        );
        assert_eq!(
            DragPayload::from_transfer(r#"{"assignment_id":"A1","job_id":"J1"}"#),
            None
        );
        assert_eq!(DragPayload::from_transfer(r#"{"kind":"job-block"}"#), None);
    }
}
