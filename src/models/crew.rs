//! Crew model.
//!
//! Crews are the lanes of the calendar. The roster is supplied by the
//! host; this crate never creates or mutates crews.

use serde::{Deserialize, Serialize};

/// A team that jobs are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    /// Unique crew identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lane color.
    pub color: Option<String>,
    /// Number of jobs the crew can work simultaneously (default: 1).
    pub capacity: u32,
    /// Whether the crew is currently taking work.
    pub active: bool,
}

impl Crew {
    /// Creates an active crew with capacity 1.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            color: None,
            capacity: 1,
            active: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lane color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks the crew inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Display label: the name, or the id when unnamed.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
