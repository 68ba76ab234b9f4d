//! Integrity checks for the assignment feed.
//!
//! The engines tolerate bad data (off-grid fallback, exclusion from
//! conflict checks). These checks let the host surface the underlying
//! data problems as warnings. Detects:
//! - Duplicate assignment or crew IDs
//! - Assignments referencing unknown or inactive crews
//! - Inconsistent dates (one side missing, or end not after start)
//! - Priority above 10, progress above 100%

use std::collections::{HashMap, HashSet};

use crate::models::{Assignment, Crew, Slot, MAX_PRIORITY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending assignment or crew id.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An assignment references a crew missing from the roster.
    UnknownCrew,
    /// An assignment references a crew that is not active.
    InactiveCrew,
    /// Start without end, end without start, or end not after start.
    MalformedSchedule,
    /// Priority above the 0-10 scale.
    PriorityOutOfRange,
    /// Progress above 100%.
    ProgressOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, entity_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.to_owned(),
            message: message.into(),
        }
    }
}

/// Validates an assignment feed against a crew roster.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_feed(assignments: &[Assignment], crews: &[Crew]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut roster: HashMap<&str, &Crew> = HashMap::new();
    for c in crews {
        if roster.insert(c.id.as_str(), c).is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &c.id,
                format!("Duplicate crew ID: {}", c.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for a in assignments {
        if !seen.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &a.id,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }

        if let Some(crew_id) = a.crew_id.as_deref() {
            match roster.get(crew_id) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCrew,
                    &a.id,
                    format!("Assignment '{}' references unknown crew '{crew_id}'", a.id),
                )),
                Some(crew) if !crew.active => errors.push(ValidationError::new(
                    ValidationErrorKind::InactiveCrew,
                    &a.id,
                    format!("Assignment '{}' is on inactive crew '{crew_id}'", a.id),
                )),
                Some(_) => {}
            }
        }

        if a.slot() == Slot::Malformed {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedSchedule,
                &a.id,
                format!(
                    "Assignment '{}' has inconsistent dates (start: {:?}, end: {:?})",
                    a.id, a.start, a.end
                ),
            ));
        }

        if a.priority > MAX_PRIORITY {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                &a.id,
                format!("Assignment '{}' has priority {} (max {MAX_PRIORITY})", a.id, a.priority),
            ));
        }

        if a.progress > 100 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ProgressOutOfRange,
                &a.id,
                format!("Assignment '{}' is {}% complete", a.id, a.progress),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
