//! Validation events.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use stx_core::{ShapeId, SourceLocation};

/// How serious a validation event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Note,
    Warning,
    Danger,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Note => "NOTE",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
            Severity::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// One finding reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEvent {
    /// Name of the validator that produced the event.
    pub id: String,
    pub severity: Severity,
    /// Shape or member the event is about.
    pub shape_id: ShapeId,
    pub message: String,
    pub source_location: SourceLocation,
}

impl ValidationEvent {
    /// An [`Severity::Error`] event with no source location.
    pub fn error(id: impl Into<String>, shape_id: ShapeId, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: Severity::Error,
            shape_id,
            message: message.into(),
            source_location: SourceLocation::none(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_source_location(mut self, source_location: SourceLocation) -> Self {
        self.source_location = source_location;
        self
    }

    /// Reporting order: shape id, then message.
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.shape_id
            .cmp(&other.shape_id)
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl fmt::Display for ValidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} | {}",
            self.severity, self.shape_id, self.message, self.id
        )
    }
}
