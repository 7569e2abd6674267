//! # Validator Seam
//!
//! A [`Validator`] inspects a read-only model and returns events.
//! [`validate_model`] runs a set of them and puts the combined events in
//! reporting order, so the same model always yields the same report.

use stx_model::ShapeIndex;

use crate::event::{Severity, ValidationEvent};

/// A model-wide check.
///
/// Implementations must not keep state between calls to
/// [`Validator::validate`].
pub trait Validator: Send + Sync {
    /// Name used as the event id and in logs.
    fn name(&self) -> &str;

    /// Inspect `model` and return every event found.
    fn validate(&self, model: &dyn ShapeIndex) -> Vec<ValidationEvent>;
}

/// Run every validator over `model` and return their events sorted by shape
/// id, then message.
pub fn validate_model(
    model: &dyn ShapeIndex,
    validators: &[&dyn Validator],
) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    for validator in validators {
        let found = validator.validate(model);
        tracing::debug!(
            validator = validator.name(),
            events = found.len(),
            "validator finished"
        );
        events.extend(found);
    }
    events.sort_by(ValidationEvent::report_order);

    let errors = events
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .count();
    tracing::info!(
        validators = validators.len(),
        events = events.len(),
        errors,
        "model validation complete"
    );
    events
}
