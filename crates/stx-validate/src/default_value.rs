//! # `@defaultValue` Validation
//!
//! For every member carrying `smithytranslate#defaultValue`:
//!
//! 1. A `null` default is accepted when the member or its target carries
//!    `smithytranslate#nullable`. Any other value is run through
//!    [`check_node`] against the target, one event per mismatch.
//! 2. Independently, collection and document targets only accept empty
//!    defaults:
//!
//! | Target kind | Rejected value | Message |
//! |---|---|---|
//! | map | non-empty object | `...of a map must be an empty map` |
//! | list, set | non-empty array | `...of a list must be an empty list` |
//! | document | non-empty array | `...of a document cannot be a non-empty array` |
//! | document | non-empty object | `...of a document cannot be a non-empty object` |
//!
//! Each message starts with `The @defaultValue value`.
//!
//! A member whose target does not resolve produces a single event and is
//! not checked further.
//!
//! The trait is read by id. When the model was loaded without the
//! `defaultValue` provider the trait is dynamic, and its node is checked
//! the same way.

use std::borrow::Cow;

use stx_core::{Node, SourceLocation};
use stx_model::{MemberShape, ShapeIndex, ShapeKind};
use stx_traits::{DefaultValueTrait, TraitValue};

use crate::config::ValidatorConfig;
use crate::event::ValidationEvent;
use crate::node_check::{check_node, Mismatch};
use crate::validator::Validator;

const NON_EMPTY_MAP: &str = "The @defaultValue value of a map must be an empty map";
const NON_EMPTY_LIST: &str = "The @defaultValue value of a list must be an empty list";
const DOCUMENT_ARRAY: &str = "The @defaultValue value of a document cannot be a non-empty array";
const DOCUMENT_OBJECT: &str =
    "The @defaultValue value of a document cannot be a non-empty object";

/// Checks `@defaultValue` traits against their members' targets.
#[derive(Debug, Clone, Default)]
pub struct DefaultValueTraitValidator {
    config: ValidatorConfig,
}

impl DefaultValueTraitValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn event(
        &self,
        member: &MemberShape,
        location: &SourceLocation,
        message: String,
    ) -> ValidationEvent {
        ValidationEvent::error(self.config.event_id.clone(), member.id().clone(), message)
            .with_severity(self.config.severity)
            .with_source_location(location.clone())
    }

    fn with_context(&self, mismatch: &Mismatch) -> String {
        let context = &self.config.starting_context;
        if mismatch.path.is_empty() {
            format!("{context}: {}", mismatch.message)
        } else {
            format!("{context} ({}): {}", mismatch.path, mismatch.message)
        }
    }

    fn check_member(
        &self,
        model: &dyn ShapeIndex,
        member: &MemberShape,
        value: &Node,
        location: &SourceLocation,
    ) -> Vec<ValidationEvent> {
        let Some(target) = model.resolve_target(member) else {
            tracing::warn!(
                member = %member.id(),
                target = %member.target(),
                "default value on member with unresolved target"
            );
            let message = format!(
                "Member `{}` targets unknown shape `{}`",
                member.id(),
                member.target()
            );
            return vec![self.event(member, location, message)];
        };
        tracing::debug!(
            member = %member.id(),
            target = %target.id(),
            kind = %target.kind(),
            "checking default value"
        );

        let mut events = Vec::new();
        let nullable = member.traits().is_nullable() || target.traits().is_nullable();
        if value.is_null() && nullable {
            tracing::trace!(member = %member.id(), "null default allowed by @nullable");
        } else {
            for mismatch in check_node(model, value, target, Some(member.traits()), "") {
                events.push(self.event(member, location, self.with_context(&mismatch)));
            }
        }
        if let Some(message) = emptiness_violation(target.kind(), value) {
            events.push(self.event(member, location, message.to_string()));
        }
        events
    }
}

/// Collection and document defaults must be empty.
fn emptiness_violation(kind: ShapeKind, value: &Node) -> Option<&'static str> {
    match (kind, value) {
        (ShapeKind::Map, Node::Object(obj)) if !obj.is_empty() => Some(NON_EMPTY_MAP),
        (ShapeKind::List | ShapeKind::Set, Node::Array(arr)) if !arr.is_empty() => {
            Some(NON_EMPTY_LIST)
        }
        (ShapeKind::Document, Node::Array(arr)) if !arr.is_empty() => Some(DOCUMENT_ARRAY),
        (ShapeKind::Document, Node::Object(obj)) if !obj.is_empty() => Some(DOCUMENT_OBJECT),
        _ => None,
    }
}

impl Validator for DefaultValueTraitValidator {
    fn name(&self) -> &str {
        &self.config.event_id
    }

    fn validate(&self, model: &dyn ShapeIndex) -> Vec<ValidationEvent> {
        let mut events = Vec::new();
        for member in model.members_with_trait(&DefaultValueTrait::ID) {
            let Some(default) = member.traits().get(&DefaultValueTrait::ID) else {
                continue;
            };
            let value = match default.as_default_value() {
                Some(typed) => Cow::Borrowed(typed.value()),
                None => Cow::Owned(default.to_node()),
            };
            let location = default.source_location();
            events.extend(self.check_member(model, member, &value, location));
        }
        events
    }
}
