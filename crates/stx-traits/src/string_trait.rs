//! # String-Valued Traits
//!
//! Traits whose value is a single string. The node form is always a string
//! node; a provider handed anything else rejects it.

use stx_core::{Node, ShapeId, SourceLocation};

use crate::error::TraitError;
use crate::provider::Provider;
use crate::value::{Trait, TraitValue};

macro_rules! string_trait {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $namespace:literal, $trait_name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            value: String,
            source_location: SourceLocation,
        }

        impl $name {
            pub const ID: ShapeId = ShapeId::from_static($namespace, $trait_name);

            pub fn new(value: impl Into<String>) -> Self {
                Self::with_location(value, SourceLocation::none())
            }

            pub fn with_location(
                value: impl Into<String>,
                source_location: SourceLocation,
            ) -> Self {
                Self {
                    value: value.into(),
                    source_location,
                }
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn provider() -> Provider {
                Provider::new(Self::ID, |target, value, location| {
                    let s = string_value(Self::ID, target, value)?;
                    Ok(Trait::$variant(Self::with_location(s, location)))
                })
            }
        }

        impl TraitValue for $name {
            fn id(&self) -> ShapeId {
                Self::ID
            }

            fn source_location(&self) -> &SourceLocation {
                &self.source_location
            }

            fn create_node(&self) -> Result<Node, TraitError> {
                Ok(self.to_node())
            }

            fn to_node(&self) -> Node {
                Node::String(self.value.clone())
            }
        }
    };
}

string_trait!(
    /// `smithytranslate#contentType`: media type of a blob or document payload.
    ContentTypeTrait,
    ContentType,
    "smithytranslate",
    "contentType"
);

string_trait!(
    /// `smithytranslate#errorMessage`: message attached to an error shape.
    ErrorMessageTrait,
    ErrorMessage,
    "smithytranslate",
    "errorMessage"
);

/// Unwrap a string node or fail with a construction error naming the trait.
pub(crate) fn string_value(
    trait_id: ShapeId,
    target: &ShapeId,
    value: Node,
) -> Result<String, TraitError> {
    match value {
        Node::String(s) => Ok(s),
        other => Err(TraitError::expected(
            trait_id,
            target,
            "string",
            other.node_type(),
        )),
    }
}
