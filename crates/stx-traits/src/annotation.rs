//! # Annotation Traits
//!
//! Marker traits whose presence is the information. Their node form is an
//! object, normally empty. A provider accepts an object or `null` (loaders
//! emit either for a bare `@nullable`) and rejects anything else.

use stx_core::{Node, ObjectNode, ShapeId, SourceLocation};

use crate::error::TraitError;
use crate::provider::Provider;
use crate::value::{Trait, TraitValue};

macro_rules! annotation_trait {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $namespace:literal, $trait_name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            value: ObjectNode,
            source_location: SourceLocation,
        }

        impl $name {
            pub const ID: ShapeId = ShapeId::from_static($namespace, $trait_name);

            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_location(source_location: SourceLocation) -> Self {
                Self {
                    value: ObjectNode::default(),
                    source_location,
                }
            }

            pub fn provider() -> Provider {
                Provider::new(Self::ID, |target, value, location| {
                    let value = object_or_null(Self::ID, target, value)?;
                    Ok(Trait::$variant(Self {
                        value,
                        source_location: location,
                    }))
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
                Node::Object(self.value.clone())
            }
        }
    };
}

annotation_trait!(
    /// `smithytranslate#nullable`: `null` is a legal value for the member
    /// (or for every member targeting the annotated shape).
    NullableTrait,
    Nullable,
    "smithytranslate",
    "nullable"
);

annotation_trait!(
    /// `smithy.api#required`: the structure member must be present.
    RequiredTrait,
    Required,
    "smithy.api",
    "required"
);

fn object_or_null(
    trait_id: ShapeId,
    target: &ShapeId,
    value: Node,
) -> Result<ObjectNode, TraitError> {
    match value {
        Node::Null => Ok(ObjectNode::default()),
        Node::Object(o) => Ok(o),
        other => Err(TraitError::expected(
            trait_id,
            target,
            "object",
            other.node_type(),
        )),
    }
}
