//! # `@defaultValue`
//!
//! The default value of a member, as an arbitrary node. The node is stored
//! exactly as given: there is no other state to derive it from, so reads go
//! through [`TraitValue::to_node`] and the generic recompute path reports an
//! internal-consistency failure.
//!
//! Whether the value actually fits the member's target is checked later by
//! the default-value validator, not here.

use stx_core::{Node, ShapeId, SourceLocation};

use crate::error::TraitError;
use crate::provider::Provider;
use crate::value::{Trait, TraitValue};

/// `smithytranslate#defaultValue`
#[derive(Debug, Clone)]
pub struct DefaultValueTrait {
    value: Node,
    source_location: SourceLocation,
}

impl DefaultValueTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithytranslate", "defaultValue");

    pub fn new(value: Node) -> Self {
        Self::with_location(value, SourceLocation::none())
    }

    pub fn with_location(value: Node, source_location: SourceLocation) -> Self {
        Self {
            value,
            source_location,
        }
    }

    /// The default value, borrowed.
    pub fn value(&self) -> &Node {
        &self.value
    }

    /// Every node is accepted; the validator judges it against the target.
    pub fn provider() -> Provider {
        Provider::new(Self::ID, |_target, value, location| {
            Ok(Trait::DefaultValue(Self::with_location(value, location)))
        })
    }
}

impl TraitValue for DefaultValueTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        tracing::error!(trait_id = %Self::ID, "node recompute requested on a stored-node trait");
        Err(TraitError::NodeCacheOnly { trait_id: Self::ID })
    }

    fn to_node(&self) -> Node {
        self.value.clone()
    }
}
