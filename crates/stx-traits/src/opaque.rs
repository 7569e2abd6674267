//! # Opaque-Value Traits
//!
//! Traits whose payload is an arbitrary node handed back unchanged:
//! `@const`, `@openapiExtensions`, and any trait id with no registered
//! provider.

use stx_core::{Node, ObjectNode, ShapeId, SourceLocation};

use crate::error::TraitError;
use crate::provider::Provider;
use crate::value::{Trait, TraitValue};

/// `smithytranslate#const`: the member always holds exactly this value.
#[derive(Debug, Clone)]
pub struct ConstTrait {
    value: Node,
    source_location: SourceLocation,
}

impl ConstTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithytranslate", "const");

    /// A const trait with no source location.
    pub fn new(value: Node) -> Self {
        Self {
            value,
            source_location: SourceLocation::none(),
        }
    }

    pub fn builder() -> ConstTraitBuilder {
        ConstTraitBuilder::default()
    }

    /// Builder seeded with this trait's state.
    pub fn to_builder(&self) -> ConstTraitBuilder {
        ConstTraitBuilder {
            value: Some(self.value.clone()),
            source_location: self.source_location.clone(),
        }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |_target, value, location| {
            Ok(Trait::Const(
                Self::builder()
                    .value(value)
                    .source_location(location)
                    .build()?,
            ))
        })
    }
}

impl TraitValue for ConstTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.value.clone())
    }

    fn to_node(&self) -> Node {
        self.value.clone()
    }
}

/// Builder for [`ConstTrait`]. The value is mandatory.
#[derive(Debug, Clone, Default)]
pub struct ConstTraitBuilder {
    value: Option<Node>,
    source_location: SourceLocation,
}

impl ConstTraitBuilder {
    pub fn value(mut self, value: Node) -> Self {
        self.value = Some(value);
        self
    }

    pub fn source_location(mut self, location: SourceLocation) -> Self {
        self.source_location = location;
        self
    }

    /// Finish the trait.
    ///
    /// # Errors
    ///
    /// Returns [`TraitError::MissingValue`] if no value was set.
    pub fn build(self) -> Result<ConstTrait, TraitError> {
        let value = self.value.ok_or(TraitError::MissingValue {
            trait_id: ConstTrait::ID,
        })?;
        Ok(ConstTrait {
            value,
            source_location: self.source_location,
        })
    }
}

/// `smithytranslate#openapiExtensions`: `x-` extension entries carried
/// through from an OpenAPI document.
#[derive(Debug, Clone)]
pub struct OpenApiExtensionsTrait {
    extensions: ObjectNode,
    source_location: SourceLocation,
}

impl OpenApiExtensionsTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithytranslate", "openapiExtensions");

    pub fn new(extensions: ObjectNode) -> Self {
        Self {
            extensions,
            source_location: SourceLocation::none(),
        }
    }

    pub fn with_location(extensions: ObjectNode, source_location: SourceLocation) -> Self {
        Self {
            extensions,
            source_location,
        }
    }

    pub fn extensions(&self) -> &ObjectNode {
        &self.extensions
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.extensions.get(name)
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |target, value, location| {
            let found = value.node_type();
            let extensions = value.into_object().map_err(|_| {
                TraitError::expected(Self::ID, target, "object", found)
            })?;
            Ok(Trait::OpenApiExtensions(Self::with_location(
                extensions, location,
            )))
        })
    }
}

impl TraitValue for OpenApiExtensionsTrait {
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
        Node::Object(self.extensions.clone())
    }
}

/// A trait whose id has no registered provider. Kept as-is so that
/// unknown metadata survives a load/serialize cycle.
#[derive(Debug, Clone)]
pub struct DynamicTrait {
    id: ShapeId,
    value: Node,
    source_location: SourceLocation,
}

impl DynamicTrait {
    pub fn new(id: ShapeId, value: Node) -> Self {
        Self {
            id,
            value,
            source_location: SourceLocation::none(),
        }
    }

    pub fn with_location(id: ShapeId, value: Node, source_location: SourceLocation) -> Self {
        Self {
            id,
            value,
            source_location,
        }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

impl TraitValue for DynamicTrait {
    fn id(&self) -> ShapeId {
        self.id.clone()
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.value.clone())
    }

    fn to_node(&self) -> Node {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stx_core::NodeType;

    fn target() -> ShapeId {
        ShapeId::parse("example#Widget$color").unwrap()
    }

    #[test]
    fn test_const_builder_requires_value() {
        let err = ConstTrait::builder().build().unwrap_err();
        assert_eq!(
            err,
            TraitError::MissingValue {
                trait_id: ConstTrait::ID
            }
        );
    }

    #[test]
    fn test_const_provider_keeps_location() {
        let location = SourceLocation::new("widget.smithy", 7, 3);
        let t = ConstTrait::provider()
            .create_trait_at(&target(), Node::from("red"), location.clone())
            .unwrap();
        assert_eq!(t.source_location(), &location);
        assert_eq!(t.to_node(), Node::from("red"));
    }

    #[test]
    fn test_const_to_builder_round_trip() {
        let original = ConstTrait::new(Node::from(json!({"a": [1]})));
        let rebuilt = original.to_builder().build().unwrap();
        assert_eq!(rebuilt.to_node(), original.to_node());
    }

    #[test]
    fn test_openapi_extensions_requires_object() {
        let err = OpenApiExtensionsTrait::provider()
            .create_trait(&target(), Node::from(json!(["x-a"])))
            .unwrap_err();
        assert!(matches!(
            err,
            TraitError::ExpectedNodeType {
                found: NodeType::Array,
                ..
            }
        ));
    }

    #[test]
    fn test_openapi_extensions_lookup() {
        let t = OpenApiExtensionsTrait::new(
            Node::from(json!({"x-internal": true}))
                .into_object()
                .unwrap(),
        );
        assert_eq!(t.get("x-internal"), Some(&Node::from(true)));
        assert!(t.get("x-other").is_none());
    }
}
