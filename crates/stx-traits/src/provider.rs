//! # Trait Providers and the Registration Table
//!
//! A [`Provider`] turns a raw node, as produced by a model loader, into a
//! concrete [`Trait`]. A [`TraitRegistry`] maps trait ids to providers. The
//! loader owns discovery; this crate only supplies the table and the
//! default set of providers.

use std::collections::BTreeMap;
use std::fmt;

use stx_core::{Node, ShapeId, SourceLocation};

use crate::annotation::{NullableTrait, RequiredTrait};
use crate::constraint::{EnumValueTrait, LengthTrait, PatternTrait, RangeTrait};
use crate::default_value::DefaultValueTrait;
use crate::error::TraitError;
use crate::opaque::{ConstTrait, DynamicTrait, OpenApiExtensionsTrait};
use crate::string_trait::{ContentTypeTrait, ErrorMessageTrait};
use crate::value::Trait;

/// Constructor signature shared by every provider: target shape, raw value,
/// declaration site.
pub type CreateTraitFn = fn(&ShapeId, Node, SourceLocation) -> Result<Trait, TraitError>;

/// Builds one kind of trait from raw values.
#[derive(Clone)]
pub struct Provider {
    id: ShapeId,
    create: CreateTraitFn,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Provider {
    pub fn new(id: ShapeId, create: CreateTraitFn) -> Self {
        Self { id, create }
    }

    /// The trait id this provider builds.
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Build the trait for `target` with no source location.
    ///
    /// # Errors
    ///
    /// Returns a [`TraitError`] if `value` does not fit this trait kind.
    pub fn create_trait(&self, target: &ShapeId, value: Node) -> Result<Trait, TraitError> {
        self.create_trait_at(target, value, SourceLocation::none())
    }

    /// Build the trait for `target`, recording where it was declared.
    ///
    /// # Errors
    ///
    /// Returns a [`TraitError`] if `value` does not fit this trait kind.
    pub fn create_trait_at(
        &self,
        target: &ShapeId,
        value: Node,
        location: SourceLocation,
    ) -> Result<Trait, TraitError> {
        (self.create)(target, value, location)
    }
}

/// Table from trait id to provider.
///
/// Iteration is ordered by trait id.
#[derive(Debug, Clone, Default)]
pub struct TraitRegistry {
    providers: BTreeMap<ShapeId, Provider>,
}

impl TraitRegistry {
    /// An empty table. Every id falls back to [`DynamicTrait`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with a provider for every trait kind in this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for provider in [
            ConstTrait::provider(),
            OpenApiExtensionsTrait::provider(),
            ContentTypeTrait::provider(),
            ErrorMessageTrait::provider(),
            DefaultValueTrait::provider(),
            NullableTrait::provider(),
            RequiredTrait::provider(),
            RangeTrait::provider(),
            LengthTrait::provider(),
            PatternTrait::provider(),
            EnumValueTrait::provider(),
        ] {
            registry.register(provider);
        }
        registry
    }

    /// Register a provider, returning the one it replaced.
    pub fn register(&mut self, provider: Provider) -> Option<Provider> {
        self.providers.insert(provider.id.clone(), provider)
    }

    pub fn get(&self, trait_id: &ShapeId) -> Option<&Provider> {
        self.providers.get(trait_id)
    }

    pub fn contains(&self, trait_id: &ShapeId) -> bool {
        self.providers.contains_key(trait_id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Registered trait ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &ShapeId> {
        self.providers.keys()
    }

    /// Build a trait with no source location.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`TraitError`].
    pub fn create_trait(
        &self,
        trait_id: &ShapeId,
        target: &ShapeId,
        value: Node,
    ) -> Result<Trait, TraitError> {
        self.create_trait_at(trait_id, target, value, SourceLocation::none())
    }

    /// Build a trait through its registered provider, or as a
    /// [`DynamicTrait`] when none is registered.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`TraitError`].
    pub fn create_trait_at(
        &self,
        trait_id: &ShapeId,
        target: &ShapeId,
        value: Node,
        location: SourceLocation,
    ) -> Result<Trait, TraitError> {
        match self.providers.get(trait_id) {
            Some(provider) => provider.create_trait_at(target, value, location),
            None => {
                tracing::debug!(
                    %trait_id,
                    %target,
                    "no provider registered; keeping trait as dynamic"
                );
                Ok(Trait::Dynamic(DynamicTrait::with_location(
                    trait_id.clone(),
                    value,
                    location,
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TraitValue;
    use serde_json::json;

    fn target() -> ShapeId {
        ShapeId::parse("example#Config$cfg").unwrap()
    }

    #[test]
    fn test_defaults_cover_every_kind() {
        let registry = TraitRegistry::with_defaults();
        assert_eq!(registry.len(), 11);
        for id in [
            ConstTrait::ID,
            OpenApiExtensionsTrait::ID,
            ContentTypeTrait::ID,
            ErrorMessageTrait::ID,
            DefaultValueTrait::ID,
            NullableTrait::ID,
            RequiredTrait::ID,
            RangeTrait::ID,
            LengthTrait::ID,
            PatternTrait::ID,
            EnumValueTrait::ID,
        ] {
            assert!(registry.contains(&id), "missing provider for {id}");
            assert_eq!(ShapeId::parse(&id.to_string()).unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_dynamic() {
        let registry = TraitRegistry::with_defaults();
        let id = ShapeId::parse("acme.meta#owner").unwrap();
        let t = registry
            .create_trait(&id, &target(), Node::from(json!({"team": "infra"})))
            .unwrap();
        assert!(matches!(t, Trait::Dynamic(_)));
        assert_eq!(t.id(), id);
        assert_eq!(t.to_node(), Node::from(json!({"team": "infra"})));
    }

    #[test]
    fn test_registered_provider_errors_propagate() {
        let registry = TraitRegistry::with_defaults();
        let err = registry
            .create_trait(&ContentTypeTrait::ID, &target(), Node::from(json!({})))
            .unwrap_err();
        assert!(matches!(err, TraitError::ExpectedNodeType { .. }));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = TraitRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register(ConstTrait::provider()).is_none());
        let replaced = registry.register(ConstTrait::provider());
        assert_eq!(replaced.map(|p| p.id().clone()), Some(ConstTrait::ID));
        assert_eq!(registry.ids().count(), 1);
    }
}
