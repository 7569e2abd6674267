//! The traits attached to one shape or member, keyed by trait id.

use std::collections::BTreeMap;

use stx_core::ShapeId;

use crate::annotation::{NullableTrait, RequiredTrait};
use crate::constraint::{EnumValueTrait, LengthTrait, PatternTrait, RangeTrait};
use crate::default_value::DefaultValueTrait;
use crate::value::{Trait, TraitValue};

/// At most one trait per id. Iterates in trait-id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitMap {
    traits: BTreeMap<ShapeId, Trait>,
}

impl TraitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a trait, returning any trait with the same id it replaced.
    pub fn insert(&mut self, t: impl Into<Trait>) -> Option<Trait> {
        let t = t.into();
        self.traits.insert(t.id(), t)
    }

    pub fn get(&self, trait_id: &ShapeId) -> Option<&Trait> {
        self.traits.get(trait_id)
    }

    pub fn contains(&self, trait_id: &ShapeId) -> bool {
        self.traits.contains_key(trait_id)
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.values()
    }

    pub fn default_value(&self) -> Option<&DefaultValueTrait> {
        self.get(&DefaultValueTrait::ID)
            .and_then(Trait::as_default_value)
    }

    pub fn is_nullable(&self) -> bool {
        self.contains(&NullableTrait::ID)
    }

    pub fn is_required(&self) -> bool {
        self.contains(&RequiredTrait::ID)
    }

    pub fn range(&self) -> Option<&RangeTrait> {
        self.get(&RangeTrait::ID).and_then(Trait::as_range)
    }

    pub fn length(&self) -> Option<&LengthTrait> {
        self.get(&LengthTrait::ID).and_then(Trait::as_length)
    }

    pub fn pattern(&self) -> Option<&PatternTrait> {
        self.get(&PatternTrait::ID).and_then(Trait::as_pattern)
    }

    pub fn enum_value(&self) -> Option<&EnumValueTrait> {
        self.get(&EnumValueTrait::ID).and_then(Trait::as_enum_value)
    }
}

impl FromIterator<Trait> for TraitMap {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        let mut map = Self::new();
        for t in iter {
            map.insert(t);
        }
        map
    }
}
