//! # Shapes and Members
//!
//! A [`Shape`] owns its members. A [`MemberShape`] refers to its target by
//! id only; the target lives elsewhere in the model (or in the prelude) and
//! is looked up through [`crate::ShapeIndex::resolve_target`].

use stx_core::ShapeId;
use stx_traits::{Trait, TraitMap};

use crate::error::ModelError;
use crate::kind::ShapeKind;
use crate::prelude;

/// A named slot of an aggregate shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShape {
    id: ShapeId,
    target: ShapeId,
    traits: TraitMap,
}

impl MemberShape {
    pub fn new(id: ShapeId, target: ShapeId) -> Self {
        Self {
            id,
            target,
            traits: TraitMap::new(),
        }
    }

    /// Attach a trait, replacing any trait with the same id.
    pub fn with_trait(mut self, t: impl Into<Trait>) -> Self {
        self.traits.insert(t);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Member name (the `$member` part of the id).
    pub fn name(&self) -> &str {
        self.id.member().unwrap_or_default()
    }

    /// Id of the containing shape.
    pub fn container(&self) -> ShapeId {
        self.id.without_member()
    }

    pub fn target(&self) -> &ShapeId {
        &self.target
    }

    pub fn traits(&self) -> &TraitMap {
        &self.traits
    }

    pub fn has_trait(&self, trait_id: &ShapeId) -> bool {
        self.traits.contains(trait_id)
    }
}

/// A node in the shape graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    members: Vec<MemberShape>,
    traits: TraitMap,
}

impl Shape {
    /// A shape of `kind` with no members.
    pub fn new(id: ShapeId, kind: ShapeKind) -> Self {
        Self {
            id,
            kind,
            members: Vec::new(),
            traits: TraitMap::new(),
        }
    }

    /// `list` with element type `member`.
    pub fn list(id: ShapeId, member: ShapeId) -> Self {
        Self::new(id, ShapeKind::List).with_known_member("member", member)
    }

    /// `set` with element type `member`.
    pub fn set(id: ShapeId, member: ShapeId) -> Self {
        Self::new(id, ShapeKind::Set).with_known_member("member", member)
    }

    /// `map` from `key` to `value`.
    pub fn map(id: ShapeId, key: ShapeId, value: ShapeId) -> Self {
        Self::new(id, ShapeKind::Map)
            .with_known_member("key", key)
            .with_known_member("value", value)
    }

    pub fn structure(id: ShapeId) -> Self {
        Self::new(id, ShapeKind::Structure)
    }

    pub fn union(id: ShapeId) -> Self {
        Self::new(id, ShapeKind::Union)
    }

    /// A string enum whose members are `values`, each standing for its own
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if a value is not a valid member name or is
    /// repeated.
    pub fn string_enum<'a>(
        id: ShapeId,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ModelError> {
        values
            .into_iter()
            .try_fold(Self::new(id, ShapeKind::Enum), |shape, value| {
                shape.with_member(value, prelude::UNIT)
            })
    }

    /// Add a member called `name` targeting `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Identifier`] for an invalid name and
    /// [`ModelError::DuplicateMember`] if the name is taken.
    pub fn with_member(self, name: &str, target: ShapeId) -> Result<Self, ModelError> {
        let member = MemberShape::new(self.id.with_member(name)?, target);
        self.push_member(member)
    }

    /// Add a fully built member. Its id must name this shape.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if the member belongs to another
    /// shape and [`ModelError::DuplicateMember`] if the name is taken.
    pub fn with_member_shape(self, member: MemberShape) -> Result<Self, ModelError> {
        if member.container() != self.id || !member.id().has_member() {
            return Err(ModelError::InvalidShape {
                id: self.id.clone(),
                reason: format!("member `{}` does not belong to this shape", member.id()),
            });
        }
        self.push_member(member)
    }

    /// Attach a trait, replacing any trait with the same id.
    pub fn with_trait(mut self, t: impl Into<Trait>) -> Self {
        self.traits.insert(t);
        self
    }

    pub(crate) fn with_known_member(mut self, name: &'static str, target: ShapeId) -> Self {
        let id = self.id.with_static_member(name);
        self.members.push(MemberShape::new(id, target));
        self
    }

    pub(crate) fn with_known_member_shape(mut self, member: MemberShape) -> Self {
        self.members.push(member);
        self
    }

    fn push_member(mut self, member: MemberShape) -> Result<Self, ModelError> {
        if self.member(member.name()).is_some() {
            return Err(ModelError::DuplicateMember {
                shape: self.id.clone(),
                member: member.name().to_string(),
            });
        }
        self.members.push(member);
        Ok(self)
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[MemberShape] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberShape> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn traits(&self) -> &TraitMap {
        &self.traits
    }

    pub fn has_trait(&self, trait_id: &ShapeId) -> bool {
        self.traits.contains(trait_id)
    }

    /// Element member of a list or set.
    pub fn list_member(&self) -> Option<&MemberShape> {
        match self.kind {
            ShapeKind::List | ShapeKind::Set => self.member("member"),
            _ => None,
        }
    }

    /// Key member of a map.
    pub fn map_key(&self) -> Option<&MemberShape> {
        match self.kind {
            ShapeKind::Map => self.member("key"),
            _ => None,
        }
    }

    /// Value member of a map.
    pub fn map_value(&self) -> Option<&MemberShape> {
        match self.kind {
            ShapeKind::Map => self.member("value"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stx_traits::NullableTrait;

    fn id(s: &str) -> ShapeId {
        ShapeId::parse(s).unwrap()
    }

    #[test]
    fn test_map_members() {
        let map = Shape::map(id("ex#Tags"), prelude::STRING, prelude::STRING);
        assert_eq!(map.members().len(), 2);
        assert_eq!(map.map_key().unwrap().id().to_string(), "ex#Tags$key");
        assert_eq!(map.map_value().unwrap().target(), &prelude::STRING);
        assert!(map.list_member().is_none());
    }

    #[test]
    fn test_structure_members_keep_order() {
        let s = Shape::structure(id("ex#Config"))
            .with_member("zeta", prelude::STRING)
            .unwrap()
            .with_member("alpha", prelude::BOOLEAN)
            .unwrap();
        let names: Vec<&str> = s.members().iter().map(MemberShape::name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let err = Shape::structure(id("ex#Config"))
            .with_member("a", prelude::STRING)
            .unwrap()
            .with_member("a", prelude::BOOLEAN)
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateMember { .. }));
    }

    #[test]
    fn test_invalid_member_name_rejected() {
        let err = Shape::structure(id("ex#Config"))
            .with_member("not valid", prelude::STRING)
            .unwrap_err();
        assert!(matches!(err, ModelError::Identifier(_)));
    }

    #[test]
    fn test_foreign_member_rejected() {
        let foreign = MemberShape::new(id("ex#Other$a"), prelude::STRING);
        let err = Shape::structure(id("ex#Config"))
            .with_member_shape(foreign)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidShape { .. }));
    }

    #[test]
    fn test_member_traits() {
        let member = MemberShape::new(id("ex#Flags$flag"), prelude::BOOLEAN)
            .with_trait(NullableTrait::new());
        assert!(member.has_trait(&NullableTrait::ID));
        assert_eq!(member.container(), id("ex#Flags"));
        assert_eq!(member.name(), "flag");
    }

    #[test]
    fn test_string_enum_members_target_unit() {
        let e = Shape::string_enum(id("ex#Color"), ["RED", "GREEN"]).unwrap();
        assert_eq!(e.kind(), ShapeKind::Enum);
        assert!(e.members().iter().all(|m| m.target() == &prelude::UNIT));
    }
}
