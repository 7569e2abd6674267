//! # Model Assembly
//!
//! [`ModelBuilder`] collects shapes and checks the graph once on
//! [`ModelBuilder::build`]:
//!
//! - shape ids are unique, and do not shadow the prelude;
//! - lists and sets have a `member`, maps a `key` and a `value`;
//! - every member target resolves to a model or prelude shape.
//!
//! The resulting [`Model`] is immutable and iterates in id order.

use std::collections::BTreeMap;

use stx_core::ShapeId;

use crate::document;
use crate::error::ModelError;
use crate::index::ShapeIndex;
use crate::kind::ShapeKind;
use crate::prelude;
use crate::shape::{MemberShape, Shape};
use crate::uuid_shape;

/// An assembled, read-only shape graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Number of shapes added to the model. Prelude shapes are not counted.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Model shapes in id order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// True if the shape was added to this model (prelude excluded).
    pub fn contains_shape(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }
}

impl ShapeIndex for Model {
    fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        if id.has_member() {
            return None;
        }
        self.shapes.get(id).or_else(|| prelude::get(id))
    }

    fn members_with_trait(&self, trait_id: &ShapeId) -> Vec<&MemberShape> {
        let mut members: Vec<&MemberShape> = self
            .shapes
            .values()
            .flat_map(Shape::members)
            .filter(|m| m.has_trait(trait_id))
            .collect();
        members.sort_by(|a, b| a.id().cmp(b.id()));
        members
    }
}

/// Collects shapes for a [`Model`].
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    shapes: Vec<Shape>,
}

impl ModelBuilder {
    pub fn add_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn add_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    /// Add the `smithytranslate` document union and its supporting shapes.
    pub fn with_document_shapes(self) -> Self {
        self.add_shapes(document::shapes().iter().cloned())
    }

    /// Add the `smithytranslate#UUID` structure.
    pub fn with_uuid_shape(self) -> Self {
        self.add_shape(uuid_shape::shape().clone())
    }

    /// Check the collected shapes and freeze them into a [`Model`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] found: a duplicate or prelude-shadowing
    /// id, a collection shape missing its members, or a member whose target
    /// resolves nowhere.
    pub fn build(self) -> Result<Model, ModelError> {
        let mut shapes = BTreeMap::new();
        for shape in self.shapes {
            if prelude::contains(shape.id()) || shapes.contains_key(shape.id()) {
                return Err(ModelError::DuplicateShape(shape.id().clone()));
            }
            check_members(&shape)?;
            shapes.insert(shape.id().clone(), shape);
        }

        for member in shapes.values().flat_map(Shape::members) {
            let target = member.target();
            if !shapes.contains_key(target) && !prelude::contains(target) {
                return Err(ModelError::UnresolvedTarget {
                    member: member.id().clone(),
                    target: target.clone(),
                });
            }
        }

        tracing::debug!(shapes = shapes.len(), "model assembled");
        Ok(Model { shapes })
    }
}

fn check_members(shape: &Shape) -> Result<(), ModelError> {
    let required: &[&str] = match shape.kind() {
        ShapeKind::List | ShapeKind::Set => &["member"],
        ShapeKind::Map => &["key", "value"],
        ShapeKind::Member => {
            return Err(ModelError::InvalidShape {
                id: shape.id().clone(),
                reason: "members cannot be added as top-level shapes".to_string(),
            })
        }
        _ => &[],
    };
    if let Some(missing) = required.iter().find(|name| shape.member(name).is_none()) {
        return Err(ModelError::InvalidShape {
            id: shape.id().clone(),
            reason: format!("{} shape has no `{missing}` member", shape.kind()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stx_core::Node;
    use stx_traits::{DefaultValueTrait, NullableTrait};

    fn id(s: &str) -> ShapeId {
        ShapeId::parse(s).unwrap()
    }

    fn config_shape() -> Shape {
        Shape::structure(id("ex#Config"))
            .with_member_shape(
                MemberShape::new(id("ex#Config$flag"), prelude::BOOLEAN)
                    .with_trait(DefaultValueTrait::new(Node::Null)),
            )
            .unwrap()
            .with_member_shape(
                MemberShape::new(id("ex#Config$cfg"), id("ex#Tags"))
                    .with_trait(DefaultValueTrait::new(Node::empty_object())),
            )
            .unwrap()
            .with_member("name", prelude::STRING)
            .unwrap()
    }

    fn tags_shape() -> Shape {
        Shape::map(id("ex#Tags"), prelude::STRING, prelude::STRING)
    }

    #[test]
    fn test_build_resolves_prelude_and_model_targets() {
        let model = Model::builder()
            .add_shape(config_shape())
            .add_shape(tags_shape())
            .build()
            .unwrap();
        assert_eq!(model.len(), 2);
        let cfg = model.get_member(&id("ex#Config$cfg")).unwrap();
        assert_eq!(model.resolve_target(cfg).unwrap().kind(), ShapeKind::Map);
        let flag = model.get_member(&id("ex#Config$flag")).unwrap();
        assert_eq!(model.resolve_target(flag).unwrap().kind(), ShapeKind::Boolean);
    }

    #[test]
    fn test_unresolved_target_rejected() {
        let err = Model::builder().add_shape(config_shape()).build().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnresolvedTarget {
                member: id("ex#Config$cfg"),
                target: id("ex#Tags"),
            }
        );
    }

    #[test]
    fn test_duplicate_shape_rejected() {
        let err = Model::builder()
            .add_shape(tags_shape())
            .add_shape(tags_shape())
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicateShape(id("ex#Tags")));
    }

    #[test]
    fn test_prelude_shadowing_rejected() {
        let err = Model::builder()
            .add_shape(Shape::new(prelude::STRING, ShapeKind::String))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateShape(_)));
    }

    #[test]
    fn test_list_without_member_rejected() {
        let err = Model::builder()
            .add_shape(Shape::new(id("ex#Names"), ShapeKind::List))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidShape { .. }));
    }

    #[test]
    fn test_members_with_trait_in_id_order() {
        let model = Model::builder()
            .add_shape(config_shape())
            .add_shape(tags_shape())
            .build()
            .unwrap();
        let ids: Vec<String> = model
            .members_with_trait(&DefaultValueTrait::ID)
            .iter()
            .map(|m| m.id().to_string())
            .collect();
        assert_eq!(ids, vec!["ex#Config$cfg", "ex#Config$flag"]);
        assert!(model.members_with_trait(&NullableTrait::ID).is_empty());
    }

    #[test]
    fn test_traits_and_kind_queries() {
        let model = Model::builder()
            .add_shape(config_shape())
            .add_shape(tags_shape().with_trait(NullableTrait::new()))
            .build()
            .unwrap();
        assert!(model.traits_of(&id("ex#Tags")).unwrap().is_nullable());
        assert!(model
            .traits_of(&id("ex#Config$flag"))
            .unwrap()
            .default_value()
            .is_some());
        assert_eq!(model.kind_of(&id("ex#Config$flag")), Some(ShapeKind::Member));
        assert_eq!(model.kind_of(&prelude::DOUBLE), Some(ShapeKind::Double));
        assert_eq!(model.kind_of(&id("ex#Missing")), None);
        assert!(model.get_shape(&id("ex#Config$flag")).is_none());
    }

    #[test]
    fn test_uuid_shape_builds() {
        let model = Model::builder().with_uuid_shape().build().unwrap();
        assert!(model.contains_shape(&uuid_shape::UUID));
    }
}
