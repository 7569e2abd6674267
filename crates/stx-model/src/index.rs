//! # Shape Index
//!
//! The read-only query surface validators run against. Implementors supply
//! shape lookup and trait search; member lookup, target resolution and the
//! trait/kind shortcuts are derived from those two.

use stx_core::ShapeId;
use stx_traits::TraitMap;

use crate::kind::ShapeKind;
use crate::shape::{MemberShape, Shape};

/// Query surface over a shape graph.
///
/// Object safe: validators take `&dyn ShapeIndex`.
pub trait ShapeIndex {
    /// Look up a top-level shape. Member ids resolve to `None`.
    fn get_shape(&self, id: &ShapeId) -> Option<&Shape>;

    /// Every member carrying `trait_id`, ordered by member id.
    fn members_with_trait(&self, trait_id: &ShapeId) -> Vec<&MemberShape>;

    /// Look up a member by its full `ns#Shape$member` id.
    fn get_member(&self, id: &ShapeId) -> Option<&MemberShape> {
        let name = id.member()?;
        self.get_shape(&id.without_member())?.member(name)
    }

    /// The shape a member points at.
    fn resolve_target(&self, member: &MemberShape) -> Option<&Shape> {
        self.get_shape(member.target())
    }

    /// Traits attached to a shape or member.
    fn traits_of(&self, id: &ShapeId) -> Option<&TraitMap> {
        if id.has_member() {
            self.get_member(id).map(MemberShape::traits)
        } else {
            self.get_shape(id).map(Shape::traits)
        }
    }

    /// Kind of a shape; [`ShapeKind::Member`] for member ids.
    fn kind_of(&self, id: &ShapeId) -> Option<ShapeKind> {
        if id.has_member() {
            self.get_member(id).map(|_| ShapeKind::Member)
        } else {
            self.get_shape(id).map(Shape::kind)
        }
    }
}
