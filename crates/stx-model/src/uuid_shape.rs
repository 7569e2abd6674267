//! # UUID Shape
//!
//! `smithytranslate#UUID` carries a UUID as two required signed longs, the
//! most significant 64 bits first. [`uuid_to_node`] and [`node_to_uuid`]
//! convert between a [`uuid::Uuid`] and that structure's node form, e.g. to
//! write a UUID default value.

use std::sync::OnceLock;

use stx_core::{Node, Number, ObjectNode, ShapeId};
use stx_traits::RequiredTrait;
use uuid::Uuid;

use crate::prelude;
use crate::shape::{MemberShape, Shape};

pub const UUID: ShapeId = ShapeId::from_static("smithytranslate", "UUID");

const UPPER_BITS: &str = "upper_bits";
const LOWER_BITS: &str = "lower_bits";

static SHAPE: OnceLock<Shape> = OnceLock::new();

/// The UUID structure shape.
pub fn shape() -> &'static Shape {
    SHAPE.get_or_init(|| {
        let mut shape = Shape::structure(UUID);
        for name in [UPPER_BITS, LOWER_BITS] {
            let member = MemberShape::new(UUID.with_static_member(name), prelude::LONG)
                .with_trait(RequiredTrait::new());
            shape = shape.with_known_member_shape(member);
        }
        shape
    })
}

/// Encode a UUID as `{"upper_bits": i64, "lower_bits": i64}`.
pub fn uuid_to_node(uuid: &Uuid) -> Node {
    let bits = uuid.as_u128();
    let (upper, lower) = ((bits >> 64) as u64, bits as u64);
    ObjectNode::builder()
        .with_member(UPPER_BITS, upper as i64)
        .with_member(LOWER_BITS, lower as i64)
        .build()
        .into()
}

/// Decode the node form of the UUID structure. `None` if either half is
/// missing or not an integer.
pub fn node_to_uuid(node: &Node) -> Option<Uuid> {
    let obj = node.as_object()?;
    let half = |key: &str| match obj.get(key)? {
        Node::Number(Number::Int(i)) => Some(*i as u64),
        Node::Number(Number::UInt(u)) => Some(*u),
        _ => None,
    };
    let (upper, lower) = (half(UPPER_BITS)?, half(LOWER_BITS)?);
    Some(Uuid::from_u128((u128::from(upper) << 64) | u128::from(lower)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_members_are_required_longs() {
        let shape = shape();
        assert_eq!(shape.members().len(), 2);
        for member in shape.members() {
            assert_eq!(member.target(), &prelude::LONG);
            assert!(member.traits().is_required());
        }
    }

    #[test]
    fn test_uuid_node_round_trip() {
        let uuid = Uuid::new_v4();
        let node = uuid_to_node(&uuid);
        assert_eq!(node_to_uuid(&node), Some(uuid));
    }

    #[test]
    fn test_high_bit_is_negative_long() {
        let uuid = Uuid::from_u128((u128::from(u64::MAX) << 64) | 1);
        let node = uuid_to_node(&uuid);
        assert_eq!(node, Node::from(json!({"upper_bits": -1, "lower_bits": 1})));
    }

    #[test]
    fn test_unsigned_halves_decode_like_signed() {
        let unsigned = Node::from(json!({"upper_bits": u64::MAX, "lower_bits": 1}));
        let signed = Node::from(json!({"upper_bits": -1, "lower_bits": 1}));
        assert_eq!(node_to_uuid(&unsigned), node_to_uuid(&signed));
        assert!(node_to_uuid(&unsigned).is_some());
    }

    #[test]
    fn test_rejects_incomplete_node() {
        assert_eq!(node_to_uuid(&Node::from(json!({"upper_bits": 1}))), None);
        assert_eq!(
            node_to_uuid(&Node::from(json!({"upper_bits": 1, "lower_bits": 1.5}))),
            None
        );
        assert_eq!(node_to_uuid(&Node::from("not-a-uuid")), None);
    }
}
