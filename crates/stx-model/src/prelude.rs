//! # Prelude
//!
//! The `smithy.api` simple shapes every model can target without declaring
//! them. Built once per process and shared read-only.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use stx_core::ShapeId;

use crate::kind::ShapeKind;
use crate::shape::Shape;

/// Namespace of the prelude.
pub const NAMESPACE: &str = "smithy.api";

pub const BLOB: ShapeId = ShapeId::from_static(NAMESPACE, "Blob");
pub const BOOLEAN: ShapeId = ShapeId::from_static(NAMESPACE, "Boolean");
pub const STRING: ShapeId = ShapeId::from_static(NAMESPACE, "String");
pub const TIMESTAMP: ShapeId = ShapeId::from_static(NAMESPACE, "Timestamp");
pub const BYTE: ShapeId = ShapeId::from_static(NAMESPACE, "Byte");
pub const SHORT: ShapeId = ShapeId::from_static(NAMESPACE, "Short");
pub const INTEGER: ShapeId = ShapeId::from_static(NAMESPACE, "Integer");
pub const LONG: ShapeId = ShapeId::from_static(NAMESPACE, "Long");
pub const FLOAT: ShapeId = ShapeId::from_static(NAMESPACE, "Float");
pub const DOUBLE: ShapeId = ShapeId::from_static(NAMESPACE, "Double");
pub const BIG_INTEGER: ShapeId = ShapeId::from_static(NAMESPACE, "BigInteger");
pub const BIG_DECIMAL: ShapeId = ShapeId::from_static(NAMESPACE, "BigDecimal");
pub const DOCUMENT: ShapeId = ShapeId::from_static(NAMESPACE, "Document");
/// Empty structure; the target of enum members.
pub const UNIT: ShapeId = ShapeId::from_static(NAMESPACE, "Unit");

static PRELUDE: OnceLock<BTreeMap<ShapeId, Shape>> = OnceLock::new();

fn table() -> &'static BTreeMap<ShapeId, Shape> {
    PRELUDE.get_or_init(|| {
        [
            (BLOB, ShapeKind::Blob),
            (BOOLEAN, ShapeKind::Boolean),
            (STRING, ShapeKind::String),
            (TIMESTAMP, ShapeKind::Timestamp),
            (BYTE, ShapeKind::Byte),
            (SHORT, ShapeKind::Short),
            (INTEGER, ShapeKind::Integer),
            (LONG, ShapeKind::Long),
            (FLOAT, ShapeKind::Float),
            (DOUBLE, ShapeKind::Double),
            (BIG_INTEGER, ShapeKind::BigInteger),
            (BIG_DECIMAL, ShapeKind::BigDecimal),
            (DOCUMENT, ShapeKind::Document),
            (UNIT, ShapeKind::Structure),
        ]
        .into_iter()
        .map(|(id, kind)| (id.clone(), Shape::new(id, kind)))
        .collect()
    })
}

/// Look up a prelude shape.
pub fn get(id: &ShapeId) -> Option<&'static Shape> {
    table().get(id)
}

pub fn contains(id: &ShapeId) -> bool {
    table().contains_key(id)
}

/// All prelude shapes in id order.
pub fn shapes() -> impl Iterator<Item = &'static Shape> {
    table().values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_resolves_simple_shapes() {
        assert_eq!(get(&STRING).unwrap().kind(), ShapeKind::String);
        assert_eq!(get(&DOCUMENT).unwrap().kind(), ShapeKind::Document);
        assert_eq!(get(&UNIT).unwrap().kind(), ShapeKind::Structure);
        assert!(!contains(&ShapeId::parse("smithy.api#Nope").unwrap()));
    }

    #[test]
    fn test_prelude_ids_parse() {
        for shape in shapes() {
            assert_eq!(&ShapeId::parse(&shape.id().to_string()).unwrap(), shape.id());
        }
        assert_eq!(shapes().count(), 14);
    }
}
