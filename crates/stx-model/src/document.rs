//! # Document Union
//!
//! A document value spelled out as an explicit union, for targets that
//! cannot carry an open document type:
//!
//! ```text
//! union Document { dNull: DNull, dBoolean: DBoolean, dNumber: DNumber,
//!                  dString: DString, dArray: DArray, dObject: DObject }
//! structure DArray  { value: DocumentList }   list DocumentList { member: Document }
//! structure DObject { value: DocumentMap }    map DocumentMap { key: DString, value: Document }
//! ```
//!
//! The table is built once per process. Members that stand for the open
//! document type itself target [`DOCUMENT_TARGET`].

use std::sync::OnceLock;

use stx_core::ShapeId;

use crate::kind::ShapeKind;
use crate::shape::Shape;

pub const NAMESPACE: &str = "smithytranslate";

/// The prelude document shape the union stands in for.
pub const DOCUMENT_TARGET: ShapeId = ShapeId::from_static("smithy.api", "Document");

pub const D_NULL: ShapeId = ShapeId::from_static(NAMESPACE, "DNull");
pub const D_BOOLEAN: ShapeId = ShapeId::from_static(NAMESPACE, "DBoolean");
pub const D_NUMBER: ShapeId = ShapeId::from_static(NAMESPACE, "DNumber");
pub const D_STRING: ShapeId = ShapeId::from_static(NAMESPACE, "DString");
pub const DOCUMENT_LIST: ShapeId = ShapeId::from_static(NAMESPACE, "DocumentList");
pub const DOCUMENT_MAP: ShapeId = ShapeId::from_static(NAMESPACE, "DocumentMap");
pub const D_ARRAY: ShapeId = ShapeId::from_static(NAMESPACE, "DArray");
pub const D_OBJECT: ShapeId = ShapeId::from_static(NAMESPACE, "DObject");
pub const DOCUMENT: ShapeId = ShapeId::from_static(NAMESPACE, "Document");

static SHAPES: OnceLock<Vec<Shape>> = OnceLock::new();

/// The nine shapes of the document union, leaves first.
pub fn shapes() -> &'static [Shape] {
    SHAPES.get_or_init(|| {
        vec![
            Shape::structure(D_NULL),
            Shape::new(D_BOOLEAN, ShapeKind::Boolean),
            Shape::new(D_NUMBER, ShapeKind::Double),
            Shape::new(D_STRING, ShapeKind::String),
            Shape::list(DOCUMENT_LIST, DOCUMENT),
            Shape::map(DOCUMENT_MAP, D_STRING, DOCUMENT),
            Shape::structure(D_ARRAY).with_known_member("value", DOCUMENT_LIST),
            Shape::structure(D_OBJECT).with_known_member("value", DOCUMENT_MAP),
            Shape::union(DOCUMENT)
                .with_known_member("dNull", D_NULL)
                .with_known_member("dBoolean", D_BOOLEAN)
                .with_known_member("dNumber", D_NUMBER)
                .with_known_member("dString", D_STRING)
                .with_known_member("dArray", D_ARRAY)
                .with_known_member("dObject", D_OBJECT),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use crate::ShapeIndex;

    #[test]
    fn test_union_has_six_alternatives() {
        let union = shapes().iter().find(|s| s.id() == &DOCUMENT).unwrap();
        assert_eq!(union.kind(), ShapeKind::Union);
        let names: Vec<&str> = union.members().iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec!["dNull", "dBoolean", "dNumber", "dString", "dArray", "dObject"]
        );
    }

    #[test]
    fn test_table_assembles_into_a_model() {
        let model = Model::builder().with_document_shapes().build().unwrap();
        assert_eq!(model.len(), 9);
        let list_member = model
            .get_member(&DOCUMENT_LIST.with_static_member("member"))
            .unwrap();
        assert_eq!(model.resolve_target(list_member).unwrap().id(), &DOCUMENT);
    }

    #[test]
    fn test_table_is_built_once() {
        assert!(std::ptr::eq(shapes(), shapes()));
    }
}
