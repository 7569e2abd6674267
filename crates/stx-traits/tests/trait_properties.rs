//! Property tests for trait value fidelity.
//!
//! - Opaque-value and string-valued traits hand back exactly the node they
//!   were built from.
//! - `@defaultValue` hands back its stored node, and its recompute path
//!   fails for every value.

use proptest::prelude::*;
use stx_core::{ArrayNode, Node, ShapeId};
use stx_traits::{
    ConstTrait, ContentTypeTrait, DefaultValueTrait, ErrorMessageTrait, OpenApiExtensionsTrait,
    Trait, TraitError, TraitRegistry, TraitValue,
};

fn target() -> ShapeId {
    ShapeId::parse("example#Widget$value").unwrap()
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        (-1.0e6f64..1.0e6f64).prop_map(Node::from),
        "[a-zA-Z0-9/+ -]{0,24}".prop_map(Node::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|v| Node::Array(ArrayNode::new(v))),
            prop::collection::btree_map("x-[a-z]{1,6}", inner, 0..5)
                .prop_map(|m| Node::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn const_trait_round_trips(value in arb_node()) {
        let t = ConstTrait::provider().create_trait(&target(), value.clone()).unwrap();
        prop_assert_eq!(t.to_node(), value.clone());
        prop_assert_eq!(t.create_node().unwrap(), value);
    }

    #[test]
    fn unregistered_trait_round_trips(value in arb_node()) {
        let id = ShapeId::parse("acme#anything").unwrap();
        let t = TraitRegistry::with_defaults()
            .create_trait(&id, &target(), value.clone())
            .unwrap();
        prop_assert_eq!(t.to_node(), value);
    }

    #[test]
    fn openapi_extensions_round_trip_objects(value in arb_node()) {
        let result = OpenApiExtensionsTrait::provider().create_trait(&target(), value.clone());
        if value.is_object() {
            prop_assert_eq!(result.unwrap().to_node(), value);
        } else {
            let is_type_error = matches!(result, Err(TraitError::ExpectedNodeType { .. }));
            prop_assert!(is_type_error);
        }
    }

    #[test]
    fn string_traits_round_trip(s in "[ -~]{0,40}") {
        let node = Node::from(s.as_str());
        for provider in [ContentTypeTrait::provider(), ErrorMessageTrait::provider()] {
            let t = provider.create_trait(&target(), node.clone()).unwrap();
            prop_assert_eq!(t.to_node(), node.clone());
        }
    }

    #[test]
    fn string_traits_reject_non_strings(value in arb_node()) {
        prop_assume!(!value.is_string());
        let result = ErrorMessageTrait::provider().create_trait(&target(), value);
        let is_type_error = matches!(result, Err(TraitError::ExpectedNodeType { .. }));
        prop_assert!(is_type_error);
    }

    #[test]
    fn default_value_cache(value in arb_node()) {
        let t = Trait::from(DefaultValueTrait::new(value.clone()));
        prop_assert_eq!(t.to_node(), value);
        let err = t.create_node().unwrap_err();
        prop_assert!(err.is_internal());
    }
}

#[test]
fn const_trait_without_value_is_rejected() {
    let err = ConstTrait::builder().build().unwrap_err();
    assert!(matches!(err, TraitError::MissingValue { .. }));
    assert!(!err.is_internal());
}
