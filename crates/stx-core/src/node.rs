//! # Node — Semi-Structured Trait Values
//!
//! `Node` is the recursive value type used for every trait payload and every
//! default value: null, boolean, number, string, array or object.
//!
//! ## Invariants
//!
//! - A node is immutable once constructed. Arrays and objects are built
//!   through `FromIterator` or [`ObjectNodeBuilder`] and expose read-only
//!   views afterwards.
//! - [`Number`] keeps integers and floating-point values apart. Every JSON
//!   integer, up to `u64::MAX`, stays an integer.
//! - Equality is reflexive: a NaN float equals itself.
//! - [`ObjectNode`] keys are unique and keep insertion order, so a value
//!   re-serializes the way it was written. Equality ignores that order.
//!
//! ## JSON Interop
//!
//! Nodes convert losslessly from `serde_json::Value` (the workspace enables
//! `preserve_order`, so object order survives the trip). Converting back is
//! lossless except for non-finite floats, which JSON cannot represent and
//! which become `null`.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::NodeError;

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Integer or floating-point number.
    Number,
    /// UTF-8 string.
    String,
    /// Ordered sequence.
    Array,
    /// String-keyed mapping.
    Object,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeType::Null => "null",
            NodeType::Boolean => "boolean",
            NodeType::Number => "number",
            NodeType::String => "string",
            NodeType::Array => "array",
            NodeType::Object => "object",
        };
        f.write_str(s)
    }
}

/// A numeric node value.
///
/// `Int(1)` and `Float(1.0)` are different values. Integers compare by
/// value across [`Number::Int`] and [`Number::UInt`]. Floats compare with
/// `==`, except that NaN equals NaN so node equality stays reflexive.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Integral value that fits in an `i64`.
    Int(i64),
    /// Integral value above `i64::MAX`. [`From<u64>`] only produces this
    /// variant when the value does not fit [`Number::Int`].
    UInt(u64),
    /// Any other number.
    Float(f64),
}

impl Number {
    /// True for [`Number::Int`] and [`Number::UInt`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_) | Number::UInt(_))
    }

    /// True for [`Number::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The integer value, if this is an integer that fits an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::UInt(u) => i64::try_from(*u).ok(),
            Number::Float(_) => None,
        }
    }

    /// The integer value, if this is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Int(i) => u64::try_from(*i).ok(),
            Number::UInt(u) => Some(*u),
            Number::Float(_) => None,
        }
    }

    /// The integer value widened to `i128`; every integer fits.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Number::Int(i) => Some(i128::from(*i)),
            Number::UInt(u) => Some(i128::from(*u)),
            Number::Float(_) => None,
        }
    }

    /// The value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::UInt(u) => *u as f64,
            Number::Float(f) => *f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Float(a), Number::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Number::Float(_), _) | (_, Number::Float(_)) => false,
            _ => self.as_i128() == other.as_i128(),
        }
    }
}

impl PartialOrd for Number {
    /// Integers compare exactly; anything involving a float compares as `f64`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::UInt(u),
        }
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// An immutable ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayNode {
    elements: Vec<Node>,
}

impl ArrayNode {
    /// Wrap a vector of nodes.
    pub fn new(elements: Vec<Node>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.elements.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.elements.iter()
    }

    /// The elements as a slice.
    pub fn elements(&self) -> &[Node] {
        &self.elements
    }
}

impl FromIterator<Node> for ArrayNode {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ArrayNode {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// An immutable string-keyed mapping that keeps insertion order.
///
/// Equality compares entries regardless of order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectNode {
    entries: IndexMap<String, Node>,
}

impl ObjectNode {
    /// Start building an object.
    pub fn builder() -> ObjectNodeBuilder {
        ObjectNodeBuilder::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Start a builder seeded with this object's entries.
    pub fn to_builder(&self) -> ObjectNodeBuilder {
        ObjectNodeBuilder {
            entries: self.entries.clone(),
        }
    }
}

impl FromIterator<(String, Node)> for ObjectNode {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut builder = ObjectNodeBuilder::default();
        for (k, v) in iter {
            builder.insert(k, v);
        }
        builder.build()
    }
}

/// Builder for [`ObjectNode`].
///
/// Inserting a key that is already present replaces its value and keeps the
/// original position.
#[derive(Debug, Clone, Default)]
pub struct ObjectNodeBuilder {
    entries: IndexMap<String, Node>,
}

impl ObjectNodeBuilder {
    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Chaining form of [`ObjectNodeBuilder::insert`].
    pub fn with_member(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    /// Finish the object.
    pub fn build(self) -> ObjectNode {
        ObjectNode {
            entries: self.entries,
        }
    }
}

/// A semi-structured value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// `null`
    #[default]
    Null,
    /// `true` / `false`
    Boolean(bool),
    /// Integer or floating-point number.
    Number(Number),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of nodes.
    Array(ArrayNode),
    /// String-keyed mapping of nodes.
    Object(ObjectNode),
}

impl Node {
    /// An empty array node.
    pub fn empty_array() -> Self {
        Node::Array(ArrayNode::default())
    }

    /// An empty object node.
    pub fn empty_object() -> Self {
        Node::Object(ObjectNode::default())
    }

    /// The discriminant of this node.
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Null => NodeType::Null,
            Node::Boolean(_) => NodeType::Boolean,
            Node::Number(_) => NodeType::Number,
            Node::String(_) => NodeType::String,
            Node::Array(_) => NodeType::Array,
            Node::Object(_) => NodeType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Node::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayNode> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Checked narrowing to a string.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExpectedType`] when the node is not a string.
    pub fn expect_string(&self) -> Result<&str, NodeError> {
        self.as_string().ok_or_else(|| self.type_error(NodeType::String))
    }

    /// Checked narrowing to a number.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExpectedType`] when the node is not a number.
    pub fn expect_number(&self) -> Result<Number, NodeError> {
        self.as_number().ok_or_else(|| self.type_error(NodeType::Number))
    }

    /// Checked narrowing to an array.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExpectedType`] when the node is not an array.
    pub fn expect_array(&self) -> Result<&ArrayNode, NodeError> {
        self.as_array().ok_or_else(|| self.type_error(NodeType::Array))
    }

    /// Checked narrowing to an object.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExpectedType`] when the node is not an object.
    pub fn expect_object(&self) -> Result<&ObjectNode, NodeError> {
        self.as_object().ok_or_else(|| self.type_error(NodeType::Object))
    }

    /// Consuming form of [`Node::expect_object`].
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExpectedType`] when the node is not an object.
    pub fn into_object(self) -> Result<ObjectNode, NodeError> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(other.type_error(NodeType::Object)),
        }
    }

    fn type_error(&self, expected: NodeType) -> NodeError {
        NodeError::ExpectedType {
            expected,
            found: self.node_type(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::from(self))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Boolean(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Number(Number::Int(i))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Number(Number::Int(i64::from(i)))
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        Node::Number(Number::from(u))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Number(Number::Float(f))
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Number(n)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<ArrayNode> for Node {
    fn from(a: ArrayNode) -> Self {
        Node::Array(a)
    }
}

impl From<ObjectNode> for Node {
    fn from(o: ObjectNode) -> Self {
        Node::Object(o)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Boolean(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Node::Number(Number::Int(i)),
                (None, Some(u)) => Node::Number(Number::UInt(u)),
                (None, None) => Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Boolean(b) => Value::Bool(*b),
            Node::Number(Number::Int(i)) => Value::from(*i),
            Node::Number(Number::UInt(u)) => Value::from(*u),
            Node::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(a) => Value::Array(a.iter().map(Value::from).collect()),
            Node::Object(o) => Value::Object(
                o.iter()
                    .map(|(k, v)| (k.to_string(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Boolean(b) => serializer.serialize_bool(*b),
            Node::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Node::Number(Number::UInt(u)) => serializer.serialize_u64(*u),
            Node::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(a) => serializer.collect_seq(a.iter()),
            Node::Object(o) => serializer.collect_map(o.iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_and_float_stay_distinct() {
        let int = Node::from(json!(1));
        let float = Node::from(json!(1.0));
        assert_eq!(int.as_number(), Some(Number::Int(1)));
        assert_eq!(float.as_number(), Some(Number::Float(1.0)));
        assert_ne!(int, float);
    }

    #[test]
    fn test_number_ordering() {
        assert!(Number::Int(i64::MAX) > Number::Int(i64::MAX - 1));
        assert!(Number::Float(1.5) > Number::Int(1));
        assert!(Number::Int(-3) < Number::Float(-2.5));
        assert!(Number::Float(f64::NAN)
            .partial_cmp(&Number::Int(0))
            .is_none());
    }

    #[test]
    fn test_large_unsigned_stays_integer() {
        let node = Node::from(json!(u64::MAX));
        let n = node.as_number().unwrap();
        assert_eq!(n, Number::UInt(u64::MAX));
        assert!(n.is_integer());
        assert_eq!(n.as_i64(), None);
        assert_eq!(n.as_u64(), Some(u64::MAX));
        assert_eq!(Value::from(&node), json!(u64::MAX));
        assert_eq!(serde_json::to_string(&node).unwrap(), "18446744073709551615");
        assert_eq!(node.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_unsigned_in_signed_range_is_int() {
        assert_eq!(Number::from(7u64), Number::Int(7));
        assert_eq!(Number::UInt(7), Number::Int(7));
        let above = i64::MAX as u64 + 1;
        assert_eq!(Number::from(above), Number::UInt(above));
        assert!(Number::UInt(above) > Number::Int(i64::MAX));
        assert_ne!(Number::UInt(above), Number::Float(above as f64));
    }

    #[test]
    fn test_nan_node_equals_itself() {
        let node = Node::from(f64::NAN);
        assert_eq!(node, node.clone());
        let arr = Node::from(ArrayNode::new(vec![Node::from(f64::NAN)]));
        assert_eq!(arr, arr.clone());
        assert_ne!(Node::from(f64::NAN), Node::from(0.0));
        assert_eq!(Node::from(0.0), Node::from(-0.0));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let node = Node::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&str> = node.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(node.to_string(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = Node::from(json!({"x": 1, "y": [true, null]}));
        let b = Node::from(json!({"y": [true, null], "x": 1}));
        assert_eq!(a, b);
    }

    #[test]
    fn test_object_inequality_on_value() {
        let a = Node::from(json!({"x": 1}));
        let b = Node::from(json!({"x": 2}));
        assert_ne!(a, b);
    }

    #[test]
    fn test_wide_object_keeps_order_and_lookups() {
        let obj: ObjectNode = (0..5_000)
            .rev()
            .map(|i| (format!("k{i}"), Node::from(i64::from(i))))
            .collect();
        assert_eq!(obj.len(), 5_000);
        assert_eq!(obj.keys().next(), Some("k4999"));
        assert_eq!(obj.keys().last(), Some("k0"));
        assert_eq!(obj.get("k1234"), Some(&Node::from(1234)));
        assert!(!obj.contains_key("k5000"));
    }

    #[test]
    fn test_builder_replaces_duplicate_key_in_place() {
        let obj = ObjectNode::builder()
            .with_member("a", 1)
            .with_member("b", 2)
            .with_member("a", "again")
            .build();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Node::from("again")));
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_emptiness_is_structural() {
        assert!(Node::empty_array().as_array().unwrap().is_empty());
        assert!(Node::empty_object().as_object().unwrap().is_empty());
        assert!(!Node::from(json!([null])).as_array().unwrap().is_empty());
        assert!(!Node::from(json!({"k": {}})).as_object().unwrap().is_empty());
    }

    #[test]
    fn test_narrowing_accessors_return_none_on_mismatch() {
        let node = Node::from("text");
        assert!(node.is_string());
        assert_eq!(node.as_string(), Some("text"));
        assert!(node.as_array().is_none());
        assert!(node.as_object().is_none());
        assert!(node.as_boolean().is_none());
        assert!(node.as_number().is_none());
    }

    #[test]
    fn test_expect_reports_expected_and_found() {
        let err = Node::from(json!({"a": 1})).expect_string().unwrap_err();
        assert_eq!(
            err,
            NodeError::ExpectedType {
                expected: NodeType::String,
                found: NodeType::Object,
            }
        );
        assert_eq!(err.to_string(), "expected string node, found object node");
    }

    #[test]
    fn test_serde_round_trip_through_json_text() {
        let node = Node::from(json!({"b": [1, 2.5, "x"], "a": null, "c": false}));
        let text = serde_json::to_string(&node).unwrap();
        assert_eq!(text, r#"{"b":[1,2.5,"x"],"a":null,"c":false}"#);
        let back: Node = serde_json::from_str(&text).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        let value = Value::from(&Node::from(f64::INFINITY));
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::Array.to_string(), "array");
        assert_eq!(Node::Null.node_type().to_string(), "null");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_node() -> impl Strategy<Value = Node> {
            let leaf = prop_oneof![
                Just(Node::Null),
                any::<bool>().prop_map(Node::from),
                any::<i64>().prop_map(Node::from),
                any::<u64>().prop_map(Node::from),
                (-1.0e9f64..1.0e9f64).prop_map(Node::from),
                "[a-zA-Z0-9_ ]{0,20}".prop_map(Node::from),
            ];
            leaf.prop_recursive(4, 64, 8, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..6)
                        .prop_map(|v| Node::Array(ArrayNode::new(v))),
                    prop::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|m| {
                        Node::Object(m.into_iter().collect())
                    }),
                ]
            })
        }

        proptest! {
            /// Converting through `serde_json::Value` is lossless for finite values.
            #[test]
            fn json_value_round_trip(node in arb_node()) {
                let back = Node::from(Value::from(&node));
                prop_assert_eq!(back, node);
            }

            /// Structural equality is reflexive on clones.
            #[test]
            fn clone_is_equal(node in arb_node()) {
                prop_assert_eq!(node.clone(), node);
            }
        }
    }
}
