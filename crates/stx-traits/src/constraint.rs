//! # Constraint Traits
//!
//! Prelude traits that restrict the values a shape accepts. Node validation
//! consults them when checking a default value against its target.
//!
//! - `@range(min, max)`: numeric bounds, inclusive.
//! - `@length(min, max)`: size bounds for strings, blobs, lists and maps.
//! - `@pattern`: regular expression a string must match somewhere.
//! - `@enumValue`: the value an enum or intEnum member stands for.

use regex::Regex;
use stx_core::{Node, Number, ObjectNode, ShapeId, SourceLocation};

use crate::error::TraitError;
use crate::provider::Provider;
use crate::string_trait::string_value;
use crate::value::{Trait, TraitValue};

/// `smithy.api#range`
#[derive(Debug, Clone, Default)]
pub struct RangeTrait {
    min: Option<Number>,
    max: Option<Number>,
    source_location: SourceLocation,
}

impl RangeTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithy.api", "range");

    pub fn new(min: Option<Number>, max: Option<Number>) -> Self {
        Self {
            min,
            max,
            source_location: SourceLocation::none(),
        }
    }

    pub fn min(&self) -> Option<Number> {
        self.min
    }

    pub fn max(&self) -> Option<Number> {
        self.max
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |target, value, location| {
            let obj = expect_object(Self::ID, target, value)?;
            let bound = |key: &str| -> Result<Option<Number>, TraitError> {
                match obj.get(key) {
                    None | Some(Node::Null) => Ok(None),
                    Some(Node::Number(n)) => Ok(Some(*n)),
                    Some(other) => Err(TraitError::invalid(
                        Self::ID,
                        target,
                        format!("`{key}` must be a number, found {}", other.node_type()),
                    )),
                }
            };
            let (min, max) = (bound("min")?, bound("max")?);
            if let (Some(lo), Some(hi)) = (min, max) {
                if lo > hi {
                    return Err(TraitError::invalid(
                        Self::ID,
                        target,
                        format!("min {lo} is greater than max {hi}"),
                    ));
                }
            }
            Ok(Trait::Range(Self {
                min,
                max,
                source_location: location,
            }))
        })
    }
}

impl TraitValue for RangeTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.to_node())
    }

    fn to_node(&self) -> Node {
        let mut builder = ObjectNode::builder();
        if let Some(min) = self.min {
            builder.insert("min", min);
        }
        if let Some(max) = self.max {
            builder.insert("max", max);
        }
        Node::Object(builder.build())
    }
}

/// `smithy.api#length`
#[derive(Debug, Clone, Default)]
pub struct LengthTrait {
    min: Option<u64>,
    max: Option<u64>,
    source_location: SourceLocation,
}

impl LengthTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithy.api", "length");

    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self {
            min,
            max,
            source_location: SourceLocation::none(),
        }
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |target, value, location| {
            let obj = expect_object(Self::ID, target, value)?;
            let bound = |key: &str| -> Result<Option<u64>, TraitError> {
                match obj.get(key) {
                    None | Some(Node::Null) => Ok(None),
                    Some(Node::Number(n)) if n.as_u64().is_some() => Ok(n.as_u64()),
                    Some(other) => Err(TraitError::invalid(
                        Self::ID,
                        target,
                        format!("`{key}` must be a non-negative integer, found {other}"),
                    )),
                }
            };
            let (min, max) = (bound("min")?, bound("max")?);
            if let (Some(lo), Some(hi)) = (min, max) {
                if lo > hi {
                    return Err(TraitError::invalid(
                        Self::ID,
                        target,
                        format!("min {lo} is greater than max {hi}"),
                    ));
                }
            }
            Ok(Trait::Length(Self {
                min,
                max,
                source_location: location,
            }))
        })
    }
}

impl TraitValue for LengthTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.to_node())
    }

    fn to_node(&self) -> Node {
        let mut builder = ObjectNode::builder();
        if let Some(min) = self.min {
            builder.insert("min", min);
        }
        if let Some(max) = self.max {
            builder.insert("max", max);
        }
        Node::Object(builder.build())
    }
}

/// `smithy.api#pattern`
#[derive(Debug, Clone)]
pub struct PatternTrait {
    pattern: String,
    regex: Regex,
    source_location: SourceLocation,
}

impl PatternTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithy.api", "pattern");

    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error if `pattern` is not a valid expression.
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern)?;
        Ok(Self {
            pattern,
            regex,
            source_location: SourceLocation::none(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Unanchored: the pattern may match any part of `s`.
    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |target, value, location| {
            let pattern = string_value(Self::ID, target, value)?;
            let mut t = Self::new(pattern)
                .map_err(|e| TraitError::invalid(Self::ID, target, e.to_string()))?;
            t.source_location = location;
            Ok(Trait::Pattern(t))
        })
    }
}

impl TraitValue for PatternTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.to_node())
    }

    fn to_node(&self) -> Node {
        Node::String(self.pattern.clone())
    }
}

/// `smithy.api#enumValue`: a string for enum members, an integer for
/// intEnum members.
#[derive(Debug, Clone)]
pub struct EnumValueTrait {
    value: Node,
    source_location: SourceLocation,
}

impl EnumValueTrait {
    pub const ID: ShapeId = ShapeId::from_static("smithy.api", "enumValue");

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: Node::String(value.into()),
            source_location: SourceLocation::none(),
        }
    }

    pub fn int(value: i64) -> Self {
        Self {
            value: Node::from(value),
            source_location: SourceLocation::none(),
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        self.value.as_string()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_number().and_then(|n| n.as_i64())
    }

    pub fn provider() -> Provider {
        Provider::new(Self::ID, |target, value, location| match value {
            Node::String(_) | Node::Number(Number::Int(_)) => Ok(Trait::EnumValue(Self {
                value,
                source_location: location,
            })),
            other => Err(TraitError::expected(
                Self::ID,
                target,
                "string or integer",
                other.node_type(),
            )),
        })
    }
}

impl TraitValue for EnumValueTrait {
    fn id(&self) -> ShapeId {
        Self::ID
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        Ok(self.value.clone())
    }

    fn to_node(&self) -> Node {
        self.value.clone()
    }
}

fn expect_object(
    trait_id: ShapeId,
    target: &ShapeId,
    value: Node,
) -> Result<ObjectNode, TraitError> {
    let found = value.node_type();
    value
        .into_object()
        .map_err(|_| TraitError::expected(trait_id, target, "object", found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn target() -> ShapeId {
        ShapeId::parse("example#Port").unwrap()
    }

    #[test]
    fn test_range_provider_reads_bounds() {
        let t = RangeTrait::provider()
            .create_trait(&target(), Node::from(json!({"min": 1, "max": 65535})))
            .unwrap();
        let range = t.as_range().unwrap();
        assert_eq!(range.min(), Some(Number::Int(1)));
        assert_eq!(range.max(), Some(Number::Int(65535)));
        assert_eq!(t.to_node(), Node::from(json!({"min": 1, "max": 65535})));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = RangeTrait::provider()
            .create_trait(&target(), Node::from(json!({"min": 10, "max": 1})))
            .unwrap_err();
        assert!(matches!(err, TraitError::InvalidValue { .. }));
    }

    #[test]
    fn test_range_rejects_string_bound() {
        let err = RangeTrait::provider()
            .create_trait(&target(), Node::from(json!({"min": "1"})))
            .unwrap_err();
        assert!(err.to_string().contains("`min` must be a number"));
    }

    #[test]
    fn test_length_rejects_negative() {
        let err = LengthTrait::provider()
            .create_trait(&target(), Node::from(json!({"min": -1})))
            .unwrap_err();
        assert!(matches!(err, TraitError::InvalidValue { .. }));
    }

    #[test]
    fn test_length_open_ended() {
        let t = LengthTrait::provider()
            .create_trait(&target(), Node::from(json!({"max": 3})))
            .unwrap();
        let length = t.as_length().unwrap();
        assert_eq!(length.min(), None);
        assert_eq!(length.max(), Some(3));
    }

    #[test]
    fn test_length_keeps_unsigned_bounds() {
        let value = Node::from(json!({"max": u64::MAX}));
        let t = LengthTrait::provider()
            .create_trait(&target(), value.clone())
            .unwrap();
        assert_eq!(t.as_length().unwrap().max(), Some(u64::MAX));
        assert_eq!(t.to_node(), value);
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let p = PatternTrait::new("[0-9]+").unwrap();
        assert!(p.is_match("abc123"));
        assert!(!p.is_match("abc"));
    }

    #[test]
    fn test_pattern_provider_rejects_bad_regex() {
        let err = PatternTrait::provider()
            .create_trait(&target(), Node::from("(unclosed"))
            .unwrap_err();
        assert!(matches!(err, TraitError::InvalidValue { .. }));
    }

    #[test]
    fn test_enum_value_rejects_float() {
        let err = EnumValueTrait::provider()
            .create_trait(&target(), Node::from(1.5))
            .unwrap_err();
        assert!(matches!(err, TraitError::ExpectedNodeType { .. }));
        let ok = EnumValueTrait::provider()
            .create_trait(&target(), Node::from(3))
            .unwrap();
        assert_eq!(ok.as_enum_value().unwrap().as_i64(), Some(3));
    }
}
