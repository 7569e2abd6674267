//! # Node / Shape Compatibility
//!
//! [`check_node`] walks a [`Node`] and a [`Shape`] together and reports
//! every place the value does not fit. It is pure: the only input besides
//! the value and shape is the [`ShapeIndex`] used to resolve member targets.
//!
//! ## Rules
//!
//! | Shape kind | Accepted value |
//! |---|---|
//! | document | anything, including `null` |
//! | boolean | boolean |
//! | string | string; `@length` counts characters, `@pattern` must match |
//! | blob | string; `@length` counts bytes |
//! | timestamp | string or number |
//! | enum | string naming a member (its `@enumValue`, else its name) |
//! | intEnum | integer equal to a member's `@enumValue` |
//! | byte, short, integer, long | integer within the kind's range |
//! | bigInteger | integer |
//! | float, double, bigDecimal | any number |
//! | list, set | array; set elements unique |
//! | map | object; keys checked as strings against the key target |
//! | structure | object; no unknown members, every `@required` member present |
//! | union | object with exactly one known member |
//!
//! Numbers then honour `@range`; strings, blobs and collections `@length`.
//! Constraint traits are read from the member first, then the target shape.
//!
//! Paths use `.name` for members and map entries and `[i]` for elements;
//! the root value has an empty path.

use std::fmt;

use stx_core::{Node, Number};
use stx_model::{MemberShape, Shape, ShapeIndex, ShapeKind};
use stx_traits::TraitMap;

/// One place a value does not fit its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Path to the offending value; empty for the root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Check `value` against `shape`.
///
/// `member_traits` are the traits of the member that led to `shape`, if
/// any; their constraints take precedence over the shape's own. `path` is
/// prepended to the path of every mismatch.
pub fn check_node(
    index: &dyn ShapeIndex,
    value: &Node,
    shape: &Shape,
    member_traits: Option<&TraitMap>,
    path: &str,
) -> Vec<Mismatch> {
    let mut checker = Checker {
        index,
        mismatches: Vec::new(),
    };
    checker.check(value, shape, member_traits, path);
    checker.mismatches
}

fn child_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Look a constraint up on the member, then on the shape.
fn constraint<'t, T>(
    member_traits: Option<&'t TraitMap>,
    shape: &'t Shape,
    get: fn(&'t TraitMap) -> Option<&'t T>,
) -> Option<&'t T> {
    member_traits.and_then(get).or_else(|| get(shape.traits()))
}

struct Checker<'a> {
    index: &'a dyn ShapeIndex,
    mismatches: Vec<Mismatch>,
}

impl<'a> Checker<'a> {
    fn push(&mut self, path: &str, message: String) {
        self.mismatches.push(Mismatch {
            path: path.to_string(),
            message,
        });
    }

    fn check(
        &mut self,
        value: &Node,
        shape: &Shape,
        member_traits: Option<&TraitMap>,
        path: &str,
    ) {
        match shape.kind() {
            ShapeKind::Document | ShapeKind::Member => {}
            ShapeKind::Boolean => {
                if !value.is_boolean() {
                    self.type_mismatch(value, shape, "boolean", path);
                }
            }
            ShapeKind::String => match value.as_string() {
                Some(s) => {
                    let chars = s.chars().count() as u64;
                    self.length(chars, "characters", shape, member_traits, path);
                    self.pattern(s, shape, member_traits, path);
                }
                None => self.type_mismatch(value, shape, "string", path),
            },
            ShapeKind::Blob => match value.as_string() {
                Some(s) => self.length(s.len() as u64, "bytes", shape, member_traits, path),
                None => self.type_mismatch(value, shape, "string", path),
            },
            ShapeKind::Timestamp => {
                if !value.is_string() && !value.is_number() {
                    self.type_mismatch(value, shape, "string or number", path);
                }
            }
            ShapeKind::Enum => match value.as_string() {
                Some(s) => self.string_enum(s, shape, path),
                None => self.type_mismatch(value, shape, "string", path),
            },
            ShapeKind::IntEnum => {
                if let Some(i) = self.integer(value, shape, path).and_then(|n| n.as_i64()) {
                    self.int_enum(i, shape, path);
                }
            }
            ShapeKind::Byte
            | ShapeKind::Short
            | ShapeKind::Integer
            | ShapeKind::Long
            | ShapeKind::BigInteger => {
                if let Some(n) = self.integer(value, shape, path) {
                    self.range(n, shape, member_traits, path);
                }
            }
            ShapeKind::Float | ShapeKind::Double | ShapeKind::BigDecimal => {
                match value.as_number() {
                    Some(n) => self.range(n, shape, member_traits, path),
                    None => self.type_mismatch(value, shape, "number", path),
                }
            }
            ShapeKind::List | ShapeKind::Set => self.list(value, shape, member_traits, path),
            ShapeKind::Map => self.map(value, shape, member_traits, path),
            ShapeKind::Structure => self.structure(value, shape, path),
            ShapeKind::Union => self.union(value, shape, path),
        }
    }

    fn type_mismatch(&mut self, value: &Node, shape: &Shape, expected: &str, path: &str) {
        let message = format!(
            "Expected {expected} value for {} shape, `{}`; found {} value",
            shape.kind(),
            shape.id(),
            value.node_type()
        );
        self.push(path, message);
    }

    /// Resolve a member target, reporting it if it is missing.
    fn target(&mut self, member: &MemberShape, path: &str) -> Option<&'a Shape> {
        let index = self.index;
        let target = index.resolve_target(member);
        if target.is_none() {
            self.push(
                path,
                format!(
                    "Member `{}` targets unknown shape `{}`",
                    member.id(),
                    member.target()
                ),
            );
        }
        target
    }

    fn member(&mut self, value: &Node, member: &MemberShape, path: &str) {
        if let Some(target) = self.target(member, path) {
            self.check(value, target, Some(member.traits()), path);
        }
    }

    /// An integral number within the kind's native range. `bigInteger` has
    /// no native range.
    fn integer(&mut self, value: &Node, shape: &Shape, path: &str) -> Option<Number> {
        let Some(n) = value.as_number() else {
            self.type_mismatch(value, shape, "number", path);
            return None;
        };
        let Some(i) = n.as_i128() else {
            self.push(
                path,
                format!(
                    "{} shapes must not have floating point values, \
                     but found `{n}` provided for `{}`",
                    shape.kind(),
                    shape.id()
                ),
            );
            return None;
        };
        if let Some((lo, hi)) = shape.kind().integer_bounds() {
            if i < i128::from(lo) || i > i128::from(hi) {
                self.push(
                    path,
                    format!(
                        "Value `{i}` is out of range for {} shape `{}`; \
                         expected a value between {lo} and {hi}",
                        shape.kind(),
                        shape.id()
                    ),
                );
                return None;
            }
        }
        Some(n)
    }

    fn range(&mut self, n: Number, shape: &Shape, member_traits: Option<&TraitMap>, path: &str) {
        let Some(range) = constraint(member_traits, shape, TraitMap::range) else {
            return;
        };
        if let Some(min) = range.min() {
            if n < min {
                self.push(
                    path,
                    format!(
                        "Value provided for `{}` must be greater than or equal to {min}, \
                         but found {n}",
                        shape.id()
                    ),
                );
            }
        }
        if let Some(max) = range.max() {
            if n > max {
                self.push(
                    path,
                    format!(
                        "Value provided for `{}` must be less than or equal to {max}, but \
                         found {n}",
                        shape.id()
                    ),
                );
            }
        }
    }

    fn length(
        &mut self,
        count: u64,
        unit: &str,
        shape: &Shape,
        member_traits: Option<&TraitMap>,
        path: &str,
    ) {
        let Some(length) = constraint(member_traits, shape, TraitMap::length) else {
            return;
        };
        if let Some(min) = length.min() {
            if count < min {
                self.push(
                    path,
                    format!(
                        "Value provided for `{}` must have at least {min} {unit}, but found \
                         {count}",
                        shape.id()
                    ),
                );
            }
        }
        if let Some(max) = length.max() {
            if count > max {
                self.push(
                    path,
                    format!(
                        "Value provided for `{}` must have no more than {max} {unit}, but \
                         found {count}",
                        shape.id()
                    ),
                );
            }
        }
    }

    fn pattern(&mut self, s: &str, shape: &Shape, member_traits: Option<&TraitMap>, path: &str) {
        if let Some(pattern) = constraint(member_traits, shape, TraitMap::pattern) {
            if !pattern.is_match(s) {
                self.push(
                    path,
                    format!(
                        "String value provided for `{}` must match regular expression: {}",
                        shape.id(),
                        pattern.pattern()
                    ),
                );
            }
        }
    }

    fn string_enum(&mut self, s: &str, shape: &Shape, path: &str) {
        let allowed: Vec<&str> = shape
            .members()
            .iter()
            .map(|m| {
                m.traits()
                    .enum_value()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| m.name())
            })
            .collect();
        if !allowed.contains(&s) {
            let listed: Vec<String> = allowed.iter().map(|v| format!("`{v}`")).collect();
            self.push(
                path,
                format!(
                    "String value provided for `{}` must be one of the following values: {}",
                    shape.id(),
                    listed.join(", ")
                ),
            );
        }
    }

    fn int_enum(&mut self, i: i64, shape: &Shape, path: &str) {
        let allowed: Vec<i64> = shape
            .members()
            .iter()
            .filter_map(|m| m.traits().enum_value().and_then(|v| v.as_i64()))
            .collect();
        if !allowed.contains(&i) {
            let listed: Vec<String> = allowed.iter().map(i64::to_string).collect();
            self.push(
                path,
                format!(
                    "Integer value provided for `{}` must be one of the following values: \
                     {}, but found {i}",
                    shape.id(),
                    listed.join(", ")
                ),
            );
        }
    }

    fn list(&mut self, value: &Node, shape: &Shape, member_traits: Option<&TraitMap>, path: &str) {
        let Some(array) = value.as_array() else {
            self.type_mismatch(value, shape, "array", path);
            return;
        };
        self.length(array.len() as u64, "elements", shape, member_traits, path);
        if let Some(member) = shape.list_member() {
            if let Some(target) = self.target(member, path) {
                for (i, element) in array.iter().enumerate() {
                    self.check(element, target, Some(member.traits()), &format!("{path}[{i}]"));
                }
            }
        }
        if shape.kind() == ShapeKind::Set {
            let elements = array.elements();
            for (i, element) in elements.iter().enumerate() {
                if elements[..i].contains(element) {
                    self.push(
                        &format!("{path}[{i}]"),
                        format!("Duplicate element in set `{}`: {element}", shape.id()),
                    );
                }
            }
        }
    }

    fn map(&mut self, value: &Node, shape: &Shape, member_traits: Option<&TraitMap>, path: &str) {
        let Some(object) = value.as_object() else {
            self.type_mismatch(value, shape, "object", path);
            return;
        };
        self.length(object.len() as u64, "entries", shape, member_traits, path);
        let (Some(key), Some(entry)) = (shape.map_key(), shape.map_value()) else {
            return;
        };
        let key_target = self.target(key, path);
        let value_target = self.target(entry, path);
        for (k, v) in object.iter() {
            let entry_path = child_path(path, k);
            if let Some(target) = key_target {
                self.check(&Node::from(k), target, Some(key.traits()), &entry_path);
            }
            if let Some(target) = value_target {
                self.check(v, target, Some(entry.traits()), &entry_path);
            }
        }
    }

    fn structure(&mut self, value: &Node, shape: &Shape, path: &str) {
        let Some(object) = value.as_object() else {
            self.type_mismatch(value, shape, "object", path);
            return;
        };
        for (name, v) in object.iter() {
            let member_path = child_path(path, name);
            match shape.member(name) {
                Some(member) => self.member(v, member, &member_path),
                None => self.push(
                    &member_path,
                    format!("Invalid structure member `{name}` found for `{}`", shape.id()),
                ),
            }
        }
        for member in shape.members() {
            if member.traits().is_required() && !object.contains_key(member.name()) {
                self.push(
                    path,
                    format!(
                        "Missing required structure member `{}` for `{}`",
                        member.name(),
                        shape.id()
                    ),
                );
            }
        }
    }

    fn union(&mut self, value: &Node, shape: &Shape, path: &str) {
        let Some(object) = value.as_object() else {
            self.type_mismatch(value, shape, "object", path);
            return;
        };
        if object.len() != 1 {
            self.push(
                path,
                format!(
                    "union values must contain a value for exactly one member, but found {} \
                     for `{}`",
                    object.len(),
                    shape.id()
                ),
            );
            return;
        }
        for (name, v) in object.iter() {
            let member_path = child_path(path, name);
            match shape.member(name) {
                Some(member) => self.member(v, member, &member_path),
                None => self.push(
                    &member_path,
                    format!("Invalid union member `{name}` found for `{}`", shape.id()),
                ),
            }
        }
    }
}
