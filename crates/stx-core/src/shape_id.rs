//! # Shape Identifiers
//!
//! A `ShapeId` names a shape, a member of a shape, or a trait:
//! `namespace#Name` or `namespace#Name$member`. Namespaces are one or more
//! identifiers joined by `.`.
//!
//! Identifiers are ordered (namespace, then name, then member), and a
//! shape always sorts before its own members. Model collections are keyed
//! by `ShapeId`, which is what makes iteration over a model deterministic.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Validated `namespace#Name$member` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: Cow<'static, str>,
    name: Cow<'static, str>,
    member: Option<Cow<'static, str>>,
}

impl ShapeId {
    /// Build an identifier from literals known to be well-formed.
    ///
    /// Intended for `const` trait and prelude identifiers. Inputs are not
    /// checked; every constant built this way is covered by a parse test.
    pub const fn from_static(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            name: Cow::Borrowed(name),
            member: None,
        }
    }

    /// Build an identifier from a namespace and a shape name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidShapeId`] if either part is malformed.
    pub fn from_parts(namespace: &str, name: &str) -> Result<Self, CoreError> {
        let input = format!("{namespace}#{name}");
        validate_namespace(namespace).map_err(|reason| invalid(&input, reason))?;
        validate_identifier(name).map_err(|reason| invalid(&input, reason))?;
        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            name: Cow::Owned(name.to_string()),
            member: None,
        })
    }

    /// Parse `namespace#Name` or `namespace#Name$member`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidShapeId`] if the input is malformed.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let (namespace, rest) = input
            .split_once('#')
            .ok_or_else(|| invalid(input, "missing '#' separator".to_string()))?;
        validate_namespace(namespace).map_err(|reason| invalid(input, reason))?;

        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };
        validate_identifier(name).map_err(|reason| invalid(input, reason))?;
        if let Some(member) = member {
            validate_identifier(member).map_err(|reason| invalid(input, reason))?;
        }

        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            name: Cow::Owned(name.to_string()),
            member: member.map(|m| Cow::Owned(m.to_string())),
        })
    }

    /// The same shape with `member` appended.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidShapeId`] if `member` is not an identifier.
    pub fn with_member(&self, member: &str) -> Result<Self, CoreError> {
        validate_identifier(member)
            .map_err(|reason| invalid(&format!("{}${member}", self.without_member()), reason))?;
        Ok(Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(Cow::Owned(member.to_string())),
        })
    }

    /// The same shape with a literal member name known to be well-formed
    /// (`member`, `key`, `value`, ...). Not checked.
    pub fn with_static_member(&self, member: &'static str) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(Cow::Borrowed(member)),
        }
    }

    /// The containing shape's identifier (drops any member part).
    pub fn without_member(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: None,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// True if this identifies a member rather than a shape.
    pub fn has_member(&self) -> bool {
        self.member.is_some()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${member}")?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

fn invalid(input: &str, reason: String) -> CoreError {
    CoreError::InvalidShapeId {
        input: input.to_string(),
        reason,
    }
}

fn validate_namespace(namespace: &str) -> Result<(), String> {
    if namespace.is_empty() {
        return Err("namespace is empty".to_string());
    }
    for segment in namespace.split('.') {
        validate_identifier(segment).map_err(|e| format!("namespace segment: {e}"))?;
    }
    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`, with at least one non-underscore character.
fn validate_identifier(s: &str) -> Result<(), String> {
    let mut chars = s.chars();
    let first = chars
        .next()
        .ok_or_else(|| "identifier is empty".to_string())?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!("identifier '{s}' must start with a letter or '_'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("identifier '{s}' contains invalid character '{bad}'"));
    }
    if s.chars().all(|c| c == '_') {
        return Err(format!("identifier '{s}' must contain a letter or digit"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_and_member() {
        let id = ShapeId::parse("smithytranslate#Document$dNull").unwrap();
        assert_eq!(id.namespace(), "smithytranslate");
        assert_eq!(id.name(), "Document");
        assert_eq!(id.member(), Some("dNull"));
        assert_eq!(id.to_string(), "smithytranslate#Document$dNull");
        assert_eq!(id.without_member().to_string(), "smithytranslate#Document");
    }

    #[test]
    fn test_parse_dotted_namespace() {
        let id: ShapeId = "smithy.api#String".parse().unwrap();
        assert_eq!(id.namespace(), "smithy.api");
        assert!(!id.has_member());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "NoHash",
            "#Name",
            "ns#",
            "ns#1Name",
            "ns..x#Name",
            "ns#Name$",
            "ns#Na-me",
            "ns#___",
        ] {
            let err = ShapeId::parse(bad).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidShapeId { .. }),
                "expected InvalidShapeId for {bad:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_static_equals_parsed() {
        const ID: ShapeId = ShapeId::from_static("smithytranslate", "defaultValue");
        assert_eq!(ID, ShapeId::parse("smithytranslate#defaultValue").unwrap());
    }

    #[test]
    fn test_with_member_validates() {
        let id = ShapeId::from_parts("example", "Config").unwrap();
        assert_eq!(id.with_member("cfg").unwrap().to_string(), "example#Config$cfg");
        assert!(id.with_member("bad member").is_err());
    }

    #[test]
    fn test_shape_sorts_before_its_members() {
        let shape = ShapeId::parse("ns#A").unwrap();
        let member = ShapeId::parse("ns#A$a").unwrap();
        let next = ShapeId::parse("ns#B").unwrap();
        assert!(shape < member);
        assert!(member < next);
    }

    #[test]
    fn test_serde_as_string() {
        let id = ShapeId::parse("ns#A$b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""ns#A$b""#);
        let back: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ShapeId>(r#""nope""#).is_err());
    }
}
