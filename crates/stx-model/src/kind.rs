//! # Shape Kinds
//!
//! One variant per shape type. Every `match` on `ShapeKind` is exhaustive,
//! so adding a kind forces every validator to decide how to treat it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Blob,
    Boolean,
    String,
    Timestamp,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    /// Open, type-erased "any JSON-like value".
    Document,
    /// String enumeration; members carry the allowed values.
    Enum,
    /// Integer enumeration; members carry the allowed values.
    IntEnum,
    List,
    /// A list whose elements are unique.
    Set,
    Map,
    Structure,
    /// Exactly one member is set.
    Union,
    Member,
}

impl ShapeKind {
    /// Kinds whose values must be integral.
    pub fn is_integer_kind(&self) -> bool {
        matches!(
            self,
            ShapeKind::Byte
                | ShapeKind::Short
                | ShapeKind::Integer
                | ShapeKind::Long
                | ShapeKind::BigInteger
                | ShapeKind::IntEnum
        )
    }

    /// Kinds whose values are numbers.
    pub fn is_number_kind(&self) -> bool {
        self.is_integer_kind()
            || matches!(
                self,
                ShapeKind::Float | ShapeKind::Double | ShapeKind::BigDecimal
            )
    }

    /// Kinds that own named members.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            ShapeKind::List
                | ShapeKind::Set
                | ShapeKind::Map
                | ShapeKind::Structure
                | ShapeKind::Union
                | ShapeKind::Enum
                | ShapeKind::IntEnum
        )
    }

    /// Native range of the fixed-width integer kinds.
    pub fn integer_bounds(&self) -> Option<(i64, i64)> {
        match self {
            ShapeKind::Byte => Some((i64::from(i8::MIN), i64::from(i8::MAX))),
            ShapeKind::Short => Some((i64::from(i16::MIN), i64::from(i16::MAX))),
            ShapeKind::Integer | ShapeKind::IntEnum => {
                Some((i64::from(i32::MIN), i64::from(i32::MAX)))
            }
            ShapeKind::Long => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::Blob => "blob",
            ShapeKind::Boolean => "boolean",
            ShapeKind::String => "string",
            ShapeKind::Timestamp => "timestamp",
            ShapeKind::Byte => "byte",
            ShapeKind::Short => "short",
            ShapeKind::Integer => "integer",
            ShapeKind::Long => "long",
            ShapeKind::Float => "float",
            ShapeKind::Double => "double",
            ShapeKind::BigInteger => "bigInteger",
            ShapeKind::BigDecimal => "bigDecimal",
            ShapeKind::Document => "document",
            ShapeKind::Enum => "enum",
            ShapeKind::IntEnum => "intEnum",
            ShapeKind::List => "list",
            ShapeKind::Set => "set",
            ShapeKind::Map => "map",
            ShapeKind::Structure => "structure",
            ShapeKind::Union => "union",
            ShapeKind::Member => "member",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for kind in [ShapeKind::BigInteger, ShapeKind::IntEnum, ShapeKind::Map] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(ShapeKind::Byte.integer_bounds(), Some((-128, 127)));
        assert_eq!(ShapeKind::BigInteger.integer_bounds(), None);
        assert!(ShapeKind::BigInteger.is_integer_kind());
        assert!(ShapeKind::Double.is_number_kind());
        assert!(!ShapeKind::Double.is_integer_kind());
        assert!(!ShapeKind::Document.is_aggregate());
    }
}
