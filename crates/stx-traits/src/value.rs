//! # The Trait Seam
//!
//! [`TraitValue`] is implemented by every trait kind. [`Trait`] is the closed
//! set of kinds a shape or member can carry.

use stx_core::{Node, ShapeId, SourceLocation};

use crate::annotation::{NullableTrait, RequiredTrait};
use crate::constraint::{EnumValueTrait, LengthTrait, PatternTrait, RangeTrait};
use crate::default_value::DefaultValueTrait;
use crate::error::TraitError;
use crate::opaque::{ConstTrait, DynamicTrait, OpenApiExtensionsTrait};
use crate::string_trait::{ContentTypeTrait, ErrorMessageTrait};

/// Behaviour shared by every trait kind.
pub trait TraitValue {
    /// Qualified name of the trait.
    fn id(&self) -> ShapeId;

    /// Where the trait was declared.
    fn source_location(&self) -> &SourceLocation;

    /// Rebuild the node from the trait's internal state.
    ///
    /// # Errors
    ///
    /// Returns [`TraitError::NodeCacheOnly`] for kinds that only store the
    /// node they were built from.
    fn create_node(&self) -> Result<Node, TraitError>;

    /// The trait's value as a node. Never recomputes for stored-node kinds.
    fn to_node(&self) -> Node;
}

/// A trait attached to a shape or member.
///
/// Two traits are equal when their ids and node values are equal; source
/// locations are ignored.
#[derive(Debug, Clone)]
pub enum Trait {
    Const(ConstTrait),
    OpenApiExtensions(OpenApiExtensionsTrait),
    ContentType(ContentTypeTrait),
    ErrorMessage(ErrorMessageTrait),
    DefaultValue(DefaultValueTrait),
    Nullable(NullableTrait),
    Required(RequiredTrait),
    Range(RangeTrait),
    Length(LengthTrait),
    Pattern(PatternTrait),
    EnumValue(EnumValueTrait),
    /// A trait id with no registered provider.
    Dynamic(DynamicTrait),
}

impl Trait {
    fn as_value(&self) -> &dyn TraitValue {
        match self {
            Trait::Const(t) => t,
            Trait::OpenApiExtensions(t) => t,
            Trait::ContentType(t) => t,
            Trait::ErrorMessage(t) => t,
            Trait::DefaultValue(t) => t,
            Trait::Nullable(t) => t,
            Trait::Required(t) => t,
            Trait::Range(t) => t,
            Trait::Length(t) => t,
            Trait::Pattern(t) => t,
            Trait::EnumValue(t) => t,
            Trait::Dynamic(t) => t,
        }
    }

    pub fn as_default_value(&self) -> Option<&DefaultValueTrait> {
        match self {
            Trait::DefaultValue(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeTrait> {
        match self {
            Trait::Range(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<&LengthTrait> {
        match self {
            Trait::Length(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&PatternTrait> {
        match self {
            Trait::Pattern(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum_value(&self) -> Option<&EnumValueTrait> {
        match self {
            Trait::EnumValue(t) => Some(t),
            _ => None,
        }
    }
}

impl TraitValue for Trait {
    fn id(&self) -> ShapeId {
        self.as_value().id()
    }

    fn source_location(&self) -> &SourceLocation {
        self.as_value().source_location()
    }

    fn create_node(&self) -> Result<Node, TraitError> {
        self.as_value().create_node()
    }

    fn to_node(&self) -> Node {
        self.as_value().to_node()
    }
}

impl PartialEq for Trait {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && self.to_node() == other.to_node()
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident => $kind:ty),* $(,)?) => {
        $(
            impl From<$kind> for Trait {
                fn from(t: $kind) -> Self {
                    Trait::$variant(t)
                }
            }
        )*
    };
}

impl_from_kind! {
    Const => ConstTrait,
    OpenApiExtensions => OpenApiExtensionsTrait,
    ContentType => ContentTypeTrait,
    ErrorMessage => ErrorMessageTrait,
    DefaultValue => DefaultValueTrait,
    Nullable => NullableTrait,
    Required => RequiredTrait,
    Range => RangeTrait,
    Length => LengthTrait,
    Pattern => PatternTrait,
    EnumValue => EnumValueTrait,
    Dynamic => DynamicTrait,
}
