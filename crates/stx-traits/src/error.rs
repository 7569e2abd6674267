//! Trait construction errors.
//!
//! Three distinct failure classes live here:
//!
//! - **Construction errors** (`ExpectedNodeType`, `InvalidValue`): a provider
//!   was handed a raw value of the wrong shape. The loader decides whether to
//!   abort or skip the trait.
//! - **Precondition failures** (`MissingValue`): a builder was finished
//!   without its required value.
//! - **Internal-consistency failures** (`NodeCacheOnly`): the embedding code
//!   asked a trait to recompute a node it only ever stores. This is a caller
//!   bug and must not be surfaced to schema authors.

use stx_core::{NodeType, ShapeId, StxError};
use thiserror::Error;

/// Error building or reading a trait.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraitError {
    /// The raw value had the wrong node type for this trait.
    #[error("trait `{trait_id}` applied to `{target}` expects {expected} value, found \
        {found} value")]
    ExpectedNodeType {
        /// Trait being built.
        trait_id: ShapeId,
        /// Shape or member the trait was applied to.
        target: ShapeId,
        /// Human-readable expected type.
        expected: String,
        /// Node type actually supplied.
        found: NodeType,
    },

    /// The raw value had the right type but an unusable content.
    #[error("invalid value for trait `{trait_id}` applied to `{target}`: {reason}")]
    InvalidValue {
        /// Trait being built.
        trait_id: ShapeId,
        /// Shape or member the trait was applied to.
        target: ShapeId,
        /// What was wrong with it.
        reason: String,
    },

    /// An opaque-value trait was built without a value.
    #[error("trait `{trait_id}` cannot be built without a value")]
    MissingValue {
        /// Trait being built.
        trait_id: ShapeId,
    },

    /// The generic node-recompute path was invoked on a trait that only
    /// ever carries the node it was built from.
    #[error("internal consistency failure: trait `{trait_id}` always carries its node and \
        cannot recompute it")]
    NodeCacheOnly {
        /// Trait whose recompute path was called.
        trait_id: ShapeId,
    },
}

impl TraitError {
    /// True for failures that indicate a bug in the embedding code rather
    /// than bad model data.
    pub fn is_internal(&self) -> bool {
        matches!(self, TraitError::NodeCacheOnly { .. })
    }

    pub(crate) fn expected(
        trait_id: ShapeId,
        target: &ShapeId,
        expected: &str,
        found: NodeType,
    ) -> Self {
        TraitError::ExpectedNodeType {
            trait_id,
            target: target.clone(),
            expected: expected.to_string(),
            found,
        }
    }

    pub(crate) fn invalid(trait_id: ShapeId, target: &ShapeId, reason: impl Into<String>) -> Self {
        TraitError::InvalidValue {
            trait_id,
            target: target.clone(),
            reason: reason.into(),
        }
    }
}

impl From<TraitError> for StxError {
    fn from(e: TraitError) -> Self {
        StxError::Trait(e.to_string())
    }
}
