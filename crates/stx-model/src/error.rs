//! Model assembly errors.

use stx_core::{CoreError, ShapeId, StxError};
use thiserror::Error;

/// Error assembling a [`crate::Model`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Two shapes were added with the same id.
    #[error("duplicate shape `{0}`")]
    DuplicateShape(ShapeId),

    /// A shape declared the same member name twice.
    #[error("duplicate member `{member}` on `{shape}`")]
    DuplicateMember {
        /// Containing shape.
        shape: ShapeId,
        /// Repeated member name.
        member: String,
    },

    /// A member targets a shape that is neither in the model nor the prelude.
    #[error("member `{member}` targets unknown shape `{target}`")]
    UnresolvedTarget {
        /// Offending member.
        member: ShapeId,
        /// Missing target.
        target: ShapeId,
    },

    /// A shape's members do not fit its kind (e.g. a list without `member`).
    #[error("invalid shape `{id}`: {reason}")]
    InvalidShape {
        /// Offending shape.
        id: ShapeId,
        /// What is wrong with it.
        reason: String,
    },

    /// A member name was not a valid identifier.
    #[error(transparent)]
    Identifier(#[from] CoreError),
}

impl From<ModelError> for StxError {
    fn from(e: ModelError) -> Self {
        StxError::Model(e.to_string())
    }
}
