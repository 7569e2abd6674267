//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across stx. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Construction errors carry the offending input and what was expected.
//! - Validation violations are never errors. They are reported as
//!   validation events by `stx-validate`.
//! - Downstream crates convert their own error enums into [`StxError`]
//!   so embedders can hold a single error type.

use thiserror::Error;

use crate::node::NodeType;

/// Top-level error type for stx.
#[derive(Error, Debug)]
pub enum StxError {
    /// Identifier or value-model failure.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A trait could not be constructed from its raw value.
    #[error("trait error: {0}")]
    Trait(String),

    /// The shape model is inconsistent.
    #[error("model error: {0}")]
    Model(String),

    /// Validator configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// Error produced by the value model and identifier parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A shape identifier did not follow `namespace#Name$member`.
    #[error("invalid shape id '{input}': {reason}")]
    InvalidShapeId {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A node had the wrong type.
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Error from a checked narrowing accessor on [`crate::Node`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node was not of the expected type.
    #[error("expected {expected} node, found {found} node")]
    ExpectedType {
        /// Type the caller asked for.
        expected: NodeType,
        /// Type actually present.
        found: NodeType,
    },
}
