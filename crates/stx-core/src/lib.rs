//! # stx-core — Foundational Types for stx
//!
//! This crate is the leaf of the stx workspace. It defines the value model
//! that every trait payload and every default value is expressed in, plus the
//! identifiers and diagnostics shared by the rest of the stack.
//!
//! ## Key Design Principles
//!
//! 1. **`Node` is immutable.** Once a [`Node`] is built there is no way to
//!    mutate it in place. Equality and emptiness are structural.
//!
//! 2. **Numbers keep their shape.** [`Number`] distinguishes integers from
//!    floating-point values so that validation can reject `1.5` where a
//!    `Long` is expected.
//!
//! 3. **Objects keep insertion order.** [`ObjectNode`] re-serializes its
//!    entries in the order they were inserted, while equality ignores order.
//!
//! 4. **Validated identifiers.** [`ShapeId`] can only be produced from a
//!    well-formed `namespace#Name$member` string, or from a literal via
//!    [`ShapeId::from_static`] for compile-time constants.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stx-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod node;
pub mod shape_id;
pub mod source;

pub use error::{CoreError, NodeError, StxError};
pub use node::{ArrayNode, Node, NodeType, Number, ObjectNode, ObjectNodeBuilder};
pub use shape_id::ShapeId;
pub use source::SourceLocation;
