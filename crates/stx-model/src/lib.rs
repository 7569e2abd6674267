//! # stx-model — The Shape Graph
//!
//! A read-only graph of shapes (structures, lists, sets, maps, unions,
//! documents, enums, simple types) and the members that connect them.
//! Validators consume it through the [`ShapeIndex`] query surface and never
//! mutate it.
//!
//! ## Lifecycle
//!
//! A [`Model`] is assembled once through [`ModelBuilder`], which checks
//! that every member target resolves, and is immutable afterwards. Prelude
//! shapes (`smithy.api#String`, `smithy.api#Document`, ...) resolve from
//! every model without being added.
//!
//! ## Fixed Shape Tables
//!
//! - [`document`]: the `smithytranslate` union that spells out a document
//!   value as explicit alternatives.
//! - [`uuid_shape`]: the two-long structure a UUID is carried in.
//!
//! Both are built lazily, once per process, and shared read-only.

pub mod document;
pub mod error;
pub mod index;
pub mod kind;
pub mod model;
pub mod prelude;
pub mod shape;
pub mod uuid_shape;

pub use error::ModelError;
pub use index::ShapeIndex;
pub use kind::ShapeKind;
pub use model::{Model, ModelBuilder};
pub use shape::{MemberShape, Shape};
