//! # stx-traits — Trait Kinds and Providers
//!
//! A trait is a named piece of metadata attached to exactly one shape or
//! member. Every trait carries a [`stx_core::Node`] payload and can be read
//! back through [`TraitValue::to_node`].
//!
//! ## Trait Kinds
//!
//! The set of kinds is closed: [`Trait`] is a tagged enum and consumers
//! dispatch with `match`. Adding a kind means adding a variant and a
//! [`Provider`], which makes every exhaustive `match` in the workspace point
//! at the new case.
//!
//! | Kind | Payload |
//! |------|---------|
//! | [`ConstTrait`], [`DynamicTrait`] | any node, unchanged |
//! | [`OpenApiExtensionsTrait`] | object node, unchanged |
//! | [`ContentTypeTrait`], [`ErrorMessageTrait`] | string |
//! | [`DefaultValueTrait`] | any node, stored as given and never recomputed |
//! | [`NullableTrait`], [`RequiredTrait`] | annotation (object) |
//! | [`RangeTrait`], [`LengthTrait`] | numeric bounds |
//! | [`PatternTrait`], [`EnumValueTrait`] | regex, string or integer |
//!
//! ## Providers
//!
//! A model loader builds traits from raw values through a [`TraitRegistry`],
//! a table from trait id to [`Provider`]. Providers are the trust boundary
//! for trait values: a value of the wrong shape is rejected with a
//! [`TraitError`] before the trait exists.
//!
//! ## Crate Policy
//!
//! - Depends only on `stx-core` internally.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod annotation;
pub mod constraint;
pub mod default_value;
pub mod error;
pub mod opaque;
pub mod provider;
pub mod string_trait;
pub mod trait_map;
pub mod value;

pub use annotation::{NullableTrait, RequiredTrait};
pub use constraint::{EnumValueTrait, LengthTrait, PatternTrait, RangeTrait};
pub use default_value::DefaultValueTrait;
pub use error::TraitError;
pub use opaque::{ConstTrait, ConstTraitBuilder, DynamicTrait, OpenApiExtensionsTrait};
pub use provider::{CreateTraitFn, Provider, TraitRegistry};
pub use string_trait::{ContentTypeTrait, ErrorMessageTrait};
pub use trait_map::TraitMap;
pub use value::{Trait, TraitValue};
