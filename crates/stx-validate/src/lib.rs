//! # stx-validate — Model Validation
//!
//! Checks that trait values agree with the shapes they decorate and reports
//! disagreements as [`ValidationEvent`]s. Violations are never errors: a
//! validator always runs to completion and returns every event it found.
//!
//! ## Components
//!
//! - [`node_check`]: pure recursive check of a [`stx_core::Node`] against a
//!   shape, returning [`Mismatch`]es with a path to each offending value.
//! - [`DefaultValueTraitValidator`]: runs the node check over every
//!   `@defaultValue` in a model, with the emptiness rules for collection and
//!   document targets.
//! - [`Validator`] and [`validate_model`]: the seam validators plug into and
//!   the driver that runs a set of them with deterministic event order.
//! - [`ValidatorConfig`]: event id, message context and severity, loadable
//!   from YAML or JSON.
//!
//! ## Concurrency
//!
//! Validators are `Send + Sync` and keep no state between runs, so
//! independent passes over the same model may run on separate threads.

pub mod config;
pub mod default_value;
pub mod event;
pub mod node_check;
pub mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use default_value::DefaultValueTraitValidator;
pub use event::{Severity, ValidationEvent};
pub use node_check::{check_node, Mismatch};
pub use validator::{validate_model, Validator};
