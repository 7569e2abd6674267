//! Validator configuration.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```yaml
//! event_id: DefaultValueTrait
//! starting_context: Error validating @defaultValue trait
//! severity: ERROR
//! ```

use serde::{Deserialize, Serialize};
use stx_core::StxError;
use thiserror::Error;

use crate::event::Severity;

/// Settings for [`crate::DefaultValueTraitValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Id stamped on every emitted event.
    pub event_id: String,
    /// Prefix of messages produced by the node check.
    pub starting_context: String,
    /// Severity of every emitted event.
    pub severity: Severity,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            event_id: "DefaultValueTrait".to_string(),
            starting_context: "Error validating @defaultValue trait".to_string(),
            severity: Severity::Error,
        }
    }
}

impl ValidatorConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML or unknown keys, and
    /// [`ConfigError::EmptyEventId`] if `event_id` is blank.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(input).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        config.checked()
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown keys, and
    /// [`ConfigError::EmptyEventId`] if `event_id` is blank.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.checked()
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.event_id.trim().is_empty() {
            return Err(ConfigError::EmptyEventId);
        }
        Ok(self)
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid YAML config: {0}")]
    Yaml(String),
    #[error("invalid JSON config: {0}")]
    Json(String),
    #[error("event_id must not be empty")]
    EmptyEventId,
}

impl From<ConfigError> for StxError {
    fn from(e: ConfigError) -> Self {
        StxError::Config(e.to_string())
    }
}
