//! Configuration management.
//!
//! Configuration is supplied by the embedding program, either as a value or
//! as JSON. Nothing is read from the environment.

use hn_registry::{HASH_NAMES, HashNameRegistry, RegistryConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `hn_registry=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from JSON. Missing sections take their defaults.
    ///
    /// ## Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown context.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a registry over the standard table with this configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the table violates the configured alias policy.
    pub fn build_registry(&self) -> Result<HashNameRegistry> {
        let registry = HashNameRegistry::with_config(HASH_NAMES, &self.registry)?;
        tracing::debug!(
            aliases = registry.alias_count(),
            default_context = %self.registry.default_context,
            "Configured hash name registry built"
        );
        Ok(registry)
    }
}
