//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::context::HashContext;

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Context used when a caller does not name one.
    pub default_context: HashContext,
    /// Fail the build when two algorithms share a folded alias.
    pub reject_alias_collisions: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_context: HashContext::Node,
            reject_alias_collisions: true,
        }
    }
}
