//! Error types for hash name resolution.

use thiserror::Error;

use crate::context::HashContext;

/// Error type for normalization queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashNameError {
    /// Input is absent or matches no known algorithm or alias.
    ///
    /// Carries the caller's original, un-normalized input.
    #[error("Invalid Hash Algorithm: {0}")]
    InvalidAlgorithm(String),

    /// Algorithm is known but has no spelling in the requested context.
    #[error("hash algorithm '{algorithm}' is not supported in the {context} context")]
    UnsupportedInContext {
        /// Canonical name of the resolved algorithm.
        algorithm: &'static str,
        /// The context that was requested.
        context: HashContext,
    },

    /// Naming context name is not recognized.
    #[error("unknown hash naming context: {0}")]
    UnknownContext(String),
}

/// Error type for building a registry from a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two different algorithms fold to the same alias.
    #[error("alias '{alias}' of '{rejected}' is already registered for '{existing}'")]
    AliasCollision {
        /// The folded alias.
        alias: String,
        /// Algorithm that registered the alias first.
        existing: &'static str,
        /// Algorithm whose spelling was rejected.
        rejected: &'static str,
    },

    /// The same canonical algorithm appears in more than one table row.
    #[error("hash algorithm '{0}' appears more than once in the table")]
    DuplicateAlgorithm(&'static str),
}
