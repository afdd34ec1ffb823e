//! Workspace error type.

use hn_registry::{HashNameError, RegistryError};
use thiserror::Error;

/// Result type alias using the workspace error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A hash algorithm name could not be normalized.
    #[error(transparent)]
    HashName(#[from] HashNameError),

    /// The name table failed validation.
    #[error("hash name table error: {0}")]
    Registry(#[from] RegistryError),
}

impl Error {
    /// Returns whether the caller supplied the bad input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::HashName(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
