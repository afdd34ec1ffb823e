//! Canonical hash algorithm definitions.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::context::HashContext;
use crate::error::HashNameError;
use crate::table::{self, Spellings};

/// The fixed set of digest algorithms the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// RIPEMD-160.
    Ripemd160,
}

impl HashAlgorithm {
    /// All algorithms, in table order.
    pub const ALL: [Self; 6] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Ripemd160,
    ];

    /// Returns the lowercase canonical key.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Ripemd160 => "ripemd160",
        }
    }

    /// Returns the digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Returns the spellings of this algorithm in the standard table.
    #[must_use]
    pub const fn spellings(self) -> Spellings {
        match self {
            Self::Sha1 => table::SHA1,
            Self::Sha224 => table::SHA224,
            Self::Sha256 => table::SHA256,
            Self::Sha384 => table::SHA384,
            Self::Sha512 => table::SHA512,
            Self::Ripemd160 => table::RIPEMD160,
        }
    }

    /// Returns the spelling of this algorithm in a naming context.
    ///
    /// ## Errors
    ///
    /// Returns [`HashNameError::UnsupportedInContext`] if the context has no
    /// spelling for this algorithm.
    pub fn spelling(self, context: HashContext) -> Result<&'static str, HashNameError> {
        self.spellings()
            .get(context)
            .ok_or(HashNameError::UnsupportedInContext {
                algorithm: self.canonical_name(),
                context,
            })
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Parses any known alias, in any context and any case.
impl FromStr for HashAlgorithm {
    type Err = HashNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::resolve_hash_name(s)
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
