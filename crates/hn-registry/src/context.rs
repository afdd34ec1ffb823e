//! Naming contexts: the vocabularies a hash algorithm can be spelled in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HashNameError;

/// Target vocabulary for a normalized hash algorithm name.
///
/// A context only selects a column of the name table; it never appears in the
/// normalized output itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashContext {
    /// Legacy platform crypto naming (`sha256`).
    #[default]
    Node,

    /// Browser-style subtle crypto naming (`SHA-256`).
    WebCrypto,

    /// JWK RSA PKCS#1 v1.5 signature naming (`RS256`).
    JwkRsa,

    /// JWK RSA-PSS signature naming (`PS256`).
    JwkRsaPss,

    /// JWK RSA-OAEP key wrap naming (`RSA-OAEP-256`).
    JwkRsaOaep,

    /// JWK HMAC naming (`HS256`).
    JwkHmac,
}

impl HashContext {
    /// All contexts, in table column order.
    pub const ALL: [Self; 6] = [
        Self::Node,
        Self::WebCrypto,
        Self::JwkRsa,
        Self::JwkRsaPss,
        Self::JwkRsaOaep,
        Self::JwkHmac,
    ];

    /// Returns the context name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::WebCrypto => "web-crypto",
            Self::JwkRsa => "jwk-rsa",
            Self::JwkRsaPss => "jwk-rsa-pss",
            Self::JwkRsaOaep => "jwk-rsa-oaep",
            Self::JwkHmac => "jwk-hmac",
        }
    }

    /// Returns whether this is one of the JWK vocabularies.
    #[must_use]
    pub const fn is_jwk(self) -> bool {
        matches!(
            self,
            Self::JwkRsa | Self::JwkRsaPss | Self::JwkRsaOaep | Self::JwkHmac
        )
    }
}

impl fmt::Display for HashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashContext {
    type Err = HashNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|context| context.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HashNameError::UnknownContext(s.to_string()))
    }
}
