//! The canonical hash name table.
//!
//! Spellings are reproduced exactly as each vocabulary defines them; the
//! registry folds case and hyphens only when building its alias index.

use crate::algorithm::HashAlgorithm;
use crate::context::HashContext;

/// Spellings of one algorithm, one optional column per context.
///
/// An absent column means the algorithm is unsupported in that context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spellings {
    /// Legacy platform crypto spelling.
    pub node: Option<&'static str>,
    /// Browser-style subtle crypto spelling.
    pub web_crypto: Option<&'static str>,
    /// JWK RSA signature spelling.
    pub jwk_rsa: Option<&'static str>,
    /// JWK RSA-PSS signature spelling.
    pub jwk_rsa_pss: Option<&'static str>,
    /// JWK RSA-OAEP key wrap spelling.
    pub jwk_rsa_oaep: Option<&'static str>,
    /// JWK HMAC spelling.
    pub jwk_hmac: Option<&'static str>,
}

impl Spellings {
    /// Returns the spelling for a context, if one is defined.
    #[must_use]
    pub const fn get(&self, context: HashContext) -> Option<&'static str> {
        match context {
            HashContext::Node => self.node,
            HashContext::WebCrypto => self.web_crypto,
            HashContext::JwkRsa => self.jwk_rsa,
            HashContext::JwkRsaPss => self.jwk_rsa_pss,
            HashContext::JwkRsaOaep => self.jwk_rsa_oaep,
            HashContext::JwkHmac => self.jwk_hmac,
        }
    }

    /// Iterates over the defined spellings in [`HashContext::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HashContext, &'static str)> + '_ {
        HashContext::ALL
            .into_iter()
            .filter_map(move |context| self.get(context).map(|spelling| (context, spelling)))
    }
}

/// One row of the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashNameEntry {
    /// The canonical algorithm this row describes.
    pub algorithm: HashAlgorithm,
    /// Its spelling in each context.
    pub spellings: Spellings,
}

const fn full_spellings(
    node: &'static str,
    web_crypto: &'static str,
    jwk_rsa: &'static str,
    jwk_rsa_pss: &'static str,
    jwk_rsa_oaep: &'static str,
    jwk_hmac: &'static str,
) -> Spellings {
    Spellings {
        node: Some(node),
        web_crypto: Some(web_crypto),
        jwk_rsa: Some(jwk_rsa),
        jwk_rsa_pss: Some(jwk_rsa_pss),
        jwk_rsa_oaep: Some(jwk_rsa_oaep),
        jwk_hmac: Some(jwk_hmac),
    }
}

pub(crate) const SHA1: Spellings = full_spellings("sha1", "SHA-1", "RS1", "PS1", "RSA-OAEP", "HS1");

pub(crate) const SHA224: Spellings = full_spellings(
    "sha224",
    "SHA-224",
    "RS224",
    "PS224",
    "RSA-OAEP-224",
    "HS224",
);

pub(crate) const SHA256: Spellings = full_spellings(
    "sha256",
    "SHA-256",
    "RS256",
    "PS256",
    "RSA-OAEP-256",
    "HS256",
);

pub(crate) const SHA384: Spellings = full_spellings(
    "sha384",
    "SHA-384",
    "RS384",
    "PS384",
    "RSA-OAEP-384",
    "HS384",
);

pub(crate) const SHA512: Spellings = full_spellings(
    "sha512",
    "SHA-512",
    "RS512",
    "PS512",
    "RSA-OAEP-512",
    "HS512",
);

// No JWK vocabulary defines RIPEMD-160.
pub(crate) const RIPEMD160: Spellings = Spellings {
    node: Some("ripemd160"),
    web_crypto: Some("RIPEMD-160"),
    jwk_rsa: None,
    jwk_rsa_pss: None,
    jwk_rsa_oaep: None,
    jwk_hmac: None,
};

/// The standard table, in alias registration order.
pub static HASH_NAMES: &[HashNameEntry] = &[
    HashNameEntry {
        algorithm: HashAlgorithm::Sha1,
        spellings: SHA1,
    },
    HashNameEntry {
        algorithm: HashAlgorithm::Sha224,
        spellings: SHA224,
    },
    HashNameEntry {
        algorithm: HashAlgorithm::Sha256,
        spellings: SHA256,
    },
    HashNameEntry {
        algorithm: HashAlgorithm::Sha384,
        spellings: SHA384,
    },
    HashNameEntry {
        algorithm: HashAlgorithm::Sha512,
        spellings: SHA512,
    },
    HashNameEntry {
        algorithm: HashAlgorithm::Ripemd160,
        spellings: RIPEMD160,
    },
];
