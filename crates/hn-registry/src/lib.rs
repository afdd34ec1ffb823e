//! # hn-registry
//!
//! Name normalization for hash algorithms.
//!
//! The same digest goes by different tokens depending on who is asking: the
//! legacy platform crypto API says `sha256`, subtle crypto says `SHA-256`,
//! and JWK algorithm identifiers say `RS256`, `PS256`, `RSA-OAEP-256` or
//! `HS256`. This crate accepts any of those spellings, in any case, and
//! returns the spelling a given [`HashContext`] expects.
//!
//! ```
//! use hn_registry::{HashContext, normalize_hash_name};
//!
//! assert_eq!(normalize_hash_name("rs256", HashContext::WebCrypto), Ok("SHA-256"));
//! ```
//!
//! ## Supported algorithms
//!
//! SHA-1, SHA-224, SHA-256, SHA-384, SHA-512 and RIPEMD-160. RIPEMD-160 has
//! no JWK spellings.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod table;

pub use algorithm::HashAlgorithm;
pub use config::RegistryConfig;
pub use context::HashContext;
pub use descriptor::{AlgorithmDescriptor, AlgorithmRef, SubtleAlgorithm};
pub use error::{HashNameError, RegistryError};
pub use registry::{HashNameRegistry, normalize_hash_name, registry, resolve_hash_name};
pub use table::{HASH_NAMES, HashNameEntry, Spellings};
