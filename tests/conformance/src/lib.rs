//! Conformance tests for hash name normalization.
//!
//! The suite lives under `tests/`; this crate has no library surface.

#![forbid(unsafe_code)]
