//! Conformance tests for hash name normalization.
//!
//! These tests exercise the public API only, against the standard table.

mod descriptors;
mod table;
