//! # hn-core
//!
//! Configuration, error handling, and logging setup shared by programs that
//! embed the hash name registry.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_tracing;
