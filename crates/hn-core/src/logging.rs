//! Logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a global `fmt` subscriber filtered by `filter`.
///
/// Returns `false` if a global subscriber was already installed, so tests and
/// embedding programs can call this more than once.
pub fn init_tracing(filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
