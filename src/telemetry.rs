//! Tracing subscriber bootstrap.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Installing twice is harmless: the second attempt is reported as a
/// warning through the already-installed subscriber.
pub fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
