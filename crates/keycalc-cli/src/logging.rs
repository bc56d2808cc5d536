//! Log subscriber setup
//!
//! Logs go to stderr so that stdout only ever carries results.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_debug())
        .try_init();
}
