//! Logging configuration
//!
//! Stdout-only tracing setup. Level defaults to `info`; set `RUST_LOG` to
//! raise or lower it (e.g. `RUST_LOG=basketboard=debug`).

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
