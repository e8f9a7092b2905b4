//! Structured logging setup.
//!
//! Library crates only emit `tracing` events when their `tracing` feature is
//! on; installing a subscriber is left to the application. Hosts that want
//! machine-readable output can call [`init_json`] once at startup
//! (requires the `tracing-json` feature). Filtering follows `RUST_LOG`,
//! defaulting to `info`.

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global JSON subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
