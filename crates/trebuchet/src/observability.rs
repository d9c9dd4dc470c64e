//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "error";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the narrative on stdout.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
