//! Logging configuration for keyline.
//!
//! Logs always go to stderr so that stdout only carries parse output.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. An invalid filter
/// falls back to `warn`.
pub fn init_stderr_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the filter from `RUST_LOG` or the given default directive.
fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
