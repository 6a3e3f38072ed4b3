//! Logging and tracing setup for the Backend API.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Default filter directives when RUST_LOG is unset.
fn default_directives(debug: bool) -> &'static str {
    if debug {
        "backend_api=debug,tower_http=debug"
    } else {
        "backend_api=info,tower_http=info"
    }
}

/// Initialize the tracing subscriber.
///
/// Reads log level from RUST_LOG environment variable, falling back to
/// [`default_directives`]. Debug mode always uses the human-readable
/// formatter; otherwise `logging.json` picks JSON output.
pub fn init(config: &Config) {
    let debug = config.server.debug;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.json && !debug {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Initialize tracing for tests (human-readable format, no JSON).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("backend_api=debug")
        .try_init();
}
