//! Logging initialization with environment-based formatters.
//!
//! Production gets structured JSON for log aggregation; sandbox gets
//! human-readable ANSI output. Filtering follows `RUST_LOG` when set and
//! defaults to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Install the global subscriber for the detected environment.
///
/// Call once at process startup, before the first computation; a second
/// call panics (the global subscriber is already set).
pub fn init_logging() {
    init_logging_for(Environment::detect());
}

/// Install the global subscriber for an explicit environment.
pub fn init_logging_for(env: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match env {
        Environment::Production => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .init(),
        Environment::Sandbox => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init(),
    }
}
