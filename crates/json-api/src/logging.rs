//! Logging subscriber initialisation.

use tracing_subscriber::EnvFilter;

use crate::config::logging::{LogFormat, LoggingConfig};

/// Initialises the global tracing subscriber from logging settings.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub(crate) fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_target(true)
            .with_env_filter(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_target(true)
            .with_env_filter(filter)
            .init(),
    }
}
