//! Logging setup
//!
//! Installs the global `tracing` subscriber. Logs go to stderr so that
//! stdout only carries estimator output.

use crate::config::LoggingConfig;
use crate::utils::error::{EstimatorError, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter; `RUST_LOG` takes precedence over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        EstimatorError::logging(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Initialize the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| EstimatorError::logging(format!("Failed to install subscriber: {}", e)))
}
