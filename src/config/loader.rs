//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of the file or defaults.

use super::models::*;
use crate::core::estimate::{ComplexityTier, SampleCount};
use crate::utils::error::{EstimatorError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default sample count
pub const ENV_SAMPLES: &str = "ESTIMATOR_SAMPLES";
/// Default complexity tier
pub const ENV_COMPLEXITY: &str = "ESTIMATOR_COMPLEXITY";
/// Progress bar reference in hours
pub const ENV_PROGRESS_REFERENCE: &str = "ESTIMATOR_PROGRESS_REFERENCE";
/// Log filter directive
pub const ENV_LOG_LEVEL: &str = "ESTIMATOR_LOG_LEVEL";

/// Load `.env` from the working directory or its parents
///
/// A missing file is fine. A file that fails to parse is a configuration
/// error: dotenvy stops at the bad line and drops everything after it.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(EstimatorError::config(format!("Failed to load .env file: {}", e))),
    }
}

/// Load a specific dotenv file, with the same rules as [`load_dotenv`]
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(EstimatorError::config(format!(
            "Failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

impl EstimatorConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(samples) = lookup(ENV_SAMPLES) {
            self.defaults.samples = samples
                .parse::<SampleCount>()
                .map_err(|e| EstimatorError::invalid_input(format!("{}: {}", ENV_SAMPLES, e)))?;
        }
        if let Some(complexity) = lookup(ENV_COMPLEXITY) {
            self.defaults.complexity = complexity
                .parse::<ComplexityTier>()
                .map_err(|e| EstimatorError::config(format!("{}: {}", ENV_COMPLEXITY, e)))?;
        }
        if let Some(reference) = lookup(ENV_PROGRESS_REFERENCE) {
            self.display.progress_reference_hours = reference.trim().parse().map_err(|e| {
                EstimatorError::config(format!("Invalid {}: {}", ENV_PROGRESS_REFERENCE, e))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
