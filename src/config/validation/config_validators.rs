//! Configuration validators
//!
//! Validation implementations for the estimator configuration sections.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Upper bound on displayed decimals
const MAX_PRECISION: usize = 6;

impl Validate for EstimatorConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating estimator configuration");

        self.model.validate().map_err(|e| format!("Model: {}", e))?;
        self.defaults.validate()?;
        self.display.validate()?;
        self.logging.validate()?;

        debug!(steps = self.model.len(), "Estimator configuration validation completed");
        Ok(())
    }
}

impl Validate for DefaultsConfig {
    fn validate(&self) -> Result<(), String> {
        // Both fields are range-checked by their types on deserialization
        Ok(())
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.progress_reference_hours.is_finite() || self.progress_reference_hours <= 0.0 {
            return Err(format!(
                "Progress reference must be a positive number of hours, got {}",
                self.progress_reference_hours
            ));
        }

        if self.progress_width == 0 {
            return Err("Progress bar width must be greater than 0".to_string());
        }

        if self.step_precision > MAX_PRECISION || self.total_precision > MAX_PRECISION {
            return Err(format!(
                "Display precision cannot exceed {} decimals",
                MAX_PRECISION
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
