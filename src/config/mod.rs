//! Configuration management for the estimator
//!
//! This module handles loading, validation, and management of the estimator
//! configuration, including the cost model itself.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ENV_COMPLEXITY, ENV_LOG_LEVEL, ENV_PROGRESS_REFERENCE, ENV_SAMPLES, load_dotenv,
    load_dotenv_from,
};
pub use models::*;
pub use validation::Validate;

use crate::core::estimate::CostModel;
use crate::utils::error::{EstimatorError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the estimator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Estimator configuration
    pub estimator: EstimatorConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| EstimatorError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        let estimator: EstimatorConfig = if content.trim().is_empty() {
            EstimatorConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| EstimatorError::Config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { estimator };
        config.validate()?;
        Ok(config)
    }

    /// File if given, else defaults; process environment overrides on top
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading overrides from `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.estimator.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the cost model
    pub fn model(&self) -> &CostModel {
        &self.estimator.model
    }

    /// Get default project parameters
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.estimator.defaults
    }

    /// Get display configuration
    pub fn display(&self) -> &DisplayConfig {
        &self.estimator.display
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.estimator.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.estimator
            .validate()
            .map_err(|e| EstimatorError::Config(format!("Estimator config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.estimator).map_err(|e| {
            EstimatorError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.estimator).map_err(|e| {
            EstimatorError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
