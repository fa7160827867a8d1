//! Error types for the estimator

use crate::core::estimate::EstimateError;
use thiserror::Error;

/// Result type alias for the estimator
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Main error type for the estimator
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cost model and estimation errors
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// Invalid command-line usage
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
