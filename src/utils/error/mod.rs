//! Error handling for the estimator
//!
//! Crate-level error type wrapping cost model errors together with the
//! configuration and IO failures of the surrounding tool.

pub mod helpers;
pub mod types;

pub use helpers::{EXIT_CONFIG, EXIT_FAILURE, EXIT_USAGE};
pub use types::{EstimatorError, Result};
