//! Configuration data models
//!
//! This module defines all configuration structures used by the estimator.

pub mod defaults;
pub mod display;
pub mod estimator;
pub mod logging;

// Re-export all configuration types
pub use defaults::*;
pub use display::*;
pub use estimator::*;
pub use logging::*;

/// Default progress bar reference in hours
pub fn default_progress_reference_hours() -> f64 {
    crate::core::estimate::DEFAULT_PROGRESS_REFERENCE_HOURS
}

/// Decimals shown next to each step
pub fn default_step_precision() -> usize {
    1
}

/// Decimals shown for the total
pub fn default_total_precision() -> usize {
    2
}

/// Progress bar width in characters
pub fn default_progress_width() -> usize {
    40
}

/// Default log filter
pub fn default_log_level() -> String {
    "warn".to_string()
}
