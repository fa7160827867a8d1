//! Display configuration

use super::*;
use serde::{Deserialize, Serialize};

/// How estimates are rendered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Total that fills the progress bar
    #[serde(default = "default_progress_reference_hours")]
    pub progress_reference_hours: f64,
    /// Progress bar width in characters
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
    /// Decimals for per-step hours
    #[serde(default = "default_step_precision")]
    pub step_precision: usize,
    /// Decimals for the total
    #[serde(default = "default_total_precision")]
    pub total_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress_reference_hours: default_progress_reference_hours(),
            progress_width: default_progress_width(),
            step_precision: default_step_precision(),
            total_precision: default_total_precision(),
        }
    }
}
