//! # test-estimator
//!
//! Labor-hour estimation for test-engineering projects.
//!
//! A [`CostModel`] lists the process steps of a test campaign (planning,
//! ATP checks, environmental test execution, reporting, ...) with a cost
//! formula each. Given a [`Selection`] of steps and substeps, a
//! [`SampleCount`] and a [`ComplexityTier`], the calculator returns the total
//! hours and a per-step breakdown.
//!
//! ## Quick Start
//!
//! ```rust
//! use test_estimator::{ComplexityTier, CostModel, SampleCount, Selection};
//!
//! let model = CostModel::default();
//! let selection = Selection::new()
//!     .with_step("Creation of UUT")
//!     .with_substep("Test Execution", "Vibration");
//!
//! let estimate = model.estimate(&selection, SampleCount::new(3)?, ComplexityTier::High)?;
//!
//! assert_eq!(estimate.steps.len(), 2);
//! assert!(estimate.total_hours > 0.0);
//! # Ok::<(), test_estimator::EstimateError>(())
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{EstimatorError, Result};

pub use core::estimate::{
    ComplexityMultipliers, ComplexityTier, CostFormula, CostModel, Estimate, EstimateError,
    SampleCount, Selection, StepCost, StepDefinition, SubstepCost, default_cost_model,
    estimate_total, item_cost, preview_steps, step_cost,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Estimator build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Version, build time and git hash of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
