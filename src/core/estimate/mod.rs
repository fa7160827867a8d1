//! Test Effort Estimation
//!
//! The cost model (steps, substeps and their formulas) and the pure
//! calculator that turns a selection, a sample count and a complexity tier
//! into labor hours.
//!
//! Every cost follows one formula:
//!
//! ```text
//! hours = (base + per_sample * samples) * multipliers[complexity]
//! ```
//!
//! A step's cost is its own formula plus one evaluation of the substep
//! formula per selected substep; the total is the sum over selected steps
//! in model order.

pub mod calculator;
pub mod catalog;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{estimate_total, item_cost, preview_steps, step_cost};
pub use catalog::{ATP_SUBSTEPS, EXECUTION_SUBSTEPS, default_cost_model};
pub use types::{
    ComplexityMultipliers, ComplexityTier, CostFormula, CostModel, Estimate, EstimateError,
    SampleCount, Selection, StepCost, StepDefinition, SubstepCost,
};
pub use utils::{DEFAULT_PROGRESS_REFERENCE_HOURS, format_hours, progress_bar, progress_fraction};
