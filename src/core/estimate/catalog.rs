//! Built-in step catalog
//!
//! The default test-engineering process: fifteen steps in execution order,
//! with ATP inspections and environmental test activities as substeps.

use crate::core::estimate::types::{ComplexityMultipliers, CostFormula, CostModel, StepDefinition};

/// Environmental test activities run during Test Execution
pub const EXECUTION_SUBSTEPS: [&str; 6] = [
    "Thermal Cycling/Thermal Shock",
    "Vibration",
    "Fluid Susceptibility",
    "Salt Fog",
    "Seal Integrity",
    "Discontinuity Monitoring System",
];

/// Acceptance Test Procedure checks, before and after execution
pub const ATP_SUBSTEPS: [&str; 6] = [
    "Visual Inspection",
    "Partial Discharge",
    "Insulation Resistance",
    "Dielectric Withstanding Voltage",
    "Electrical Bonding Resistance",
    "Tear Down Inspection",
];

/// +20% for Medium, +50% for High
pub fn complex_multipliers() -> ComplexityMultipliers {
    ComplexityMultipliers::scaled(1.0, 1.2, 1.5)
}

/// Shared formula for every substep: half an hour per sample
pub fn default_substep_formula() -> CostFormula {
    CostFormula::new(0.0, 0.5, ComplexityMultipliers::scaled(1.0, 1.25, 1.5))
}

fn step(name: &str, base: f64, per_sample: f64, multipliers: ComplexityMultipliers) -> StepDefinition {
    StepDefinition::new(name, CostFormula::new(base, per_sample, multipliers))
}

/// Default cost model
pub fn default_cost_model() -> CostModel {
    let plain = ComplexityMultipliers::uniform;
    let complex = complex_multipliers;

    let steps = vec![
        step("Conformity Delegation", 2.0, 0.0, plain()),
        step("Creation of UUT", 2.0, 1.0, complex()),
        step("Creation of Test Plan", 4.0, 0.0, complex()),
        step("Test Facility Selection", 2.0, 0.0, plain()),
        step("NDA", 1.0, 0.0, plain()),
        step("Subcontract", 2.0, 0.0, plain()),
        step("TRR 1", 3.0, 0.0, plain()),
        step("UUT Conformity", 1.0, 0.5, plain()),
        step("Pre-ATP", 1.0, 0.0, complex()).with_substeps(ATP_SUBSTEPS),
        step("Test Set-up", 4.0, 0.0, complex()),
        step("TRR 2", 2.0, 0.0, plain()),
        step("Test Execution", 2.0, 0.0, complex()).with_substeps(EXECUTION_SUBSTEPS),
        step("Post-ATP", 1.0, 0.0, complex()).with_substeps(ATP_SUBSTEPS),
        step("Test Reporting", 4.0, 1.0, plain()),
        step("Archiving", 1.0, 0.0, plain()),
    ];

    // Static table; `test_default_model_is_valid` keeps this from firing
    CostModel::new(steps, default_substep_formula()).expect("built-in cost model is valid")
}

impl Default for CostModel {
    fn default() -> Self {
        default_cost_model()
    }
}
