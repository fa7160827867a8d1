//! Test fixtures and model factories
//!
//! All factories build real, validated models.

use test_estimator::{ComplexityMultipliers, CostFormula, CostModel, StepDefinition};

/// Factory for cost models used across suites
pub struct ModelFactory;

impl ModelFactory {
    /// `{Easy: 1.0, Medium: 1.2, High: 1.5}`
    pub fn complex() -> ComplexityMultipliers {
        ComplexityMultipliers::scaled(1.0, 1.2, 1.5)
    }

    /// Substep formula of the worked examples: 0.5 h per sample, complexity-neutral
    pub fn flat_substep_formula() -> CostFormula {
        CostFormula::new(0.0, 0.5, ComplexityMultipliers::uniform())
    }

    /// NDA, Creation of UUT and Test Execution with its six activities
    pub fn scenario_model() -> CostModel {
        CostModel::new(
            vec![
                StepDefinition::new("NDA", CostFormula::fixed(1.0)),
                StepDefinition::new("Creation of UUT", CostFormula::new(2.0, 1.0, Self::complex())),
                StepDefinition::new("Test Execution", CostFormula::new(2.0, 0.0, Self::complex()))
                    .with_substeps(test_estimator::core::estimate::EXECUTION_SUBSTEPS),
            ],
            Self::flat_substep_formula(),
        )
        .expect("scenario model is valid")
    }

    /// YAML document describing `scenario_model`
    pub fn scenario_yaml() -> &'static str {
        r#"
defaults:
  samples: 4
  complexity: Medium
model:
  substep_formula:
    base: 0.0
    per_sample: 0.5
    multipliers: { Easy: 1.0, Medium: 1.0, High: 1.0 }
  steps:
    - name: NDA
      formula:
        base: 1.0
        per_sample: 0.0
        multipliers: { Easy: 1.0, Medium: 1.0, High: 1.0 }
    - name: Creation of UUT
      formula:
        base: 2.0
        per_sample: 1.0
        multipliers: { Easy: 1.0, Medium: 1.2, High: 1.5 }
    - name: Test Execution
      formula:
        base: 2.0
        per_sample: 0.0
        multipliers: { Easy: 1.0, Medium: 1.2, High: 1.5 }
      substeps:
        - Thermal Cycling/Thermal Shock
        - Vibration
        - Fluid Susceptibility
        - Salt Fog
        - Seal Integrity
        - Discontinuity Monitoring System
"#
    }
}
