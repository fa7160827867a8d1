//! Estimation Calculator
//!
//! Pure evaluation of a [`Selection`] against a [`CostModel`]. Every function
//! here is deterministic: identical inputs produce bit-identical output.

use std::collections::BTreeSet;
use tracing::debug;

use crate::core::estimate::types::{
    ComplexityTier, CostFormula, CostModel, Estimate, EstimateError, SampleCount, Selection,
    StepCost, StepDefinition,
};

/// Hours for a single formula
///
/// `(base + per_sample * samples) * multipliers[complexity]`
///
/// Fails rather than returning infinity when the formula's values are too
/// large for the sample count.
pub fn item_cost(
    formula: &CostFormula,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<f64, EstimateError> {
    let multiplier = formula.multipliers.get(complexity)?;
    let raw_hours = formula.base + formula.per_sample * samples.as_f64();
    let hours = raw_hours * multiplier;
    ensure_finite(hours, samples, complexity)?;
    Ok(hours)
}

fn ensure_finite(
    hours: f64,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<(), EstimateError> {
    if hours.is_finite() {
        Ok(())
    } else {
        Err(EstimateError::NonFiniteCost {
            samples,
            complexity,
        })
    }
}

/// Cost of one step plus the selected subset of its substeps
///
/// Substeps are costed in the step's declared order. Names in
/// `selected_substeps` that the step does not declare are ignored, and a
/// step without substeps ignores the selection entirely.
pub fn step_cost(
    model: &CostModel,
    step: &StepDefinition,
    selected_substeps: &BTreeSet<String>,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<StepCost, EstimateError> {
    let base_hours = item_cost(&step.formula, samples, complexity)?;
    let mut cost = StepCost::new(step.name.clone(), base_hours);

    for substep in step
        .substeps
        .iter()
        .filter(|name| selected_substeps.contains(name.as_str()))
    {
        let formula = step.substep_formula(substep, model.substep_formula());
        let hours = item_cost(formula, samples, complexity)?;
        cost.add_substep(substep.clone(), hours);
    }

    for stale in selected_substeps.iter().filter(|name| !step.has_substep(name)) {
        debug!(step = %step.name, substep = %stale, "Ignoring selection of undeclared substep");
    }

    ensure_finite(cost.total_hours, samples, complexity)?;
    Ok(cost)
}

/// Total for a selection, with a per-step breakdown in model order
///
/// Unselected steps are omitted from the breakdown. Selected names that the
/// model does not contain are ignored.
pub fn estimate_total(
    model: &CostModel,
    selection: &Selection,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<Estimate, EstimateError> {
    let no_substeps = BTreeSet::new();
    let mut estimate = Estimate::new(samples, complexity);

    for step in model
        .steps()
        .iter()
        .filter(|step| selection.is_step_selected(&step.name))
    {
        let selected = selection
            .selected_substeps(&step.name)
            .unwrap_or(&no_substeps);
        estimate.add_step(step_cost(model, step, selected, samples, complexity)?);
    }

    ensure_finite(estimate.total_hours, samples, complexity)?;

    for stale in selection.steps().filter(|name| !model.contains_step(name)) {
        debug!(step = %stale, "Ignoring selection of unknown step");
    }

    debug!(
        steps = estimate.steps.len(),
        total_hours = estimate.total_hours,
        %samples,
        %complexity,
        "Estimate computed"
    );

    Ok(estimate)
}

/// Base cost of every step in the model, as if each were selected alone
pub fn preview_steps(
    model: &CostModel,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<Vec<StepCost>, EstimateError> {
    model
        .steps()
        .iter()
        .map(|step| {
            item_cost(&step.formula, samples, complexity)
                .map(|hours| StepCost::new(step.name.clone(), hours))
        })
        .collect()
}

impl CostModel {
    /// See [`estimate_total`]
    pub fn estimate(
        &self,
        selection: &Selection,
        samples: SampleCount,
        complexity: ComplexityTier,
    ) -> Result<Estimate, EstimateError> {
        estimate_total(self, selection, samples, complexity)
    }

    /// See [`preview_steps`]
    pub fn preview(
        &self,
        samples: SampleCount,
        complexity: ComplexityTier,
    ) -> Result<Vec<StepCost>, EstimateError> {
        preview_steps(self, samples, complexity)
    }
}
