//! Property tests for cost evaluation
//!
//! Uses proptest to check the calculator over arbitrary formulas, sample
//! counts and selections.

use proptest::prelude::*;
use test_estimator::{
    ComplexityMultipliers, ComplexityTier, CostFormula, CostModel, SampleCount, Selection,
    item_cost,
};

fn arb_tier() -> impl Strategy<Value = ComplexityTier> {
    prop_oneof![
        Just(ComplexityTier::Easy),
        Just(ComplexityTier::Medium),
        Just(ComplexityTier::High),
    ]
}

/// Multipliers that never decrease from Easy to High
fn arb_monotone_multipliers() -> impl Strategy<Value = ComplexityMultipliers> {
    (0.1f64..3.0, 0.0f64..1.0, 0.0f64..1.0)
        .prop_map(|(easy, medium_step, high_step)| {
            let medium = easy + medium_step;
            ComplexityMultipliers::scaled(easy, medium, medium + high_step)
        })
}

fn arb_formula() -> impl Strategy<Value = CostFormula> {
    (0.0f64..50.0, 0.0f64..10.0, arb_monotone_multipliers())
        .prop_map(|(base, per_sample, multipliers)| CostFormula::new(base, per_sample, multipliers))
}

fn arb_samples() -> impl Strategy<Value = SampleCount> {
    (1i64..500).prop_map(|n| SampleCount::new(n).unwrap())
}

/// Random subset of the built-in catalog's steps and substeps
fn arb_selection() -> impl Strategy<Value = Selection> {
    let model = CostModel::default();
    let picks: Vec<(String, Vec<String>)> = model
        .steps()
        .iter()
        .map(|step| (step.name.clone(), step.substeps.clone()))
        .collect();

    prop::collection::vec((any::<bool>(), prop::collection::vec(any::<bool>(), 6)), picks.len())
        .prop_map(move |flags| {
            let mut selection = Selection::new();
            for ((step, substeps), (pick_step, pick_substeps)) in picks.iter().zip(flags) {
                if !pick_step {
                    continue;
                }
                selection.select_step(step.clone());
                for (substep, pick) in substeps.iter().zip(pick_substeps) {
                    if pick {
                        selection.select_substep(step.clone(), substep.clone());
                    }
                }
            }
            selection
        })
}

proptest! {
    /// Raising the tier never lowers the cost of a formula
    #[test]
    fn prop_cost_monotone_in_complexity(formula in arb_formula(), samples in arb_samples()) {
        let easy = item_cost(&formula, samples, ComplexityTier::Easy).unwrap();
        let medium = item_cost(&formula, samples, ComplexityTier::Medium).unwrap();
        let high = item_cost(&formula, samples, ComplexityTier::High).unwrap();

        prop_assert!(easy <= medium);
        prop_assert!(medium <= high);
    }

    /// More samples cost strictly more when the formula charges per sample
    #[test]
    fn prop_cost_strictly_increasing_in_samples(
        formula in arb_formula(),
        n in 1i64..499,
        tier in arb_tier(),
    ) {
        prop_assume!(formula.per_sample > 0.0);
        let fewer = item_cost(&formula, SampleCount::new(n).unwrap(), tier).unwrap();
        let more = item_cost(&formula, SampleCount::new(n + 1).unwrap(), tier).unwrap();
        prop_assert!(more > fewer);
    }

    /// A formula with any positive term yields a positive cost
    #[test]
    fn prop_cost_positive(formula in arb_formula(), samples in arb_samples(), tier in arb_tier()) {
        prop_assume!(formula.base > 0.0 || formula.per_sample > 0.0);
        let hours = item_cost(&formula, samples, tier).unwrap();
        prop_assert!(hours > 0.0);
    }

    /// Evaluating the same inputs twice gives bit-identical results
    #[test]
    fn prop_estimate_idempotent(
        selection in arb_selection(),
        samples in arb_samples(),
        tier in arb_tier(),
    ) {
        let model = CostModel::default();
        let first = model.estimate(&selection, samples, tier).unwrap();
        let second = model.estimate(&selection, samples, tier).unwrap();

        prop_assert_eq!(first.total_hours.to_bits(), second.total_hours.to_bits());
        prop_assert_eq!(first, second);
    }

    /// The total is the sum of the breakdown, and only selected steps appear
    #[test]
    fn prop_total_matches_breakdown(
        selection in arb_selection(),
        samples in arb_samples(),
        tier in arb_tier(),
    ) {
        let model = CostModel::default();
        let estimate = model.estimate(&selection, samples, tier).unwrap();

        let sum: f64 = estimate.steps.iter().map(|s| s.total_hours).sum();
        prop_assert!((estimate.total_hours - sum).abs() < 1e-9);
        for step in &estimate.steps {
            prop_assert!(selection.is_step_selected(&step.name));
        }
        prop_assert_eq!(estimate.steps.is_empty(), selection.is_empty());
    }

    /// Any non-positive sample count is rejected
    #[test]
    fn prop_non_positive_samples_rejected(n in i64::MIN..=0) {
        let err = SampleCount::new(n).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }
}
