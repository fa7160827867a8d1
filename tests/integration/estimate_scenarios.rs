//! Worked estimation scenarios
//!
//! Hand-computed examples checked against the calculator, on both the
//! scenario model and the built-in catalog.

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::ModelFactory;
    use crate::common::assertions::EstimateAssertions;
    use std::collections::BTreeSet;
    use test_estimator::{
        ComplexityTier, CostModel, SampleCount, Selection, item_cost, step_cost,
    };

    fn samples(n: i64) -> SampleCount {
        SampleCount::new(n).unwrap()
    }

    // ==================== Single Items ====================

    /// NDA: fixed 1.0 h regardless of samples and complexity
    #[test]
    fn test_nda_is_fixed_cost() {
        let model = ModelFactory::scenario_model();
        let nda = model.step("NDA").unwrap();

        let hours = item_cost(&nda.formula, samples(5), ComplexityTier::Medium).unwrap();
        assert_eq!(hours, 1.0);
    }

    /// Creation of UUT: (2.0 + 1.0 * 3) * 1.5
    #[test]
    fn test_creation_of_uut_high_complexity() {
        let model = ModelFactory::scenario_model();
        let uut = model.step("Creation of UUT").unwrap();

        let hours = item_cost(&uut.formula, samples(3), ComplexityTier::High).unwrap();
        assert_eq!(hours, 7.5);
    }

    /// Test Execution with two of six activities at Medium and four samples
    #[test]
    fn test_execution_with_two_substeps() {
        let model = ModelFactory::scenario_model();
        let step = model.step("Test Execution").unwrap();
        let selected: BTreeSet<String> = ["Vibration".to_string(), "Seal Integrity".to_string()]
            .into_iter()
            .collect();

        let cost = step_cost(&model, step, &selected, samples(4), ComplexityTier::Medium).unwrap();

        assert_approx_eq!(cost.base_hours, 2.4);
        assert_eq!(cost.substeps.len(), 2);
        for substep in &cost.substeps {
            assert_eq!(substep.hours, 2.0);
        }
        assert_approx_eq!(cost.total_hours, 6.4);
    }

    // ==================== Totals ====================

    #[test]
    fn test_empty_selection_total_is_zero() {
        let model = ModelFactory::scenario_model();
        for complexity in ComplexityTier::ALL {
            let estimate = model
                .estimate(&Selection::new(), samples(9), complexity)
                .unwrap();
            assert_eq!(estimate.total_hours, 0.0);
            assert!(estimate.steps.is_empty());
        }
    }

    #[test]
    fn test_step_without_substeps_ignores_substep_selection() {
        let model = ModelFactory::scenario_model();
        let selection = Selection::new()
            .with_substep("NDA", "Vibration")
            .with_substep("NDA", "Anything");

        let estimate = model
            .estimate(&selection, samples(2), ComplexityTier::High)
            .unwrap();

        estimate.assert_steps(&["NDA"]);
        assert_eq!(estimate.total_hours, 1.0);
        assert!(estimate.steps[0].substeps.is_empty());
    }

    #[test]
    fn test_combined_scenario_total() {
        let model = ModelFactory::scenario_model();
        let selection = Selection::new()
            .with_step("NDA")
            .with_step("Creation of UUT")
            .with_substep("Test Execution", "Vibration")
            .with_substep("Test Execution", "Seal Integrity");

        let estimate = model
            .estimate(&selection, samples(4), ComplexityTier::Medium)
            .unwrap();

        estimate.assert_steps(&["NDA", "Creation of UUT", "Test Execution"]);
        estimate.assert_total_matches_breakdown();
        // 1.0 + (2.0 + 4.0) * 1.2 + 6.4
        assert_approx_eq!(estimate.total_hours, 14.6);
    }

    #[test]
    fn test_stale_selection_is_ignored() {
        let model = ModelFactory::scenario_model();
        let selection = Selection::new()
            .with_step("Retired Step")
            .with_substep("Test Execution", "Retired Activity");

        let estimate = model
            .estimate(&selection, samples(1), ComplexityTier::Easy)
            .unwrap();

        estimate.assert_steps(&["Test Execution"]);
        assert_eq!(estimate.total_hours, 2.0);
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let model = ModelFactory::scenario_model();
        let selection = Selection::new()
            .with_step("Creation of UUT")
            .with_all_substeps(model.step("Test Execution").unwrap());

        let runs: Vec<_> = (0..5)
            .map(|_| {
                model
                    .estimate(&selection, samples(13), ComplexityTier::High)
                    .unwrap()
            })
            .collect();

        for run in &runs[1..] {
            assert_eq!(run, &runs[0]);
            assert_eq!(run.total_hours.to_bits(), runs[0].total_hours.to_bits());
        }
    }

    // ==================== Built-in Catalog ====================

    #[test]
    fn test_catalog_substeps_scale_with_complexity() {
        let model = CostModel::default();
        let selection = Selection::new().with_substep("Pre-ATP", "Visual Inspection");

        let easy = model.estimate(&selection, samples(2), ComplexityTier::Easy).unwrap();
        let medium = model.estimate(&selection, samples(2), ComplexityTier::Medium).unwrap();

        // Pre-ATP 1.0 * 1.2 + Visual Inspection (0.5 * 2) * 1.25
        assert_approx_eq!(easy.total_hours, 2.0);
        assert_approx_eq!(medium.total_hours, 2.45);
    }

    #[test]
    fn test_catalog_shared_atp_substeps_are_independent() {
        let model = CostModel::default();
        let selection = Selection::new()
            .with_substep("Pre-ATP", "Partial Discharge")
            .with_step("Post-ATP");

        let estimate = model
            .estimate(&selection, samples(1), ComplexityTier::Easy)
            .unwrap();

        assert_eq!(estimate.step("Pre-ATP").unwrap().substeps.len(), 1);
        assert!(estimate.step("Post-ATP").unwrap().substeps.is_empty());
        assert_approx_eq!(estimate.total_hours, 2.5);
    }
}
