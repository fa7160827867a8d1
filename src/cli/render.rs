//! Plain-text rendering of models and estimates

use std::io::Write;

use crate::config::DisplayConfig;
use crate::core::estimate::{
    ComplexityTier, CostFormula, CostModel, Estimate, SampleCount, StepCost, format_hours,
    progress_bar, progress_fraction,
};
use crate::utils::error::Result;

const NAME_WIDTH: usize = 40;

fn describe_formula(formula: &CostFormula) -> String {
    let mut text = format!("{} h", formula.base);
    if formula.is_sample_sensitive() {
        text.push_str(&format!(" + {} h/sample", formula.per_sample));
    }
    if formula.is_complexity_sensitive() {
        let factors: Vec<String> = ComplexityTier::ALL
            .iter()
            .filter_map(|tier| formula.multipliers.get(*tier).ok())
            .map(|m| format!("{}", m))
            .collect();
        text.push_str(&format!(" x [{}]", factors.join("/")));
    }
    text
}

/// Steps in order with formula and substeps
pub fn render_steps<W: Write>(out: &mut W, model: &CostModel) -> Result<()> {
    for (index, step) in model.steps().iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<width$} {}",
            index + 1,
            step.name,
            describe_formula(&step.formula),
            width = NAME_WIDTH
        )?;
        for substep in &step.substeps {
            let formula = step.substep_formula(substep, model.substep_formula());
            writeln!(
                out,
                "      - {:<width$} {}",
                substep,
                describe_formula(formula),
                width = NAME_WIDTH - 4
            )?;
        }
    }
    writeln!(
        out,
        "\nShared substep formula: {}",
        describe_formula(model.substep_formula())
    )?;
    Ok(())
}

fn render_header<W: Write>(
    out: &mut W,
    samples: SampleCount,
    complexity: ComplexityTier,
) -> Result<()> {
    writeln!(out, "Samples: {}    Complexity: {}\n", samples, complexity)?;
    Ok(())
}

/// Selected steps, their substeps and the total
pub fn render_estimate<W: Write>(
    out: &mut W,
    estimate: &Estimate,
    display: &DisplayConfig,
) -> Result<()> {
    render_header(out, estimate.samples, estimate.complexity)?;

    if estimate.is_empty() {
        writeln!(out, "  (no steps selected)")?;
    }

    for step in &estimate.steps {
        writeln!(
            out,
            "  {:<width$} {:>12}",
            step.name,
            format_hours(step.total_hours, display.step_precision),
            width = NAME_WIDTH
        )?;
        for substep in &step.substeps {
            writeln!(
                out,
                "      {:<width$} {:>12}",
                substep.name,
                format_hours(substep.hours, display.step_precision),
                width = NAME_WIDTH - 4
            )?;
        }
    }

    writeln!(
        out,
        "\nTotal Hours: {}",
        format_hours(estimate.total_hours, display.total_precision)
    )?;

    if estimate.total_hours > 0.0 {
        let fraction = progress_fraction(estimate.total_hours, display.progress_reference_hours);
        writeln!(
            out,
            "{} {:>3.0}% of {} h",
            progress_bar(fraction, display.progress_width),
            fraction * 100.0,
            display.progress_reference_hours
        )?;
    }

    Ok(())
}

/// Base cost of every step
pub fn render_preview<W: Write>(
    out: &mut W,
    preview: &[StepCost],
    samples: SampleCount,
    complexity: ComplexityTier,
    display: &DisplayConfig,
) -> Result<()> {
    render_header(out, samples, complexity)?;
    for step in preview {
        writeln!(
            out,
            "  {:<width$} {:>12}",
            step.name,
            format_hours(step.total_hours, display.step_precision),
            width = NAME_WIDTH
        )?;
    }
    Ok(())
}
