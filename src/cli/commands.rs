//! Command execution
//!
//! Translates parsed arguments into calls on the cost model. User-supplied
//! names are checked against the model here, at the input boundary.

use std::io::Write;
use tracing::{debug, info};

use super::args::{Command, EstimateArgs, OutputFormat, ProjectArgs};
use super::render::{render_estimate, render_preview, render_steps};
use crate::config::{Config, DefaultsConfig};
use crate::core::estimate::{ComplexityTier, CostModel, EstimateError, SampleCount, Selection};
use crate::utils::error::{EstimatorError, Result};

/// Sample count and complexity from arguments, falling back to configured defaults
pub fn resolve_project(
    args: &ProjectArgs,
    defaults: &DefaultsConfig,
) -> Result<(SampleCount, ComplexityTier)> {
    let samples = match &args.samples {
        Some(raw) => raw.parse::<SampleCount>()?,
        None => defaults.samples,
    };
    let complexity = match &args.complexity {
        Some(raw) => raw.parse::<ComplexityTier>()?,
        None => defaults.complexity,
    };
    Ok((samples, complexity))
}

/// Build a selection, rejecting names the model does not define
pub fn build_selection(model: &CostModel, args: &EstimateArgs) -> Result<Selection> {
    let mut selection = Selection::new();

    if args.all_steps {
        for name in model.step_names() {
            selection.select_step(name);
        }
    }

    for name in &args.steps {
        let step = model.step(name)?;
        selection.select_step(step.name.clone());
    }

    for pair in &args.substeps {
        let (step_name, substep) = pair.split_once('=').ok_or_else(|| {
            EstimatorError::invalid_input(format!(
                "Substep '{}' must be given as STEP=SUBSTEP",
                pair
            ))
        })?;
        let (step_name, substep) = (step_name.trim(), substep.trim());

        let step = model.step(step_name)?;
        if !step.has_substep(substep) {
            return Err(EstimateError::UnknownSubstep {
                step: step.name.clone(),
                substep: substep.to_string(),
            }
            .into());
        }
        selection.select_substep(step.name.clone(), substep);
    }

    if args.all_substeps {
        for step in model.steps() {
            if selection.is_step_selected(&step.name) {
                selection = selection.with_all_substeps(step);
            }
        }
    }

    Ok(selection)
}

/// Run one command against a loaded configuration, writing results to `out`
pub fn execute<W: Write>(command: &Command, config: &Config, out: &mut W) -> Result<()> {
    let model = config.model();

    match command {
        Command::Steps => render_steps(out, model),
        Command::Estimate(args) => {
            let (samples, complexity) = resolve_project(&args.project, config.defaults())?;
            let selection = build_selection(model, args)?;
            debug!(?selection, "Selection built");

            let estimate = model.estimate(&selection, samples, complexity)?;
            info!(total_hours = estimate.total_hours, "Estimate complete");
            render_estimate(out, &estimate, config.display())
        }
        Command::Preview(args) => {
            let (samples, complexity) = resolve_project(args, config.defaults())?;
            let preview = model.preview(samples, complexity)?;
            render_preview(out, &preview, samples, complexity, config.display())
        }
        Command::Validate => {
            model.validate()?;
            let substeps: usize = model.steps().iter().map(|s| s.substeps.len()).sum();
            writeln!(
                out,
                "Cost model OK: {} steps, {} substeps",
                model.len(),
                substeps
            )?;
            Ok(())
        }
        Command::ShowConfig { format } => {
            let text = match format {
                OutputFormat::Yaml => config.to_yaml()?,
                OutputFormat::Json => config.to_json()?,
            };
            writeln!(out, "{}", text.trim_end())?;
            Ok(())
        }
    }
}
