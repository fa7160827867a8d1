//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Estimate labor hours for a test-engineering project
#[derive(Debug, Parser)]
#[command(name = "estimator", version, about)]
pub struct Cli {
    /// YAML configuration file (defaults to the built-in step catalog)
    #[arg(long, short = 'C', env = "ESTIMATOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `test_estimator=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List process steps, their formulas and substeps
    Steps,
    /// Compute the total for a selection of steps and substeps
    Estimate(EstimateArgs),
    /// Show what every step would cost if selected on its own
    Preview(ProjectArgs),
    /// Load and validate the configured cost model
    Validate,
    /// Print the effective configuration
    ShowConfig {
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

/// Sample count and complexity; unset values fall back to the configured defaults
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Number of samples (UUTs), a positive integer
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub samples: Option<String>,

    /// Sample complexity: Easy, Medium or High
    #[arg(long, short = 'c')]
    pub complexity: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Select a step by name (repeatable)
    #[arg(long = "step", short = 's', value_name = "STEP")]
    pub steps: Vec<String>,

    /// Select a substep as STEP=SUBSTEP (repeatable); selects the step too
    #[arg(long = "substep", value_name = "STEP=SUBSTEP")]
    pub substeps: Vec<String>,

    /// Select every step in the model
    #[arg(long)]
    pub all_steps: bool,

    /// Select every substep of each selected step
    #[arg(long)]
    pub all_substeps: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
