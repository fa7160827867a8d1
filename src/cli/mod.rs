//! Command-line front end
//!
//! A thin view over the cost model: it collects the selection, sample count
//! and complexity from arguments and renders what the calculator returns.

pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command, EstimateArgs, OutputFormat, ProjectArgs};
pub use commands::{build_selection, execute, resolve_project};

use crate::config::Config;
use crate::utils::error::Result;
use crate::utils::logging::init_logging;
use tracing::debug;

/// Configuration for a parsed command line: file, then environment, then flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    load_config_with(cli, |key| std::env::var(key).ok())
}

/// Like [`load_config`], reading environment overrides from `lookup`
pub fn load_config_with<F>(cli: &Cli, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::load_with(cli.config.as_deref(), lookup)?;
    if let Some(level) = &cli.log_level {
        config.estimator.logging.level = level.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Load configuration, set up logging and run the parsed command on stdout
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    init_logging(config.logging())?;
    debug!(command = ?cli.command, "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &config, &mut out)
}
