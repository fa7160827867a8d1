//! estimator - labor-hour estimates for test-engineering projects

use clap::Parser;
use std::process::ExitCode;
use test_estimator::EstimatorError;
use test_estimator::cli::{self, Cli};
use test_estimator::config::load_dotenv;

fn fail(e: EstimatorError) -> ExitCode {
    // Print error using Display (not Debug) to preserve newlines
    eprintln!("Error: {}", e);
    ExitCode::from(e.exit_code())
}

fn main() -> ExitCode {
    // Before parsing: clap reads ESTIMATOR_CONFIG from the environment
    if let Err(e) = load_dotenv() {
        return fail(e);
    }

    let cli = Cli::parse();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}
