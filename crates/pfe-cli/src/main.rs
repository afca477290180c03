//! Patient feature extraction CLI.

use std::process::ExitCode;

use clap::Parser;
use pfe_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_build, run_categories};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    let outcome = match cli.command {
        Command::Build(args) => run_build(&args).map(|result| print_summary(&result)),
        Command::Categories(args) => run_categories(&args),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
