#![deny(missing_docs)]

//! # OAS Normalize CLI
//!
//! Command Line Interface for the OpenAPI parameter normalizer.
//!
//! Supported Commands:
//! - `normalize`: Collapses duplicate parameters and writes the result.
//! - `check`: Fails if a document would change under `normalize`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use oas_normalize_core::{AppResult, ConsoleReporter};
use tracing::level_filters::LevelFilter;

mod check;
mod normalize;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI parameter normalizer")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug).
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge route and operation parameters and remove duplicates.
    Normalize(normalize::NormalizeArgs),
    /// Verify that a document is already normalized.
    Check(check::CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("FAILED: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: &Commands) -> AppResult<()> {
    let mut reporter = ConsoleReporter;
    match command {
        Commands::Normalize(args) => normalize::execute(args, &mut reporter)?,
        Commands::Check(args) => check::execute(args, &mut reporter)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
