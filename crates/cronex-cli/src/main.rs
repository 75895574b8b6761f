//! Cronex CLI - parse and expand five-field cron expressions
//!
//! This binary takes a cron line as a single argument, validates and expands
//! it, and prints an aligned table of the matching values per field.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use cronex_cli::commands;

/// Cronex - Cron Expression Parser
#[derive(Parser)]
#[command(name = "cronex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The cron expression, e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    expression: String,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::parse::run(&cli.expression, cli.json) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
