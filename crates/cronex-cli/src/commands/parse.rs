//! Parse command implementation
//!
//! Parses a cron expression and prints the expanded report.

use anyhow::Result;
use colored::Colorize;
use cronex_expr::{format_report, parse};
use std::process::ExitCode;

use super::json_output::ParseOutput;

/// Run the parse command
///
/// # Arguments
/// * `expression` - The full cron line (five time fields plus command)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the expression is valid, 1 if invalid
pub fn run(expression: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(expression)
    } else {
        run_human(expression)
    }
}

/// Run parse with human-readable output: the report on stdout, or a colored
/// error line on stderr.
fn run_human(expression: &str) -> Result<ExitCode> {
    match parse(expression) {
        Ok(expr) => {
            println!("{}", format_report(&expr));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run parse with machine-readable JSON output on stdout.
fn run_json(expression: &str) -> Result<ExitCode> {
    let (output, code) = match parse(expression) {
        Ok(expr) => (ParseOutput::success(expr), ExitCode::SUCCESS),
        Err(err) => (ParseOutput::failure(&err), ExitCode::FAILURE),
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(code)
}
