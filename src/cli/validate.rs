//! Validation command for kitchen configs.

use crate::cli::common::{load_app_config, load_kitchen, to_json, CliError, CliResult};
use crate::engine::{validate_and_fix, CheckStatus, ValidationResult};
use crate::services::Libraries;
use clap::Args;
use std::path::PathBuf;

/// Validate a kitchen config and report fixes, warnings and errors
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to kitchen config (JSON or JSON5)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let app_config = load_app_config()?;
        let libraries = Libraries::resolve(&app_config)
            .map_err(|e| CliError::io(format!("Failed to load libraries: {e:#}")))?;
        let kitchen = load_kitchen(&self.config)?;

        let result = validate_and_fix(&kitchen, &kitchen.global_constraints, &libraries.modules);

        if self.json {
            println!("{}", to_json(&result, app_config.output.pretty)?);
        } else {
            print_human_readable(&result);
        }

        if !result.is_valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !result.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn print_human_readable(result: &ValidationResult) {
    if result.is_valid {
        println!("✓ Validation passed");
    } else {
        println!("✗ Validation failed");
    }

    println!("\nChecks:");
    println!("  Widths:          {}", status(result.checks.widths));
    println!("  Overflow:        {}", status(result.checks.overflow));
    println!("  Hanging modules: {}", status(result.checks.hanging_modules));
    println!("  Structure:       {}", status(result.checks.structure));

    let message = result.format_message();
    if !message.is_empty() {
        println!("\n{message}");
    }
}

const fn status(check: CheckStatus) -> &'static str {
    match check {
        CheckStatus::Passed => "passed",
        CheckStatus::Warning => "warning",
        CheckStatus::Failed => "failed",
    }
}
