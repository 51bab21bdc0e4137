//! Validate command — check a context file against the section checklist.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use crewkit_core::validate::{self, ValidationReport};

use super::rule;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to validate.
    #[arg(default_value = "CLAUDE.md")]
    pub file: Utf8PathBuf,
}

/// Validate a context file and exit nonzero when it has errors.
#[instrument(name = "cmd_validate", skip_all, fields(file = %args.file))]
pub fn cmd_validate(args: ValidateArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing validate command");

    let report = validate::validate_file(&args.file)
        .with_context(|| format!("failed to validate {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n🔍 Validating: {}\n", args.file);
        print_report(&report);
    }

    if !report.valid {
        bail!("{} failed validation", args.file);
    }

    Ok(())
}

/// Grouped severity report with a pass/fail banner.
fn print_report(report: &ValidationReport) {
    let rule = rule();
    let divider = "-".repeat(70);

    println!("{rule}");
    println!("{}", "Context File Validation Results".bold());
    println!("{rule}");
    println!();

    if !report.errors.is_empty() {
        println!("{}", "ERRORS (Must Fix):".red());
        println!("{divider}");
        for error in &report.errors {
            println!("  {error}");
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("{}", "WARNINGS (Should Fix):".yellow());
        println!("{divider}");
        for warning in &report.warnings {
            println!("  {warning}");
        }
        println!();
    }

    if !report.suggestions.is_empty() {
        println!("{}", "SUGGESTIONS (Nice to Have):".cyan());
        println!("{divider}");
        for suggestion in &report.suggestions {
            println!("  {suggestion}");
        }
        println!();
    }

    println!("{rule}");
    if report.valid {
        println!("{} {} is valid!", "✅".green(), report.file);
        if !report.warnings.is_empty() || !report.suggestions.is_empty() {
            println!("   Consider addressing warnings and suggestions for better results.");
        }
    } else {
        println!("{} {} has errors that must be fixed.", "❌".red(), report.file);
    }
    println!("{rule}");
}
