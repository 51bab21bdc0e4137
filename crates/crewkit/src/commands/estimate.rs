//! Estimate command — project token, cost, and time figures for a run.
//!
//! With no flags (and no `--json`) the command walks through interactive
//! prompts like the rest of the workflow tooling; with flags it is fully
//! scriptable.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use crewkit_core::estimate::{
    self, BASELINE_TEAM_SIZE, EstimateConfig, EstimateReport, Phase, ProjectSize,
};

use super::{group_thousands, rule};

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Project size tier.
    #[arg(long, value_enum)]
    pub size: Option<ProjectSize>,

    /// Agents per phase (estimates are calibrated for 3).
    #[arg(long)]
    pub team_size: Option<u32>,

    /// Extra scaling factor applied on top of the team multiplier.
    #[arg(long)]
    pub multiplier: Option<f64>,

    /// Comma-separated phases to leave out (unknown names are ignored).
    #[arg(long, value_delimiter = ',', value_name = "PHASES")]
    pub skip: Option<Vec<String>>,
}

/// Compute and print an estimate.
#[instrument(name = "cmd_estimate", skip_all)]
pub fn cmd_estimate(args: EstimateArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(?args, json = global_json, "executing estimate command");

    let interactive = !global_json
        && args.size.is_none()
        && args.team_size.is_none()
        && args.multiplier.is_none()
        && args.skip.is_none();

    let config = if interactive {
        prompt_config()?
    } else {
        config_from_args(&args)
    };

    let report = estimate::estimate(&config);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Build a config from flags, starting from the defaults.
fn config_from_args(args: &EstimateArgs) -> EstimateConfig {
    let mut config = EstimateConfig::default();
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(team_size) = args.team_size {
        // No clamping here: scripted callers may model any team size.
        config.team_size = team_size;
    }
    if let Some(multiplier) = args.multiplier {
        config.multiplier = multiplier;
    }
    if let Some(ref skip) = args.skip {
        config
            .phases
            .retain(|p| !skip.iter().any(|s| s.trim() == p.name()));
    }
    config
}

/// Interactive prompts on stdin, mirroring the scripted defaults.
fn prompt_config() -> anyhow::Result<EstimateConfig> {
    println!("\n🧮 crewkit Cost Estimator (Interactive Mode)\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Project Size:");
    println!("  1. Small   (single resource, simple scope)");
    println!("  2. Medium  (multiple resources, some complexity)");
    println!("  3. Large   (complex system, many integrations)");

    let size = match prompt(&mut lines, "\nSelect project size [1-3] (default: 2): ")?.as_str() {
        "1" => ProjectSize::Small,
        "3" => ProjectSize::Large,
        _ => ProjectSize::Medium,
    };

    // Bad input falls back to the baseline; anything parseable is clamped
    // to the supported range.
    let team_raw = prompt(&mut lines, "Team size per phase (2-3 agents, default: 3): ")?;
    let team_size = if team_raw.is_empty() {
        BASELINE_TEAM_SIZE
    } else {
        team_raw
            .parse::<i64>()
            .map_or(BASELINE_TEAM_SIZE, |n| n.clamp(2, 3) as u32)
    };

    let skip_raw = prompt(&mut lines, "Skip any phases? (e.g., 'testing,documentation'): ")?;
    let mut phases = Phase::ALL.to_vec();
    if !skip_raw.is_empty() {
        let skip: Vec<&str> = skip_raw.split(',').map(str::trim).collect();
        phases.retain(|p| !skip.contains(&p.name()));
    }

    println!();

    Ok(EstimateConfig {
        size,
        phases,
        team_size,
        multiplier: 1.0,
    })
}

/// Print `message` without a newline and read one trimmed line back.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;
    let line = lines
        .next()
        .transpose()
        .context("failed to read stdin")?
        .unwrap_or_default();
    Ok(line.trim().to_string())
}

/// Formatted multi-section text report.
fn print_report(report: &EstimateReport) {
    let rule = rule();

    println!("{rule}");
    println!("{}", "Workflow Cost Estimate".bold());
    println!("{rule}");
    println!();

    println!(
        "Project Size: {}",
        report.project_size.as_str().to_uppercase()
    );
    println!("Team Size: {} agents per phase", report.team_size);
    let phase_names: Vec<&str> = report.phases.iter().map(Phase::name).collect();
    println!("Phases: {}", phase_names.join(", "));
    println!();

    println!("{rule}");
    println!("ESTIMATE RANGES");
    println!("{rule}");
    println!();

    println!("Total Tokens:");
    println!("  Minimum:  {:>10} tokens", group_thousands(report.tokens.min));
    println!("  Average:  {:>10} tokens", group_thousands(report.tokens.avg));
    println!("  Maximum:  {:>10} tokens", group_thousands(report.tokens.max));
    println!();

    println!("Total Cost (Claude Opus):");
    println!("  Minimum:  ${:>9.2}", report.cost_usd.min);
    println!("  Average:  ${:>9.2}", report.cost_usd.avg);
    println!("  Maximum:  ${:>9.2}", report.cost_usd.max);
    println!();

    println!("Estimated Time:");
    println!("  Minimum:  {:>9.1} hours", report.time_hours.min);
    println!("  Average:  {:>9.1} hours", report.time_hours.avg);
    println!("  Maximum:  {:>9.1} hours", report.time_hours.max);
    println!();

    println!("{rule}");
    println!("BREAKDOWN BY PHASE");
    println!("{rule}");
    println!();

    for (phase, details) in &report.phase_details {
        println!("{}:", phase.name().to_uppercase());
        println!("  Min: {:>8} tokens", group_thousands(details.min_tokens));
        println!("  Avg: {:>8} tokens", group_thousands(details.avg_tokens));
        println!("  Max: {:>8} tokens", group_thousands(details.max_tokens));
        println!();
    }

    println!("{rule}");
    println!("NOTES");
    println!("{rule}");
    println!();
    println!("• Estimates based on Claude Opus pricing ($5 input / $25 output per 1M tokens)");
    println!("• Assumes 80% output, 20% input token ratio");
    println!("• Actual costs vary based on:");
    println!("  - Task complexity");
    println!("  - Effort levels used");
    println!("  - Number of iterations");
    println!("  - Context file quality (better context = fewer tokens)");
    println!();
    println!("• Time estimates are approximate");
    println!("• Most work is autonomous (minimal human intervention)");
    println!();
}
