//! Info command — package details and calibration constants.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use crewkit_core::estimate::{
    BASELINE_TEAM_SIZE, HOURS_PER_KTOK, INPUT_PRICE_PER_MTOK, INPUT_RATIO, OUTPUT_PRICE_PER_MTOK,
    OUTPUT_RATIO,
};
use crewkit_core::validate::{RECOMMENDED_SECTIONS, REQUIRED_SECTIONS};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

#[derive(Serialize)]
struct Calibration {
    input_price_per_mtok: f64,
    output_price_per_mtok: f64,
    input_ratio: f64,
    output_ratio: f64,
    hours_per_ktok: f64,
    baseline_team_size: u32,
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    calibration: Calibration,
    required_sections: &'static [&'static str],
    recommended_sections: &'static [&'static str],
}

/// Print package information and the fixed constants the tools run on.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(_args: InfoArgs, global_json: bool) -> anyhow::Result<()> {
    let info = FullInfo {
        package: PackageInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        },
        calibration: Calibration {
            input_price_per_mtok: INPUT_PRICE_PER_MTOK,
            output_price_per_mtok: OUTPUT_PRICE_PER_MTOK,
            input_ratio: INPUT_RATIO,
            output_ratio: OUTPUT_RATIO,
            hours_per_ktok: HOURS_PER_KTOK,
            baseline_team_size: BASELINE_TEAM_SIZE,
        },
        required_sections: REQUIRED_SECTIONS,
        recommended_sections: RECOMMENDED_SECTIONS,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.package.name.bold(), info.package.version);
    if !info.package.description.is_empty() {
        println!("{}", info.package.description);
    }
    println!();
    println!(
        "Pricing: ${:.2} input / ${:.2} output per 1M tokens ({:.0}%/{:.0}% split)",
        info.calibration.input_price_per_mtok,
        info.calibration.output_price_per_mtok,
        info.calibration.input_ratio * 100.0,
        info.calibration.output_ratio * 100.0,
    );
    println!(
        "Time model: {} hours per 1k estimated tokens (team baseline: {} agents)",
        info.calibration.hours_per_ktok, info.calibration.baseline_team_size,
    );
    println!();
    println!("Required sections:    {}", info.required_sections.join(", "));
    println!(
        "Recommended sections: {}",
        info.recommended_sections.join(", ")
    );

    Ok(())
}
