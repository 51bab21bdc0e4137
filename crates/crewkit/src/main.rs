//! crewkit CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use crewkit::{Cli, Commands, commands};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let filter = observability::env_filter(cli.quiet, cli.verbose);
    let _guard = observability::init(filter).context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let result = match command {
        Commands::Estimate(args) => commands::estimate::cmd_estimate(args, cli.json),
        Commands::Validate(args) => commands::validate::cmd_validate(args, cli.json),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
