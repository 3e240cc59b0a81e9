//! Gradus CLI
//!
//! Command-line interface for browsing and exporting an array/list
//! algorithms curriculum.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gradus_cli::{Cli, Outcome, logging};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = gradus_cli::load_config(&cli).context("failed to load configuration")?;
    logging::init(cli.verbose, cli.quiet, &config.logging.level);
    tracing::debug!(command = ?cli.command, "starting");

    let mut stdout = std::io::stdout().lock();
    match gradus_cli::run(cli, &config, &mut stdout).await? {
        Outcome::Success => Ok(ExitCode::SUCCESS),
        Outcome::Failure => Ok(ExitCode::FAILURE),
    }
}
