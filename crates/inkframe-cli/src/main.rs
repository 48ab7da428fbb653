//! Inkframe CLI
//!
//! Inspect and change the theme preference the inkframe app resolves at
//! startup. Uses the same preference file as the app, so a choice made here
//! is picked up on the next launch.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use inkframe_core::InkframeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        InkframeConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_to(&mut config);

    // Set RUST_LOG=debug for verbose logging
    logging::init(&config.logging, cli.verbose);

    router::route(cli, config).await
}
