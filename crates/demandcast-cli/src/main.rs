//! demandcast CLI - Command-line interface for training and prediction.
//!
//! This binary drives the demand-forecasting workflow: the `train`
//! subcommand produces a model artifact, the `predict` subcommand loads it
//! and prints a prediction result as JSON.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use demandcast_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("demandcast=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => cmd.run()?,
        Commands::Predict(cmd) => cmd.run()?,
    }

    info!("demandcast completed successfully");
    Ok(())
}
