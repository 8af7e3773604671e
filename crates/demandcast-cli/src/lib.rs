//! demandcast CLI Library
//!
//! This crate provides the command-line interface for demandcast:
//!
//! - **Train**: fabricate or read demand data and write a model artifact
//! - **Predict**: load the artifact and print a prediction result as JSON
//!
//! # Example
//!
//! ```bash
//! # Train a model (creates data/historical_demand.csv if absent)
//! demandcast train --data-path data/historical_demand.csv --artifact-path aimodel/model.json
//!
//! # Predict from an inline request
//! demandcast predict --input '{"columns":["temperature"],"rows":[[15.0],[16.0]]}'
//!
//! # Predict from a request file
//! demandcast predict --input-file request.json
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{PredictCommand, TrainCommand};

/// demandcast - demand forecasting model lifecycle
///
/// Provides tools for training a demand model artifact and making
/// predictions against it.
#[derive(Parser, Debug)]
#[command(name = "demandcast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a demand model and write the artifact
    Train(TrainCommand),

    /// Make a prediction with a trained artifact
    Predict(PredictCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
