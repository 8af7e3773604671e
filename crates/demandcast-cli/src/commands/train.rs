//! Train Command Implementation
//!
//! Runs one training pass and writes the model artifact. If the demand data
//! file does not exist, a five-row sample file is written first so the
//! example workflow is self-contained.

use anyhow::{Context, Result};
use clap::Args;
use demandcast_data::ensure_sample_data;
use demandcast_train::{TrainConfig, Trainer};
use std::path::PathBuf;
use tracing::info;

/// Train a demand model and write the artifact
///
/// # Example
///
/// ```bash
/// demandcast train \
///     --data-path data/historical_demand.csv \
///     --artifact-path aimodel/model.json
/// ```
#[derive(Args, Debug, Clone)]
pub struct TrainCommand {
    /// CSV file with historical demand records
    #[arg(
        long,
        short = 'd',
        env = "DEMANDCAST_DATA_PATH",
        default_value = "data/historical_demand.csv"
    )]
    pub data_path: PathBuf,

    /// Where to write the model artifact
    #[arg(
        long,
        short = 'a',
        env = "DEMANDCAST_ARTIFACT_PATH",
        default_value = "aimodel/model.json"
    )]
    pub artifact_path: PathBuf,

    /// Do not create a sample data file when the data path is absent
    #[arg(long)]
    pub no_sample_data: bool,
}

impl TrainCommand {
    /// Execute the train command
    pub fn run(&self) -> Result<()> {
        info!(data = %self.data_path.display(), "Starting training");

        if !self.no_sample_data {
            let created = ensure_sample_data(&self.data_path)
                .context("Failed to create sample demand data file")?;
            if created {
                info!(path = %self.data_path.display(), "Created sample demand data file");
            }
        }

        let config = TrainConfig::new(self.data_path.clone(), self.artifact_path.clone());
        let report = Trainer::new(config).run().context("Training failed")?;

        info!(
            rows = report.rows,
            from_file = report.from_file,
            "Training completed"
        );

        // The artifact path is the command's observable result.
        println!("{}", report.artifact_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_command_defaults() {
        let cmd = TrainCommand {
            data_path: PathBuf::from("data/historical_demand.csv"),
            artifact_path: PathBuf::from("aimodel/model.json"),
            no_sample_data: false,
        };

        assert_eq!(cmd.data_path, PathBuf::from("data/historical_demand.csv"));
        assert_eq!(cmd.artifact_path, PathBuf::from("aimodel/model.json"));
        assert!(!cmd.no_sample_data);
    }
}
