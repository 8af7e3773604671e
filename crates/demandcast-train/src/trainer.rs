//! The placeholder trainer.

use crate::Result;
use demandcast_artifact::{ArtifactStore, ModelArtifact};
use demandcast_data::{builtin_records, read_records, TrainingRecord};
use std::path::PathBuf;

/// Explicit trainer configuration. All paths are caller-supplied; there are
/// no hidden defaults at this layer.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// CSV file with historical demand records. May be absent.
    pub data_path: PathBuf,

    /// Where to write the model artifact.
    pub artifact_path: PathBuf,
}

impl TrainConfig {
    /// Create a trainer configuration.
    pub fn new(data_path: PathBuf, artifact_path: PathBuf) -> Self {
        Self {
            data_path,
            artifact_path,
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Path the artifact was written to.
    pub artifact_path: PathBuf,

    /// Number of records that went through the (inert) fit step.
    pub rows: usize,

    /// Whether records came from the data file or the builtin fallback.
    pub from_file: bool,
}

/// Trains the placeholder demand model and persists it.
#[derive(Debug)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    /// Create a trainer from an explicit configuration.
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Run one training pass: load records, skip fitting, save the
    /// placeholder artifact.
    ///
    /// A missing data file is not an error; the builtin four-row table is
    /// used instead. A present-but-malformed data file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading an existing data file or writing the
    /// artifact fails.
    pub fn run(&self) -> Result<TrainReport> {
        tracing::info!(
            data = %self.config.data_path.display(),
            artifact = %self.config.artifact_path.display(),
            "Starting model training"
        );

        let (records, from_file) = self.load_records()?;
        tracing::info!(rows = records.len(), from_file, "Training data loaded");

        // No feature/label split and no fit: the model family for production
        // use is undecided, so the artifact stays a placeholder.
        let model = ModelArtifact::placeholder();

        ArtifactStore::new().save(&self.config.artifact_path, &model)?;

        tracing::info!(
            artifact = %self.config.artifact_path.display(),
            "Model training complete"
        );

        Ok(TrainReport {
            artifact_path: self.config.artifact_path.clone(),
            rows: records.len(),
            from_file,
        })
    }

    fn load_records(&self) -> Result<(Vec<TrainingRecord>, bool)> {
        if self.config.data_path.exists() {
            let records = read_records(&self.config.data_path)?;
            Ok((records, true))
        } else {
            tracing::warn!(
                data = %self.config.data_path.display(),
                "Data file not found, using builtin records"
            );
            Ok((builtin_records(), false))
        }
    }
}
