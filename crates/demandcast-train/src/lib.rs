//! Placeholder demand-model training for demandcast.
//!
//! The trainer walks the full train-and-persist path (load data, "fit",
//! save an artifact), but the fit step is explicitly inert: whatever the
//! input, the output is the placeholder artifact. Real feature engineering
//! and model selection are out of scope; what this crate guarantees is the
//! lifecycle around them.
//!
//! # Example
//!
//! ```no_run
//! use demandcast_train::{TrainConfig, Trainer};
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), demandcast_train::TrainError> {
//!     let config = TrainConfig::new(
//!         PathBuf::from("data/historical_demand.csv"),
//!         PathBuf::from("aimodel/model.json"),
//!     );
//!     let report = Trainer::new(config).run()?;
//!     println!("model saved to {}", report.artifact_path.display());
//!     Ok(())
//! }
//! ```

pub mod trainer;

pub use trainer::{TrainConfig, TrainReport, Trainer};

use demandcast_artifact::ArtifactError;
use demandcast_data::DataError;
use thiserror::Error;

/// Errors that can occur during a training run.
#[derive(Debug, Error)]
pub enum TrainError {
    /// Reading the demand data file failed.
    #[error("Training data error: {0}")]
    Data(#[from] DataError),

    /// Persisting the artifact failed.
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Result type for training operations.
pub type Result<T> = std::result::Result<T, TrainError>;
