//! Demand prediction for demandcast.
//!
//! This crate provides:
//!
//! - [`PredictionRequest`] / [`TabularBatch`]: the two request shapes
//! - [`Predictor`]: loads the model artifact and dispatches on
//!   (model kind × request shape) via exhaustive pattern matching
//! - [`PredictionResult`]: the wire result, carrying exactly one of
//!   `predicted_demand` or `error`
//!
//! The prediction arithmetic is the documented placeholder logic
//! (`100 + 10 * rows`, default `150`). The machinery around it is real:
//! typed load errors, explicit dispatch, and a stable wire shape.
//!
//! # Example
//!
//! ```no_run
//! use demandcast_predict::{PredictConfig, PredictionRequest, PredictionResult, Predictor};
//! use std::path::PathBuf;
//!
//! let predictor = Predictor::new(PredictConfig::new(PathBuf::from("aimodel/model.json")));
//! let request = PredictionRequest::batch(
//!     vec!["temperature".into(), "day_of_week".into()],
//!     vec![vec![15.0, 1.0], vec![16.0, 2.0]],
//! );
//! let result = PredictionResult::from(predictor.predict(&request));
//! println!("{}", serde_json::to_string(&result).unwrap());
//! ```

pub mod predictor;
pub mod request;
pub mod response;

pub use predictor::{PredictConfig, Prediction, Predictor};
pub use request::{PredictionRequest, TabularBatch};
pub use response::PredictionResult;

use demandcast_artifact::ArtifactError;
use thiserror::Error;

/// Errors that can occur while making a prediction.
///
/// Missing and unreadable artifacts are deliberately distinct: a missing
/// model means "train first", an unreadable one means something destroyed
/// the artifact and retraining alone may not be the right reaction.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No model artifact exists at the configured path.
    #[error("Model not loaded")]
    ModelNotLoaded,

    /// An artifact exists but could not be read (corrupt file, version
    /// skew, I/O failure).
    #[error("Failed to load model: {0}")]
    ModelUnreadable(#[source] ArtifactError),

    /// The loaded model kind has no prediction logic.
    #[error("No prediction logic implemented for model kind '{kind}'")]
    UnsupportedModel {
        /// The offending model kind.
        kind: &'static str,
    },
}

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;
