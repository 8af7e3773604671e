//! The prediction wire result.
//!
//! The wire shape is a mapping with exactly one of `predicted_demand` or
//! `error`, kept for compatibility with existing consumers of the original
//! service. Internally everything is `Result<Prediction, PredictError>`;
//! this type is only the serialization boundary.

use crate::predictor::Prediction;
use crate::PredictError;
use serde::{Deserialize, Serialize};

/// Wire result of one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResult {
    /// Successful prediction.
    Demand {
        /// Predicted demand in units.
        predicted_demand: i64,
    },

    /// Failed prediction.
    Error {
        /// Human-readable error message.
        error: String,
    },
}

impl PredictionResult {
    /// Build a successful result.
    pub fn demand(predicted_demand: i64) -> Self {
        Self::Demand { predicted_demand }
    }

    /// Build an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Returns `true` if this result carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Prediction> for PredictionResult {
    fn from(prediction: Prediction) -> Self {
        Self::demand(prediction.predicted_demand)
    }
}

impl From<PredictError> for PredictionResult {
    fn from(err: PredictError) -> Self {
        // The first two messages are load-bearing wire strings; consumers of
        // the original service match on them.
        match err {
            PredictError::ModelNotLoaded => Self::error("Model not loaded"),
            PredictError::UnsupportedModel { .. } => Self::error(
                "Prediction logic for this model type is not implemented in placeholder.",
            ),
            PredictError::ModelUnreadable(source) => {
                Self::error(format!("Failed to load model: {source}"))
            }
        }
    }
}

impl From<crate::Result<Prediction>> for PredictionResult {
    fn from(outcome: crate::Result<Prediction>) -> Self {
        match outcome {
            Ok(prediction) => prediction.into(),
            Err(err) => err.into(),
        }
    }
}
