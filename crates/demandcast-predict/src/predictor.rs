//! The artifact-backed predictor.

use crate::request::PredictionRequest;
use crate::{PredictError, Result};
use demandcast_artifact::{ArtifactError, ArtifactStore, ModelArtifact};
use std::path::PathBuf;

/// Base demand the placeholder model predicts for any non-empty batch.
pub const BASE_DEMAND: i64 = 100;

/// Demand added per batch row by the placeholder model.
pub const DEMAND_PER_ROW: i64 = 10;

/// Demand the placeholder model predicts for scalar or empty inputs.
pub const DEFAULT_DEMAND: i64 = 150;

/// Explicit predictor configuration. The artifact path is caller-supplied;
/// there are no hidden defaults at this layer.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    /// Path of the model artifact to predict with.
    pub artifact_path: PathBuf,
}

impl PredictConfig {
    /// Create a predictor configuration.
    pub fn new(artifact_path: PathBuf) -> Self {
        Self { artifact_path }
    }
}

/// A successful prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Predicted demand in units.
    pub predicted_demand: i64,
}

/// Loads the model artifact and runs placeholder inference.
///
/// Stateless: every [`Predictor::predict`] call loads the artifact fresh,
/// so a retrain between calls is picked up without coordination.
#[derive(Debug)]
pub struct Predictor {
    config: PredictConfig,
    store: ArtifactStore,
}

impl Predictor {
    /// Create a predictor from an explicit configuration.
    pub fn new(config: PredictConfig) -> Self {
        Self {
            config,
            store: ArtifactStore::new(),
        }
    }

    /// Load the configured model artifact.
    ///
    /// # Errors
    ///
    /// - [`PredictError::ModelNotLoaded`] if no artifact exists
    /// - [`PredictError::ModelUnreadable`] if one exists but cannot be read
    pub fn load(&self) -> Result<ModelArtifact> {
        self.store
            .load(&self.config.artifact_path)
            .map_err(|e| match e {
                ArtifactError::NotFound(_) => PredictError::ModelNotLoaded,
                other => PredictError::ModelUnreadable(other),
            })
    }

    /// Make one prediction: load the model, then dispatch on
    /// (model kind × request shape).
    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        let model = self.load()?;

        let prediction = Self::dispatch(&model, request)?;
        tracing::info!(
            kind = model.kind(),
            predicted_demand = prediction.predicted_demand,
            "Prediction made"
        );
        Ok(prediction)
    }

    fn dispatch(model: &ModelArtifact, request: &PredictionRequest) -> Result<Prediction> {
        match (model, request) {
            (ModelArtifact::Placeholder { .. }, PredictionRequest::Batch(batch))
                if !batch.is_empty() =>
            {
                Ok(Prediction {
                    predicted_demand: BASE_DEMAND + DEMAND_PER_ROW * batch.len() as i64,
                })
            }
            // Empty batches and scalar mappings get the fixed fallback.
            (ModelArtifact::Placeholder { .. }, _) => Ok(Prediction {
                predicted_demand: DEFAULT_DEMAND,
            }),
            (ModelArtifact::Regression { .. }, _) => Err(PredictError::UnsupportedModel {
                kind: model.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn predictor_for(path: &std::path::Path) -> Predictor {
        Predictor::new(PredictConfig::new(path.to_path_buf()))
    }

    fn save_placeholder(path: &std::path::Path) {
        ArtifactStore::new()
            .save(path, &ModelArtifact::placeholder())
            .unwrap();
    }

    fn batch_of(rows: usize) -> PredictionRequest {
        PredictionRequest::batch(
            vec!["temperature".into()],
            (0..rows).map(|i| vec![15.0 + i as f64]).collect(),
        )
    }

    #[test]
    fn test_predict_missing_artifact_is_model_not_loaded() {
        let dir = tempdir().unwrap();
        let predictor = predictor_for(&dir.path().join("absent.json"));

        let err = predictor.predict(&batch_of(2)).unwrap_err();
        assert!(matches!(err, PredictError::ModelNotLoaded));
        assert_eq!(err.to_string(), "Model not loaded");
    }

    #[test]
    fn test_predict_corrupt_artifact_is_unreadable_not_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"{ definitely not an envelope").unwrap();

        let err = predictor_for(&path).predict(&batch_of(2)).unwrap_err();
        assert!(matches!(
            err,
            PredictError::ModelUnreadable(ArtifactError::Corrupted(_))
        ));
    }

    #[test]
    fn test_predict_batch_scales_with_row_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_placeholder(&path);
        let predictor = predictor_for(&path);

        assert_eq!(
            predictor.predict(&batch_of(1)).unwrap().predicted_demand,
            110
        );
        assert_eq!(
            predictor.predict(&batch_of(2)).unwrap().predicted_demand,
            120
        );
        assert_eq!(
            predictor.predict(&batch_of(7)).unwrap().predicted_demand,
            170
        );
    }

    #[test]
    fn test_predict_empty_batch_uses_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_placeholder(&path);

        let prediction = predictor_for(&path).predict(&batch_of(0)).unwrap();
        assert_eq!(prediction.predicted_demand, DEFAULT_DEMAND);
    }

    #[test]
    fn test_predict_scalar_uses_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_placeholder(&path);

        let request = PredictionRequest::scalar([("current_demand", 75.0)]);
        let prediction = predictor_for(&path).predict(&request).unwrap();
        assert_eq!(prediction.predicted_demand, DEFAULT_DEMAND);
    }

    #[test]
    fn test_predict_regression_model_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        ArtifactStore::new()
            .save(
                &path,
                &ModelArtifact::Regression {
                    coefficients: vec![0.1],
                    intercept: 2.0,
                },
            )
            .unwrap();

        let err = predictor_for(&path).predict(&batch_of(3)).unwrap_err();
        assert!(matches!(
            err,
            PredictError::UnsupportedModel { kind: "regression" }
        ));
    }

    #[test]
    fn test_predictor_sees_retrained_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let predictor = predictor_for(&path);

        assert!(matches!(
            predictor.predict(&batch_of(1)),
            Err(PredictError::ModelNotLoaded)
        ));

        save_placeholder(&path);
        assert_eq!(
            predictor.predict(&batch_of(1)).unwrap().predicted_demand,
            110
        );
    }
}
