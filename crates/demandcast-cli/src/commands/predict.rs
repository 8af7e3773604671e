//! Predict Command Implementation
//!
//! Loads the model artifact, runs one prediction, and prints the wire
//! result as a single line of JSON on stdout.

use anyhow::{Context, Result};
use clap::Args;
use demandcast_predict::{PredictConfig, PredictionRequest, PredictionResult, Predictor};
use std::path::PathBuf;
use tracing::info;

/// Make a prediction with a trained artifact
///
/// The request is JSON, either a tabular batch
/// (`{"columns":["temperature"],"rows":[[15.0],[16.0]]}`) or a scalar
/// mapping (`{"current_demand":75}`). With no `--input` or `--input-file`,
/// a builtin two-row example batch is used.
///
/// # Example
///
/// ```bash
/// demandcast predict \
///     --artifact-path aimodel/model.json \
///     --input '{"current_demand":75}'
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Path of the model artifact to predict with
    #[arg(
        long,
        short = 'a',
        env = "DEMANDCAST_ARTIFACT_PATH",
        default_value = "aimodel/model.json"
    )]
    pub artifact_path: PathBuf,

    /// Inline JSON prediction request
    #[arg(long, short = 'i', conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Path to a JSON prediction request file
    #[arg(long)]
    pub input_file: Option<PathBuf>,
}

impl PredictCommand {
    /// Execute the predict command
    pub fn run(&self) -> Result<()> {
        let request = self.read_request()?;
        info!(artifact = %self.artifact_path.display(), "Making prediction");

        let predictor = Predictor::new(PredictConfig::new(self.artifact_path.clone()));
        let result = PredictionResult::from(predictor.predict(&request));

        println!(
            "{}",
            serde_json::to_string(&result).context("Failed to encode prediction result")?
        );

        Ok(())
    }

    fn read_request(&self) -> Result<PredictionRequest> {
        let raw = if let Some(inline) = &self.input {
            inline.clone()
        } else if let Some(path) = &self.input_file {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file {}", path.display()))?
        } else {
            return Ok(Self::example_request());
        };

        serde_json::from_str(&raw).context("Failed to parse prediction request JSON")
    }

    /// The two-row example batch used when no request is supplied.
    fn example_request() -> PredictionRequest {
        PredictionRequest::batch(
            vec!["temperature".to_string(), "day_of_week".to_string()],
            vec![vec![15.0, 1.0], vec![16.0, 2.0]],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_with_input(input: Option<&str>) -> PredictCommand {
        PredictCommand {
            artifact_path: PathBuf::from("aimodel/model.json"),
            input: input.map(str::to_string),
            input_file: None,
        }
    }

    #[test]
    fn test_example_request_is_two_row_batch() {
        match PredictCommand::example_request() {
            PredictionRequest::Batch(batch) => assert_eq!(batch.len(), 2),
            other => panic!("expected batch, got {:?}", other),
        }
    }

    #[test]
    fn test_read_request_inline_scalar() {
        let cmd = command_with_input(Some(r#"{"current_demand":75}"#));
        let request = cmd.read_request().unwrap();
        assert!(matches!(request, PredictionRequest::Scalar(_)));
    }

    #[test]
    fn test_read_request_defaults_to_example() {
        let cmd = command_with_input(None);
        let request = cmd.read_request().unwrap();
        assert_eq!(request, PredictCommand::example_request());
    }

    #[test]
    fn test_read_request_rejects_bad_json() {
        let cmd = command_with_input(Some("{not json"));
        assert!(cmd.read_request().is_err());
    }

    #[test]
    fn test_read_request_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, r#"{"columns":["temperature"],"rows":[[20.0]]}"#).unwrap();

        let cmd = PredictCommand {
            artifact_path: PathBuf::from("aimodel/model.json"),
            input: None,
            input_file: Some(path),
        };
        let request = cmd.read_request().unwrap();
        match request {
            PredictionRequest::Batch(batch) => assert_eq!(batch.len(), 1),
            other => panic!("expected batch, got {:?}", other),
        }
    }
}
