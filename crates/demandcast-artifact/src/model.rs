//! The tagged union of model kinds.
//!
//! Dispatch over model kinds happens by matching on this enum, never by
//! probing the shape of a deserialized mapping.

use serde::{Deserialize, Serialize};

/// Description carried by every placeholder artifact the trainer emits.
pub const PLACEHOLDER_DESCRIPTION: &str = "This is a placeholder trained model.";

/// A trained (or stand-in) demand model, as persisted to disk.
///
/// `Placeholder` is the only kind the predictor implements. `Regression`
/// models can be persisted and loaded, but predicting with one is a typed
/// unimplemented-logic error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// The content-free stand-in written by the placeholder trainer.
    Placeholder {
        /// Human-readable description of the artifact.
        description: String,
    },

    /// A linear regression model. No prediction logic exists for it yet.
    Regression {
        /// Per-feature coefficients.
        coefficients: Vec<f64>,
        /// Model intercept.
        intercept: f64,
    },
}

impl ModelArtifact {
    /// The placeholder artifact the trainer produces on every run.
    pub fn placeholder() -> Self {
        Self::Placeholder {
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        }
    }

    /// Stable name of this model kind, as used in the on-disk tag and in
    /// error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Placeholder { .. } => "placeholder",
            Self::Regression { .. } => "regression",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_description() {
        let model = ModelArtifact::placeholder();
        match &model {
            ModelArtifact::Placeholder { description } => {
                assert_eq!(description, "This is a placeholder trained model.");
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names_match_wire_tags() {
        assert_eq!(ModelArtifact::placeholder().kind(), "placeholder");

        let regression = ModelArtifact::Regression {
            coefficients: vec![0.5, -1.2],
            intercept: 3.0,
        };
        assert_eq!(regression.kind(), "regression");

        let json = serde_json::to_string(&regression).unwrap();
        assert!(json.contains("\"kind\":\"regression\""));
    }

    #[test]
    fn test_tagged_roundtrip() {
        let model = ModelArtifact::Regression {
            coefficients: vec![1.0, 2.0, 3.0],
            intercept: -0.5,
        };
        let json = serde_json::to_string(&model).unwrap();
        let restored: ModelArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_unknown_kind_fails_to_decode() {
        let json = r#"{"kind":"gradient_boost","trees":7}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }
}
