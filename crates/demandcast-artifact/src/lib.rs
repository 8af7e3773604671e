//! Model artifact schema and persistence for demandcast.
//!
//! This crate provides:
//!
//! - [`ModelArtifact`]: the tagged union of model kinds the trainer can
//!   produce
//! - [`ArtifactEnvelope`]: the versioned on-disk record wrapping a model
//! - [`ArtifactStore`]: atomic save and typed load of artifacts
//!
//! The artifact is the only channel between the trainer and the predictor;
//! the two never share a process. The on-disk format is explicit JSON with a
//! `format_version` field rather than an opaque language-native
//! serialization, so readers in other languages can parse it and version
//! skew is a typed error instead of a garbled decode.
//!
//! # Example
//!
//! ```no_run
//! use demandcast_artifact::{ArtifactStore, ModelArtifact};
//! use std::path::Path;
//!
//! fn main() -> demandcast_artifact::Result<()> {
//!     let store = ArtifactStore::new();
//!     let path = Path::new("aimodel/model.json");
//!
//!     store.save(path, &ModelArtifact::placeholder())?;
//!     let restored = store.load(path)?;
//!     assert!(matches!(restored, ModelArtifact::Placeholder { .. }));
//!     Ok(())
//! }
//! ```

pub mod model;
pub mod store;

pub use model::{ModelArtifact, PLACEHOLDER_DESCRIPTION};
pub use store::{ArtifactEnvelope, ArtifactStore, FORMAT_VERSION};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during artifact operations.
///
/// Missing and unreadable artifacts are distinct variants so callers can
/// react differently (retrain on [`ArtifactError::NotFound`], alert on
/// [`ArtifactError::Corrupted`]).
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// I/O error during artifact operations.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Artifact file not found.
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),

    /// Error while serializing an artifact for writing.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The artifact file exists but does not decode as an envelope.
    #[error("Corrupted artifact: {0}")]
    Corrupted(String),

    /// The envelope decodes but carries an unsupported format version.
    #[error("Artifact version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version this build reads and writes.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },
}

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;
