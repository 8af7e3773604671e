//! Atomic artifact persistence.
//!
//! Writes go to a temporary file in the destination directory followed by a
//! rename, so a crash mid-write can never leave a truncated artifact at the
//! target path. The envelope carries no timestamps; saving the same model
//! twice produces byte-identical files.

use crate::model::ModelArtifact;
use crate::{ArtifactError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Envelope format version this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// The versioned on-disk record wrapping a [`ModelArtifact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactEnvelope {
    /// Format version for forward compatibility.
    pub format_version: u32,

    /// The model payload.
    pub model: ModelArtifact,
}

impl ArtifactEnvelope {
    /// Wrap a model in a current-version envelope.
    pub fn new(model: ModelArtifact) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            model,
        }
    }
}

/// Save and load model artifacts as versioned JSON files.
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    /// Whether to pretty-print JSON output.
    pretty: bool,
}

impl ArtifactStore {
    /// Create a store writing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a store writing pretty-printed JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Save a model to `path`, overwriting any existing artifact.
    ///
    /// Parent directories are created as needed. The write is atomic:
    /// serialize to a temp file in the same directory, then rename.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or I/O fails.
    pub fn save(&self, path: &Path, model: &ModelArtifact) -> Result<()> {
        tracing::info!(path = %path.display(), kind = model.kind(), "Saving artifact");

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| ArtifactError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;

        let envelope = ArtifactEnvelope::new(model.clone());
        let data = if self.pretty {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        }
        .map_err(ArtifactError::Serialization)?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| ArtifactError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        tmp.write_all(&data).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tmp.persist(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Artifact saved");

        Ok(())
    }

    /// Load a model from `path`, checking the envelope version.
    ///
    /// # Errors
    ///
    /// - [`ArtifactError::NotFound`] if no file exists at `path`
    /// - [`ArtifactError::Corrupted`] if the file does not decode as an
    ///   envelope
    /// - [`ArtifactError::VersionMismatch`] if the envelope carries an
    ///   unsupported format version
    pub fn load(&self, path: &Path) -> Result<ModelArtifact> {
        tracing::info!(path = %path.display(), "Loading artifact");

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let envelope: ArtifactEnvelope = serde_json::from_slice(&data)
            .map_err(|e| ArtifactError::Corrupted(e.to_string()))?;

        if envelope.format_version != FORMAT_VERSION {
            return Err(ArtifactError::VersionMismatch {
                expected: FORMAT_VERSION,
                found: envelope.format_version,
            });
        }

        tracing::debug!(
            path = %path.display(),
            kind = envelope.model.kind(),
            "Artifact loaded"
        );

        Ok(envelope.model)
    }
}
