//! Prediction request shapes.
//!
//! Requests arrive as JSON in one of two shapes and deserialize into an
//! explicit union, so downstream dispatch matches on variants instead of
//! probing mapping keys:
//!
//! - tabular batch: `{"columns": ["temperature"], "rows": [[15.0], [16.0]]}`
//! - scalar mapping: `{"current_demand": 75}`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A batch of feature rows with named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularBatch {
    /// Feature column names.
    pub columns: Vec<String>,

    /// Feature rows; each row has one value per column.
    pub rows: Vec<Vec<f64>>,
}

impl TabularBatch {
    /// Create a batch from columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the batch contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A prediction request: either a tabular batch or a single scalar mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionRequest {
    /// Rows × feature-columns.
    Batch(TabularBatch),

    /// A flat mapping such as `{"current_demand": 75}`.
    Scalar(BTreeMap<String, f64>),
}

impl PredictionRequest {
    /// Build a tabular batch request.
    pub fn batch(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self::Batch(TabularBatch::new(columns, rows))
    }

    /// Build a scalar mapping request from key/value pairs.
    pub fn scalar<K: Into<String>>(entries: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self::Scalar(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
