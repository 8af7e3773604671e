//! Historical demand records and dataset I/O for demandcast.
//!
//! This crate provides:
//!
//! - [`TrainingRecord`]: one row of historical demand data
//! - [`read_records`] / [`write_records`]: CSV I/O for the demand data file
//! - [`ensure_sample_data`]: bootstrap a sample data file for the examples
//! - [`builtin_records`]: the fixed fallback table used when no data file
//!   is available
//!
//! # Example
//!
//! ```no_run
//! use demandcast_data::{ensure_sample_data, read_records};
//! use std::path::Path;
//!
//! fn main() -> Result<(), demandcast_data::DataError> {
//!     let path = Path::new("data/historical_demand.csv");
//!     ensure_sample_data(path)?;
//!     let records = read_records(path)?;
//!     println!("loaded {} records", records.len());
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod record;

pub use dataset::{ensure_sample_data, read_records, write_records};
pub use record::{builtin_records, sample_records, TrainingRecord};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing demand data.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while touching the data file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("CSV error at {path}: {source}")]
    Csv {
        /// Path of the file being parsed or written.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
