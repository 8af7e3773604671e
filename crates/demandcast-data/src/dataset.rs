//! CSV I/O for the historical demand data file.
//!
//! The data file uses the columns `timestamp,demand,temperature,price`. The
//! reader does not validate feature semantics (ranges, monotonic dates);
//! rows only need to parse into [`TrainingRecord`].

use crate::record::{sample_records, TrainingRecord};
use crate::{DataError, Result};
use std::path::Path;

/// Read all demand records from a CSV file.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be opened and
/// [`DataError::Csv`] if any row fails to parse.
pub fn read_records(path: &Path) -> Result<Vec<TrainingRecord>> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(file));
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TrainingRecord = row.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "Demand data read");

    Ok(records)
}

/// Write demand records to a CSV file, creating parent directories as needed.
pub fn write_records(path: &Path, records: &[TrainingRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DataError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_writer(std::io::BufWriter::new(file));
    for record in records {
        writer.serialize(record).map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "Demand data written");

    Ok(())
}

/// Write the five-row sample dataset to `path` if no file exists there.
///
/// Returns `true` if the sample file was created, `false` if a file was
/// already present.
pub fn ensure_sample_data(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    write_records(path, &sample_records())?;
    tracing::info!(path = %path.display(), "Created sample demand data file");
    Ok(true)
}
