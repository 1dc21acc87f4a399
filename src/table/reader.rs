//! CSV loading into the in-memory table model

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use super::model::{Table, Value};

/// Errors raised while loading a table from disk.
#[derive(Debug)]
pub enum TableError {
    /// The file could not be opened or read.
    Io { path: PathBuf, error: String },
    /// The file was read but is not well-formed CSV.
    Malformed { path: PathBuf, error: String },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io { path, error } => {
                write!(f, "cannot read {}: {error}", path.display())
            }
            TableError::Malformed { path, error } => {
                write!(f, "malformed CSV in {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Load a CSV file into a `Table`.
///
/// Headers are taken verbatim: no trimming, no normalization. Survey
/// exports carry Arabic headers, some with significant leading spaces,
/// and column resolution matches them byte-for-byte.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, TableError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut reader = ReaderBuilder::new().trim(csv::Trim::None).from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::Malformed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TableError::Malformed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        rows.push(record.iter().map(Value::from_field).collect());
    }

    Ok(Table::new(columns, rows))
}
