//! CSV ingestion of (name, count) tables
//!
//! The input is a headerless comma-delimited table of organization names and
//! publication counts, assumed to be pre-sorted by descending count. Only the
//! first [`ROW_LIMIT`] distinct names are kept. Malformed rows are fatal
//! here, at the boundary, so the core pipeline never sees them.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of distinct names read from an input table.
pub const ROW_LIMIT: usize = 400;

/// One input row: an organization name and its publication count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

impl NameCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Errors that can occur while reading an input table
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Row {row} is missing the count field")]
    MissingCount { row: usize },

    #[error("Row {row} has a non-integer count '{value}'")]
    BadCount { row: usize, value: String },
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Read `(name, count)` rows from a headerless CSV file, keeping at most
/// [`ROW_LIMIT`] distinct names.
pub fn read_name_counts(path: impl AsRef<Path>) -> IngestResult<Vec<NameCount>> {
    read_name_counts_limited(path, ROW_LIMIT)
}

/// Read `(name, count)` rows with an explicit limit on distinct names.
///
/// Input order is preserved and never re-sorted. A name appearing more than
/// once keeps its first position but takes the count of its last occurrence
/// (last write wins); this is documented behavior, not an error.
pub fn read_name_counts_limited(
    path: impl AsRef<Path>,
    limit: usize,
) -> IngestResult<Vec<NameCount>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path).map_err(|e| IngestError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut entries: Vec<NameCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| IngestError::InvalidRecord {
            row,
            message: e.to_string(),
        })?;
        let name = record.get(0).unwrap_or("").to_string();
        let value = record.get(1).ok_or(IngestError::MissingCount { row })?;
        let count: u64 = value.trim().parse().map_err(|_| IngestError::BadCount {
            row,
            value: value.to_string(),
        })?;
        match positions.get(&name) {
            Some(&at) => entries[at].count = count,
            None => {
                if entries.len() >= limit {
                    break;
                }
                positions.insert(name.clone(), entries.len());
                entries.push(NameCount::new(name, count));
            }
        }
    }
    Ok(entries)
}
