//! CSV source
//!
//! Loads a delimited file into a [`RowSet`]. Headers come from the first
//! record; every value stays the raw string the reader produced, with no
//! type inference.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::rows::{Row, RowSet};

/// Errors that can occur while loading rows
#[derive(Error, Debug)]
pub enum SourceError {
    /// Underlying file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load rows from a delimited file
pub fn load_rows(path: &Path, delimiter: u8) -> Result<RowSet, SourceError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    read_rows(reader)
}

/// Load rows from any reader (useful for testing)
pub fn load_rows_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<RowSet, SourceError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    read_rows(reader)
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<RowSet, SourceError> {
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Zipping drops surplus values; short records leave trailing
        // fields absent from the row.
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!("Loaded {} rows with {} columns", rows.len(), headers.len());

    Ok(RowSet::new(headers, rows))
}
