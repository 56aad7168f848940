//! Row model
//!
//! Rows are string-valued mappings exactly as read from the source file;
//! numeric coercion happens at the point of use (filter, sort, aggregate),
//! never at load time. A [`RowSet`] couples the rows with the header list
//! that fixes column order for rendering.

use serde::Serialize;
use std::collections::HashMap;

/// One record from the source data, field name to raw string value
pub type Row = HashMap<String, String>;

/// An ordered sequence of rows plus the header-derived field order
///
/// Order is meaningful: sorting reorders it, every other pipeline stage
/// preserves it. All rows nominally share the header field set, but a row
/// may lack trailing fields when the source record was short.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSet {
    /// Column names in source order
    pub headers: Vec<String>,
    /// Rows in source (or sorted) order
    pub rows: Vec<Row>,
}

impl RowSet {
    /// Create a row set from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project onto the requested fields, in request order
    ///
    /// Headers keep the requested fields that exist in this set's header
    /// list; each row keeps the requested fields it actually has. Fields
    /// a row lacks are dropped from that row, not padded.
    pub fn project(&self, fields: &[String]) -> Self {
        let headers: Vec<String> = fields
            .iter()
            .filter(|f| self.headers.contains(f))
            .cloned()
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                fields
                    .iter()
                    .filter_map(|f| row.get(f).map(|v| (f.clone(), v.clone())))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }
}
