//! Query error types
//!
//! Defines all error conditions that can occur during clause parsing and
//! pipeline execution.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Malformed clause string (missing operator, missing `=`, bad direction)
    #[error("Malformed clause: {0}")]
    Format(String),

    /// A value could not be coerced to the numeric type a clause requires
    #[error("Cannot convert '{value}' in field '{field}' to a number")]
    Conversion { field: String, value: String },

    /// A row lacks a field the clause requires to be present
    #[error("Row is missing field '{0}'")]
    MissingField(String),

    /// Unrecognized aggregation function in grouped mode
    #[error("Unknown aggregation function '{0}'")]
    UnknownAggregate(String),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
