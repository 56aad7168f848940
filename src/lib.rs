//! # csvsift
//!
//! Command-line CSV query tool - filter, sort, project and aggregate
//! delimited files from the terminal.
//!
//! ## Features
//!
//! - **Single-condition filters**: `price>100`, `rating>=4.5`, with
//!   integer/float coercion matching the literal's shape
//! - **Sorting**: numeric keys where values parse as numbers, string
//!   keys otherwise, stable in both directions
//! - **Aggregation**: sum, avg, min, max, count - globally or grouped
//!   by a field, groups reported in first-seen order
//! - **Projection**: keep only a chosen subset of columns
//! - **Three output formats**: colored table, JSON, raw CSV
//!
//! ## Modules
//!
//! - [`query`]: clause parsers and the filter/sort/aggregate engines
//! - [`source`]: delimited-file loading into row sets
//! - [`render`]: table/JSON/CSV output
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csvsift::query::{run_query, QueryRequest};
//! use csvsift::source::load_rows;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load a comma-delimited file
//!     let rows = load_rows("products.csv".as_ref(), b',')?;
//!
//!     // Rows with price > 100, best rating first, grouped averages
//!     let request = QueryRequest {
//!         where_clause: Some("price>100".to_string()),
//!         order_by: Some("rating=desc".to_string()),
//!         aggregate: Some("price=avg".to_string()),
//!         group_by: Some("brand".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let output = run_query(rows, &request)?;
//!     println!("{} rows matched", output.rows.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod query;
pub mod render;
pub mod rows;
pub mod source;

// Re-export top-level types for convenience
pub use query::{
    run_query, AggregateFunc, AggregateOutcome, AggregateResult, Direction, GroupedAggregate,
    Operator, PipelineOutput, QueryError, QueryRequest, QueryResult,
};

pub use rows::{Row, RowSet};

pub use source::{load_rows, load_rows_from_reader, SourceError};

pub use config::{Config, ConfigError, LoggingConfig, OutputConfig};

pub use console::Console;

pub use render::{RenderError, Renderer};
