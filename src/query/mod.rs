//! csvsift query engine
//!
//! The query pipeline over in-memory rows:
//!
//! - **AST**: parsed clause types, operators, aggregation functions
//! - **Parser**: the three clause grammars
//! - **Filter / Sort / Aggregate**: the row-set engines
//! - **Executor**: the fixed filter → sort → aggregate pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use csvsift::query::{run_query, QueryRequest};
//!
//! let request = QueryRequest {
//!     where_clause: Some("price>100".to_string()),
//!     aggregate: Some("price=avg".to_string()),
//!     ..Default::default()
//! };
//! let output = run_query(rows, &request)?;
//! ```

mod aggregate;
mod ast;
mod error;
mod executor;
mod filter;
mod parser;
mod sort;

pub use aggregate::{
    aggregate_rows, group_aggregate, AggregateOutcome, AggregateResult, GroupedAggregate,
};
pub use ast::{AggregateClause, AggregateFunc, Direction, Operator, OrderByClause, WhereClause};
pub use error::{QueryError, QueryResult};
pub use executor::{run_query, PipelineOutput, QueryRequest};
pub use filter::filter_rows;
pub use parser::{parse_aggregate_clause, parse_order_by_clause, parse_where_clause};
pub use sort::sort_rows;
