//! Pipeline orchestrator
//!
//! Runs the fixed query pipeline over an already-loaded row set:
//!
//! ```text
//! filter → sort → global aggregate → projection → grouped aggregate
//! ```
//!
//! The stage order is not reorderable by options; skipping a stage only
//! requires leaving its option unset. Engines are pure: everything a run
//! produces lands in a [`PipelineOutput`] and the renderer decides how to
//! print it, so any clause error aborts before output is emitted.

use serde::Serialize;

use crate::query::aggregate::{
    aggregate_rows, group_aggregate, AggregateOutcome, GroupedAggregate,
};
use crate::query::error::QueryResult;
use crate::query::filter::filter_rows;
use crate::query::sort::sort_rows;
use crate::rows::RowSet;

/// The raw option strings driving one pipeline run
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Comparison clause from `--where`
    pub where_clause: Option<String>,
    /// Order clause from `--order-by`
    pub order_by: Option<String>,
    /// Assignment clause from `--aggregate`
    pub aggregate: Option<String>,
    /// Projection field list from `--select`
    pub select: Option<Vec<String>>,
    /// Group field from `--groupby`
    pub group_by: Option<String>,
}

/// Everything one pipeline run produced, in rendering order
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// The filtered and sorted working set
    pub rows: RowSet,
    /// Global aggregate outcome, when an aggregate clause was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<AggregateOutcome>,
    /// Projected rows, when a field list was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<RowSet>,
    /// Grouped aggregates, only when both a group field and an aggregate
    /// clause were given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped: Option<GroupedAggregate>,
}

/// Run the fixed pipeline over a loaded row set
pub fn run_query(rows: RowSet, request: &QueryRequest) -> QueryResult<PipelineOutput> {
    let mut rows = rows;

    if let Some(clause) = &request.where_clause {
        rows = filter_rows(&rows, clause)?;
    }

    if let Some(clause) = &request.order_by {
        sort_rows(&mut rows, clause)?;
    }

    let aggregate = match &request.aggregate {
        Some(clause) => Some(aggregate_rows(&rows, clause)?),
        None => None,
    };

    let projected = request.select.as_ref().map(|fields| rows.project(fields));

    // Grouped aggregation needs both options and always reads the
    // unprojected working set
    let grouped = match (&request.group_by, &request.aggregate) {
        (Some(group_field), Some(clause)) => Some(group_aggregate(&rows, group_field, clause)?),
        _ => None,
    };

    Ok(PipelineOutput {
        rows,
        aggregate,
        projected,
        grouped,
    })
}
