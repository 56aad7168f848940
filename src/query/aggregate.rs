//! Aggregation engine
//!
//! Two entry points with deliberately different strictness:
//!
//! - [`aggregate_rows`] (global mode) collects the field's values across
//!   the whole set, silently skipping rows where the field is absent or
//!   non-numeric, and reports "no data" or an unsupported function name
//!   as ordinary outcomes.
//! - [`group_aggregate`] (grouped mode) coerces every row
//!   unconditionally: a missing group or value field and a non-numeric
//!   value are fatal, as is an unrecognized function name.
//!
//! The asymmetry is part of the contract and pinned by tests; callers
//! must not expect the two modes to degrade the same way.

use indexmap::IndexMap;
use serde::Serialize;

use crate::query::ast::AggregateFunc;
use crate::query::error::{QueryError, QueryResult};
use crate::query::parser::parse_aggregate_clause;
use crate::rows::RowSet;

/// A computed global aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Field the values came from
    pub field: String,
    /// Function applied
    pub func: AggregateFunc,
    /// Numeric result
    pub value: f64,
}

/// Outcome of global aggregation
///
/// The non-numeric outcomes are ordinary results, not errors; the
/// pipeline continues after reporting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregateOutcome {
    /// Aggregate computed over at least one numeric value
    Computed(AggregateResult),
    /// No numeric values to aggregate over
    NoData,
    /// Function name not recognized
    Unsupported { func: String },
}

/// Grouped aggregates in first-seen key order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedAggregate {
    /// Field whose distinct values key the groups
    pub group_field: String,
    /// Field the aggregated values came from
    pub field: String,
    /// Function applied per group
    pub func: AggregateFunc,
    /// Group key to numeric aggregate, ordered by first encounter
    pub groups: IndexMap<String, f64>,
}

/// Compute a single aggregate over the whole row set
///
/// Rows whose field is absent or fails numeric coercion are skipped, so
/// `count` counts the coerced values, not the rows scanned.
pub fn aggregate_rows(set: &RowSet, clause: &str) -> QueryResult<AggregateOutcome> {
    let clause = parse_aggregate_clause(clause)?;

    let values: Vec<f64> = set
        .rows
        .iter()
        .filter_map(|row| row.get(&clause.field))
        .filter_map(|raw| raw.trim().parse::<f64>().ok())
        .collect();

    // An empty collection is reported before the function name is even
    // looked at
    if values.is_empty() {
        tracing::debug!("No numeric values in '{}' to aggregate", clause.field);
        return Ok(AggregateOutcome::NoData);
    }

    let func = match AggregateFunc::from_str(&clause.func) {
        Some(func) => func,
        None => {
            return Ok(AggregateOutcome::Unsupported {
                func: clause.func.clone(),
            })
        }
    };

    let value = match func.apply(&values) {
        Some(value) => value,
        None => return Ok(AggregateOutcome::NoData),
    };

    tracing::debug!(
        "{}({}) over {} values = {}",
        func,
        clause.field,
        values.len(),
        value
    );

    Ok(AggregateOutcome::Computed(AggregateResult {
        field: clause.field,
        func,
        value,
    }))
}

/// Compute per-group aggregates, bucketed by the group field's raw value
///
/// Every row must carry both fields and a numeric value; group order is
/// first encounter.
pub fn group_aggregate(
    set: &RowSet,
    group_field: &str,
    clause: &str,
) -> QueryResult<GroupedAggregate> {
    let clause = parse_aggregate_clause(clause)?;

    // Unlike global mode, the function name is validated before any row
    // is touched
    let func = AggregateFunc::from_str(&clause.func)
        .ok_or_else(|| QueryError::UnknownAggregate(clause.func.clone()))?;

    let mut buckets: IndexMap<String, Vec<f64>> = IndexMap::new();
    for row in &set.rows {
        let key = row
            .get(group_field)
            .ok_or_else(|| QueryError::MissingField(group_field.to_string()))?;
        let raw = row
            .get(&clause.field)
            .ok_or_else(|| QueryError::MissingField(clause.field.clone()))?;
        let value = raw.trim().parse::<f64>().map_err(|_| QueryError::Conversion {
            field: clause.field.clone(),
            value: raw.clone(),
        })?;

        buckets.entry(key.clone()).or_default().push(value);
    }

    let mut groups = IndexMap::new();
    for (key, values) in buckets {
        // Buckets are non-empty by construction
        if let Some(value) = func.apply(&values) {
            groups.insert(key, value);
        }
    }

    tracing::debug!(
        "Grouped {}({}) by '{}' into {} groups",
        func,
        clause.field,
        group_field,
        groups.len()
    );

    Ok(GroupedAggregate {
        group_field: group_field.to_string(),
        field: clause.field,
        func,
        groups,
    })
}
