//! Sort engine
//!
//! Stable single-field ordering, numeric-aware. Each row's key is the
//! field value as a float when it parses, the original string otherwise.
//! Numeric keys order before string keys ascending; descending reverses
//! the comparator rather than the rows, so ties keep their original
//! relative order in both directions.

use std::cmp::Ordering;

use crate::query::ast::Direction;
use crate::query::error::{QueryError, QueryResult};
use crate::query::parser::parse_order_by_clause;
use crate::rows::{Row, RowSet};

/// Sort key for one row
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn from_raw(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Numeric keys order before string keys; incomparable float pairs
    /// compare equal so the sort stays stable
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

/// Sort a row set in place by a raw order clause like `"rating=desc"`
///
/// Keys are computed for every row before any reordering, so a row
/// missing the sort field fails with the set untouched.
pub fn sort_rows(set: &mut RowSet, clause: &str) -> QueryResult<()> {
    let clause = parse_order_by_clause(clause)?;

    let mut keys = Vec::with_capacity(set.len());
    for row in &set.rows {
        let raw = row
            .get(&clause.field)
            .ok_or_else(|| QueryError::MissingField(clause.field.clone()))?;
        keys.push(SortKey::from_raw(raw));
    }

    let mut keyed: Vec<(SortKey, Row)> = keys.into_iter().zip(set.rows.drain(..)).collect();
    keyed.sort_by(|(a, _), (b, _)| match clause.direction {
        Direction::Asc => a.compare(b),
        Direction::Desc => b.compare(a),
    });
    set.rows.extend(keyed.into_iter().map(|(_, row)| row));

    tracing::debug!(
        "Sorted {} rows by '{}' {}",
        set.len(),
        clause.field,
        clause.direction
    );

    Ok(())
}
