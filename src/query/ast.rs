//! Clause AST
//!
//! Defines the parsed forms of the three clause grammars csvsift accepts:
//!
//! ```text
//! --where     "price > 100"     (comparison clause)
//! --aggregate "price=avg"       (assignment clause)
//! --order-by  "rating=desc"     (order clause)
//! ```
//!
//! Operators and aggregation functions are immutable enums with their
//! comparison/evaluation logic attached; the engines consume these types
//! and never carry lookup state of their own.

use serde::{Deserialize, Serialize};

/// A parsed comparison clause like `price > 100`
///
/// The literal stays a string here; numeric coercion happens in the
/// filter engine, not at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// Field to compare
    pub field: String,
    /// Comparison operator
    pub op: Operator,
    /// Right-hand literal, still raw
    pub value: String,
}

/// A parsed assignment clause like `price=avg`
///
/// The function name is trimmed and lowercased but not validated; the
/// aggregation entry points own validation (non-fatally in global mode,
/// fatally in grouped mode).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateClause {
    /// Field to aggregate
    pub field: String,
    /// Lowercased function name, possibly unrecognized
    pub func: String,
}

/// A parsed order clause like `rating=desc`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: Direction,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal to
    Eq,
    /// Not equal to
    Ne,
    /// Greater than
    Gt,
    /// Greater than or equal to
    Gte,
    /// Less than
    Lt,
    /// Less than or equal to
    Lte,
}

impl Operator {
    /// Compare two i64 values
    pub fn compare_i64(&self, a: i64, b: i64) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Gt => a > b,
            Self::Gte => a >= b,
            Self::Lt => a < b,
            Self::Lte => a <= b,
        }
    }

    /// Compare two f64 values
    pub fn compare_f64(&self, a: f64, b: f64) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Gt => a > b,
            Self::Gte => a >= b,
            Self::Lt => a < b,
            Self::Lte => a <= b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eq => write!(f, "=="),
            Self::Ne => write!(f, "!="),
            Self::Gt => write!(f, ">"),
            Self::Gte => write!(f, ">="),
            Self::Lt => write!(f, "<"),
            Self::Lte => write!(f, "<="),
        }
    }
}

/// Aggregation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunc {
    /// Sum of values
    Sum,
    /// Average of values
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Count of values
    Count,
}

impl AggregateFunc {
    /// Parse from a lowercased function name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sum" => Some(Self::Sum),
            "avg" => Some(Self::Avg),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "count" => Some(Self::Count),
            _ => None,
        }
    }

    /// Lowercase function name, as written in clauses
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Count => "count",
        }
    }

    /// Apply aggregation to a slice of values
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        Some(match self {
            Self::Sum => values.iter().sum(),
            Self::Avg => values.iter().sum::<f64>() / values.len() as f64,
            Self::Min => values.iter().cloned().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            Self::Count => values.len() as f64,
        })
    }
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sum => write!(f, "SUM"),
            Self::Avg => write!(f, "AVG"),
            Self::Min => write!(f, "MIN"),
            Self::Max => write!(f, "MAX"),
            Self::Count => write!(f, "COUNT"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl Direction {
    /// Parse from a lowercased direction token
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}
