//! Filter engine
//!
//! Applies a comparison clause to a row set. The literal is coerced once,
//! integer when it carries no decimal point and float otherwise; each
//! row's field value follows the same rule but is promoted to float
//! whenever the literal is float. Rows missing the field are excluded
//! without error; a value that fails coercion is fatal.

use crate::query::ast::WhereClause;
use crate::query::error::{QueryError, QueryResult};
use crate::query::parser::parse_where_clause;
use crate::rows::RowSet;

/// Numeric form of the comparison literal
enum Literal {
    Int(i64),
    Float(f64),
}

/// Filter a row set by a raw comparison clause like `"price > 100"`
///
/// Returns a new row set preserving input order; the input is not
/// mutated.
pub fn filter_rows(set: &RowSet, clause: &str) -> QueryResult<RowSet> {
    let clause = parse_where_clause(clause)?;
    let literal = coerce_literal(&clause)?;

    let mut rows = Vec::new();
    for row in &set.rows {
        // A row without the field is excluded, not an error
        let raw = match row.get(&clause.field) {
            Some(raw) => raw,
            None => continue,
        };
        if matches(&clause, raw, &literal)? {
            rows.push(row.clone());
        }
    }

    tracing::debug!(
        "Filter {} {} {} kept {} of {} rows",
        clause.field,
        clause.op,
        clause.value,
        rows.len(),
        set.len()
    );

    Ok(RowSet::new(set.headers.clone(), rows))
}

/// Coerce the clause literal: integer without a decimal point, float with
fn coerce_literal(clause: &WhereClause) -> QueryResult<Literal> {
    let conversion = || QueryError::Conversion {
        field: clause.field.clone(),
        value: clause.value.clone(),
    };

    if clause.value.contains('.') {
        clause
            .value
            .trim()
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| conversion())
    } else {
        clause
            .value
            .trim()
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| conversion())
    }
}

/// Evaluate the clause operator against one row value
fn matches(clause: &WhereClause, raw: &str, literal: &Literal) -> QueryResult<bool> {
    let result = match literal {
        Literal::Float(lit) => {
            let value = parse_f64(raw, &clause.field)?;
            clause.op.compare_f64(value, *lit)
        }
        Literal::Int(lit) => {
            // A row value with a decimal point promotes the comparison
            // to float even against an integer literal
            if raw.contains('.') {
                let value = parse_f64(raw, &clause.field)?;
                clause.op.compare_f64(value, *lit as f64)
            } else {
                let value = raw.trim().parse::<i64>().map_err(|_| QueryError::Conversion {
                    field: clause.field.clone(),
                    value: raw.to_string(),
                })?;
                clause.op.compare_i64(value, *lit)
            }
        }
    };

    Ok(result)
}

fn parse_f64(raw: &str, field: &str) -> QueryResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| QueryError::Conversion {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::Row;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn price_rows(prices: &[&str]) -> RowSet {
        let rows = prices.iter().map(|&p| row(&[("price", p)])).collect();
        RowSet::new(vec!["price".to_string()], rows)
    }

    #[test]
    fn test_filter_gt_preserves_order() {
        let set = price_rows(&["50", "100", "200", "300", "400", "500", "600", "700"]);

        let filtered = filter_rows(&set, "price>100").unwrap();

        let prices: Vec<&str> = filtered.rows.iter().map(|r| r["price"].as_str()).collect();
        assert_eq!(prices, vec!["200", "300", "400", "500", "600", "700"]);
        assert_eq!(filtered.headers, set.headers);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let set = price_rows(&["50", "200"]);
        let before = set.clone();

        let _ = filter_rows(&set, "price>100").unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn test_filter_float_literal() {
        let set = price_rows(&["99", "100"]);

        let filtered = filter_rows(&set, "price>99.5").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0]["price"], "100");
    }

    #[test]
    fn test_filter_float_row_value_promotes() {
        // Integer literal, but the row value has a decimal point
        let set = price_rows(&["100.5", "99.5"]);

        let filtered = filter_rows(&set, "price>100").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0]["price"], "100.5");
    }

    #[test]
    fn test_filter_equality_operators() {
        let set = price_rows(&["100", "200"]);

        let eq = filter_rows(&set, "price==200").unwrap();
        assert_eq!(eq.len(), 1);

        let ne = filter_rows(&set, "price!=200").unwrap();
        assert_eq!(ne.len(), 1);
        assert_eq!(ne.rows[0]["price"], "100");
    }

    #[test]
    fn test_filter_missing_field_is_skipped() {
        let set = RowSet::new(
            vec!["name".to_string(), "price".to_string()],
            vec![row(&[("name", "TV"), ("price", "150")]), row(&[("name", "Phone")])],
        );

        let filtered = filter_rows(&set, "price>100").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0]["name"], "TV");
    }

    #[test]
    fn test_filter_non_numeric_row_value_is_fatal() {
        let set = price_rows(&["150", "abc"]);

        let result = filter_rows(&set, "price>100");
        assert!(matches!(result, Err(QueryError::Conversion { .. })));
    }

    #[test]
    fn test_filter_non_numeric_literal_is_fatal() {
        let set = price_rows(&["150"]);

        let result = filter_rows(&set, "price>cheap");
        assert!(matches!(result, Err(QueryError::Conversion { .. })));
    }

    #[test]
    fn test_filter_malformed_clause_propagates() {
        let set = price_rows(&["150"]);

        let result = filter_rows(&set, "not a clause");
        assert!(matches!(result, Err(QueryError::Format(_))));
    }
}
