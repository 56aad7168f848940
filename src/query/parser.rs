//! Clause parsers
//!
//! Parses the raw option strings into clause AST nodes.
//!
//! # Supported Syntax
//!
//! ```text
//! comparison clause:  field <op> literal     op: >= <= == != > <
//! assignment clause:  field=function         function name unvalidated here
//! order clause:       field=asc|desc
//! ```
//!
//! Whitespace around the field and the literal is not required and is
//! trimmed when present, so `"price > 100"` and `"price>100"` parse the
//! same.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::rest,
    sequence::separated_pair,
    IResult,
};

use crate::query::ast::{AggregateClause, Direction, Operator, OrderByClause, WhereClause};
use crate::query::error::{QueryError, QueryResult};

/// Parse a comparison clause like `"price > 100"` or `"rating>=4.5"`
///
/// The first operator token that occurs in the string wins, searched in
/// priority order rather than by position, so `"x>=1"` always parses as
/// `>=` and never as `>` followed by a stray `=`.
pub fn parse_where_clause(input: &str) -> QueryResult<WhereClause> {
    match comparison_clause(input) {
        Ok((_, clause)) => Ok(clause),
        Err(_) => Err(QueryError::Format(format!(
            "no comparison operator in '{}', expected e.g. 'price > 100'",
            input
        ))),
    }
}

/// Parse an assignment clause like `"price=avg"`
///
/// The function name is trimmed and lowercased but deliberately left
/// unvalidated; the aggregation entry points decide how to treat an
/// unrecognized name.
pub fn parse_aggregate_clause(input: &str) -> QueryResult<AggregateClause> {
    match key_value(input) {
        Ok((_, (field, func))) => Ok(AggregateClause {
            field: field.trim().to_string(),
            func: func.trim().to_lowercase(),
        }),
        Err(_) => Err(QueryError::Format(format!(
            "expected 'field=function' in '{}', e.g. 'price=avg'",
            input
        ))),
    }
}

/// Parse an order clause like `"rating=desc"`
pub fn parse_order_by_clause(input: &str) -> QueryResult<OrderByClause> {
    let (field, direction) = match key_value(input) {
        Ok((_, parts)) => parts,
        Err(_) => {
            return Err(QueryError::Format(format!(
                "expected 'field=asc' or 'field=desc' in '{}'",
                input
            )))
        }
    };

    let token = direction.trim().to_lowercase();
    let direction = Direction::from_str(&token).ok_or_else(|| {
        QueryError::Format(format!(
            "sort direction must be 'asc' or 'desc', got '{}'",
            token
        ))
    })?;

    Ok(OrderByClause {
        field: field.trim().to_string(),
        direction,
    })
}

/// Try the operator tokens in priority order, longest first, so that
/// `>=` and `<=` are never misread as `>` or `<`.
fn comparison_clause(input: &str) -> IResult<&str, WhereClause> {
    alt((
        operator_clause(">=", Operator::Gte),
        operator_clause("<=", Operator::Lte),
        operator_clause("==", Operator::Eq),
        operator_clause("!=", Operator::Ne),
        operator_clause(">", Operator::Gt),
        operator_clause("<", Operator::Lt),
    ))(input)
}

/// Split the input at the first occurrence of one operator token
fn operator_clause(
    token: &'static str,
    op: Operator,
) -> impl Fn(&str) -> IResult<&str, WhereClause> {
    move |input| {
        let (remaining, (field, value)) =
            separated_pair(take_until(token), tag(token), rest)(input)?;
        Ok((
            remaining,
            WhereClause {
                field: field.trim().to_string(),
                op,
                value: value.trim().to_string(),
            },
        ))
    }
}

/// Split the input at the first `=`
fn key_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_until("="), tag("="), rest)(input)
}
