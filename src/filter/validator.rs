//! # Filter Validator
//!
//! Parses the raw `filters` query parameter into a typed [`FilterSet`].
//!
//! Validation is fail-closed: a single bad clause rejects the whole set.
//! An empty array is accepted and filters nothing.

use serde_json::{Map, Value};

use super::clause::{Comparator, FilterClause, FilterSet, FilterValue};
use super::errors::{FilterError, FilterResult};

/// The `filters` parameter as received from the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFilterParam {
    /// Parameter given once
    Single(String),

    /// Parameter repeated; only the first occurrence is honored
    Repeated(Vec<String>),
}

impl RawFilterParam {
    /// Build from every occurrence of the parameter, in request order
    pub fn from_occurrences(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(RawFilterParam::Single),
            _ => Some(RawFilterParam::Repeated(values)),
        }
    }

    /// The occurrence that is interpreted
    pub fn first(&self) -> Option<&str> {
        match self {
            RawFilterParam::Single(s) => Some(s.as_str()),
            RawFilterParam::Repeated(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for RawFilterParam {
    fn from(s: &str) -> Self {
        RawFilterParam::Single(s.to_string())
    }
}

/// Validate a raw filter parameter
pub fn validate(raw: &RawFilterParam) -> FilterResult<FilterSet> {
    match raw.first() {
        Some(text) if !text.is_empty() => validate_str(text),
        _ => Err(FilterError::Missing),
    }
}

/// Validate an encoded JSON array of clauses
pub fn validate_str(text: &str) -> FilterResult<FilterSet> {
    let parsed: Value = serde_json::from_str(text)?;
    let items = parsed.as_array().ok_or(FilterError::NotAnArray)?;

    let clauses = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_clause(index, item))
        .collect::<FilterResult<Vec<_>>>()?;

    Ok(FilterSet { clauses })
}

fn parse_clause(index: usize, item: &Value) -> FilterResult<FilterClause> {
    let obj = item
        .as_object()
        .ok_or_else(|| FilterError::clause(index, "clause must be an object"))?;

    let condition = obj
        .get("condition")
        .and_then(Value::as_str)
        .and_then(Comparator::parse)
        .ok_or_else(|| FilterError::clause(index, "unrecognized condition"))?;

    let id = match obj.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(FilterError::clause(index, "id must be non-empty text")),
    };

    let value = parse_value(obj).ok_or_else(|| {
        FilterError::clause(index, "value must be non-empty text or a nonzero number")
    })?;

    Ok(FilterClause {
        id,
        condition,
        value,
    })
}

// Zero and empty text are indistinguishable from a missing value here.
fn parse_value(obj: &Map<String, Value>) -> Option<FilterValue> {
    let value = match obj.get("value")? {
        Value::String(s) => FilterValue::Text(s.clone()),
        Value::Number(n) => FilterValue::Number(n.clone()),
        _ => return None,
    };
    (!value.is_falsy()).then_some(value)
}
