//! # Filter Clauses
//!
//! Typed representation of a client filter expression.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Comparison applied between a question value and a clause target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Equals
    #[serde(rename = "equals")]
    Equals,

    /// Not equals
    #[serde(rename = "does_not_equal")]
    NotEqual,

    /// Greater than
    #[serde(rename = "greater_than")]
    GreaterThan,

    /// Less than
    #[serde(rename = "less_than")]
    LessThan,
}

impl Comparator {
    /// Every recognized comparator
    pub const ALL: [Comparator; 4] = [
        Comparator::Equals,
        Comparator::NotEqual,
        Comparator::GreaterThan,
        Comparator::LessThan,
    ];

    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equals => "equals",
            Comparator::NotEqual => "does_not_equal",
            Comparator::GreaterThan => "greater_than",
            Comparator::LessThan => "less_than",
        }
    }

    /// Look up a comparator by its wire representation
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Evaluate a stored question value against a clause target.
    ///
    /// Values are compared only within the same kind (text with text,
    /// number with number). A null or differently-typed value never equals,
    /// and is never ordered against, the target.
    pub fn evaluate(&self, value: &Value, target: &FilterValue) -> bool {
        let ordering = target.order_of(value);
        match self {
            Comparator::Equals => ordering == Some(Ordering::Equal),
            Comparator::NotEqual => ordering != Some(Ordering::Equal),
            Comparator::GreaterThan => ordering == Some(Ordering::Greater),
            Comparator::LessThan => ordering == Some(Ordering::Less),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target value of a clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(Number),
    Text(String),
}

impl FilterValue {
    /// Order `value` relative to this target, if the two are comparable
    pub fn order_of(&self, value: &Value) -> Option<Ordering> {
        match (value, self) {
            (Value::String(v), FilterValue::Text(t)) => Some(v.as_str().cmp(t.as_str())),
            (Value::Number(v), FilterValue::Number(t)) => v.as_f64()?.partial_cmp(&t.as_f64()?),
            _ => None,
        }
    }

    /// Check whether the value counts as absent (empty text or zero)
    pub fn is_falsy(&self) -> bool {
        match self {
            FilterValue::Text(t) => t.is_empty(),
            FilterValue::Number(n) => n.as_f64().map_or(true, |f| f == 0.0),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(n.into())
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n.into())
    }
}

/// A single filter condition on one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    /// Question id the clause applies to
    pub id: String,

    /// Comparison operator
    pub condition: Comparator,

    /// Value to compare against
    pub value: FilterValue,
}

impl FilterClause {
    pub fn new(id: impl Into<String>, condition: Comparator, value: impl Into<FilterValue>) -> Self {
        Self {
            id: id.into(),
            condition,
            value: value.into(),
        }
    }

    /// Create an equality clause
    pub fn equals(id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(id, Comparator::Equals, value)
    }

    /// Create a greater than clause
    pub fn greater_than(id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(id, Comparator::GreaterThan, value)
    }

    /// Create a less than clause
    pub fn less_than(id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(id, Comparator::LessThan, value)
    }
}

/// A set of clauses combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    pub clauses: Vec<FilterClause>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterClause> {
        self.clauses.iter()
    }
}
