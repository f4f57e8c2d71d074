// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted filter conditions.

use crate::column::{find_column, Column};
use crate::operator::Operator;
use crate::value::{validate_value, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Client-side filter identifier.
///
/// Only used to diff filter lists in the UI; never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub u64);

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value of a filter: a single literal or a list for `in` / `not in`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FilterValue {
    /// All literals, in order.
    pub fn items(&self) -> Vec<&str> {
        match self {
            FilterValue::Single(v) => vec![v.as_str()],
            FilterValue::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(v) => v.trim().is_empty(),
            FilterValue::Multiple(vs) => vs.is_empty(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Single(v) => f.write_str(v),
            FilterValue::Multiple(vs) => write!(f, "[{}]", vs.join(", ")),
        }
    }
}

/// Errors from filter validation and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("operator '{operator}' is not valid for column '{column}'")]
    OperatorNotAllowed { column: String, operator: Operator },
    #[error("filter on '{column}': {source}")]
    Value {
        column: String,
        #[source]
        source: ValueError,
    },
    #[error("filter has both 'value' and 'values'")]
    AmbiguousValue,
    #[error("filter has neither 'value' nor 'values'")]
    MissingValue,
}

/// A completed filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFilter", into = "RawFilter")]
pub struct Filter {
    pub id: FilterId,
    pub column: String,
    pub operator: Operator,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(
        id: FilterId,
        column: impl Into<String>,
        operator: Operator,
        value: FilterValue,
    ) -> Self {
        Self { id, column: column.into(), operator, value }
    }

    /// Same column, operator and value. Ids are ignored.
    pub fn same_condition(&self, other: &Filter) -> bool {
        self.column == other.column && self.operator == other.operator && self.value == other.value
    }

    /// Check the filter against the table's columns.
    pub fn validate(&self, columns: &[Column]) -> Result<(), FilterError> {
        let column = find_column(columns, &self.column)
            .ok_or_else(|| FilterError::UnknownColumn(self.column.clone()))?;
        if !column.allows(self.operator) {
            return Err(FilterError::OperatorNotAllowed {
                column: column.id.clone(),
                operator: self.operator,
            });
        }
        validate_value(column.category_type(), self.operator, &self.value).map_err(|source| {
            FilterError::Value { column: column.id.clone(), source }
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

/// Compare two filter lists by condition, in order.
pub fn same_conditions(a: &[Filter], b: &[Filter]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_condition(y))
}

/// On-disk shape: `{id, column, operator, value | values}`.
#[derive(Serialize, Deserialize)]
struct RawFilter {
    id: FilterId,
    column: String,
    operator: Operator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

impl TryFrom<RawFilter> for Filter {
    type Error = FilterError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        let value = match (raw.value, raw.values) {
            (Some(v), None) => FilterValue::Single(v),
            (None, Some(vs)) => FilterValue::Multiple(vs),
            (Some(_), Some(_)) => return Err(FilterError::AmbiguousValue),
            (None, None) => return Err(FilterError::MissingValue),
        };
        Ok(Filter { id: raw.id, column: raw.column, operator: raw.operator, value })
    }
}

impl From<Filter> for RawFilter {
    fn from(filter: Filter) -> Self {
        let (value, values) = match filter.value {
            FilterValue::Single(v) => (Some(v), None),
            FilterValue::Multiple(vs) => (None, Some(vs)),
        };
        RawFilter { id: filter.id, column: filter.column, operator: filter.operator, value, values }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
