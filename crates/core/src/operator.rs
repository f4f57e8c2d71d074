// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator catalog.
//!
//! Every operator has an internal wire code (sent to the job search
//! endpoint) and a display string (shown in the search bar). The two are a
//! bijection over a fixed catalog of eight operators. Lookups by an unknown
//! code or display string fail: that means client and data disagree on the
//! catalog, which is not something a caller can paper over.

use crate::category::CategoryType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from operator lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("unknown operator code '{0}'")]
    UnknownInternal(String),
    #[error("unknown operator display '{0}'")]
    UnknownDisplay(String),
}

/// A filter operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Lt,
    In,
    NotIn,
    Like,
    /// Relative date window, value is `<integer> <unit>`.
    Last,
}

/// The full catalog in display order.
pub const ALL_OPERATORS: [Operator; 8] = [
    Operator::Eq,
    Operator::Neq,
    Operator::Gt,
    Operator::Lt,
    Operator::In,
    Operator::NotIn,
    Operator::Like,
    Operator::Last,
];

const STRING_OPS: &[Operator] =
    &[Operator::Eq, Operator::Neq, Operator::In, Operator::NotIn, Operator::Like];
const NUMBER_OPS: &[Operator] = &[
    Operator::Eq,
    Operator::Neq,
    Operator::Gt,
    Operator::Lt,
    Operator::In,
    Operator::NotIn,
];
const BOOLEAN_OPS: &[Operator] = &[Operator::Eq, Operator::Neq];
const DATE_OPS: &[Operator] = &[Operator::Gt, Operator::Lt, Operator::Last];
const DEFAULT_OPS: &[Operator] = &[
    Operator::Eq,
    Operator::Neq,
    Operator::Gt,
    Operator::Lt,
    Operator::In,
    Operator::NotIn,
    Operator::Like,
];
const FREE_TEXT_OPS: &[Operator] = &[Operator::Eq, Operator::Neq, Operator::Like];

impl Operator {
    /// Wire code sent in the search payload.
    pub fn internal(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Like => "like",
            Operator::Last => "last",
        }
    }

    /// Human-facing string shown in the search bar.
    pub fn display(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::In => "is in",
            Operator::NotIn => "is not in",
            Operator::Like => "like",
            Operator::Last => "in the last",
        }
    }

    pub fn from_internal(code: &str) -> Result<Self, OperatorError> {
        ALL_OPERATORS
            .iter()
            .copied()
            .find(|op| op.internal() == code)
            .ok_or_else(|| OperatorError::UnknownInternal(code.to_string()))
    }

    pub fn from_display(text: &str) -> Result<Self, OperatorError> {
        ALL_OPERATORS
            .iter()
            .copied()
            .find(|op| op.display() == text)
            .ok_or_else(|| OperatorError::UnknownDisplay(text.to_string()))
    }

    /// Whether the operator takes a list of values (`in`, `not in`).
    pub fn is_multi_value(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

/// Map a wire code to its display string.
pub fn display_from_internal(code: &str) -> Result<&'static str, OperatorError> {
    Operator::from_internal(code).map(Operator::display)
}

/// Map a display string to its wire code.
pub fn internal_from_display(text: &str) -> Result<&'static str, OperatorError> {
    Operator::from_display(text).map(Operator::internal)
}

pub fn string_ops() -> &'static [Operator] {
    STRING_OPS
}

pub fn number_ops() -> &'static [Operator] {
    NUMBER_OPS
}

pub fn boolean_ops() -> &'static [Operator] {
    BOOLEAN_OPS
}

pub fn date_ops() -> &'static [Operator] {
    DATE_OPS
}

pub fn default_ops() -> &'static [Operator] {
    DEFAULT_OPS
}

pub fn free_text_ops() -> &'static [Operator] {
    FREE_TEXT_OPS
}

/// Operators offered for a column of the given type.
pub fn ops_for(kind: CategoryType) -> &'static [Operator] {
    match kind {
        CategoryType::Number => NUMBER_OPS,
        CategoryType::String => STRING_OPS,
        CategoryType::Boolean => BOOLEAN_OPS,
        CategoryType::Date => DATE_OPS,
        CategoryType::Custom => FREE_TEXT_OPS,
        CategoryType::Unknown => DEFAULT_OPS,
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Parses either the wire code or the display string.
impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_internal(s).or_else(|_| Operator::from_display(s))
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.internal())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Operator::from_internal(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "operator_tests.rs"]
mod tests;
