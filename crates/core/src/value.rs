// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type-aware validation of filter values.

use crate::category::CategoryType;
use crate::filter::FilterValue;
use crate::operator::Operator;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a value was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,
    #[error("'{operator}' takes a list of values")]
    ExpectedList { operator: Operator },
    #[error("'{operator}' takes a single value")]
    ExpectedSingle { operator: Operator },
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a boolean")]
    NotABoolean(String),
    #[error("'{0}' is not a date")]
    NotADate(String),
    #[error("'{0}' is not a time window, expected '<integer> <unit>'")]
    NotAWindow(String),
}

/// Unit of a relative time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

pub const TIME_UNITS: [TimeUnit; 6] = [
    TimeUnit::Minute,
    TimeUnit::Hour,
    TimeUnit::Day,
    TimeUnit::Week,
    TimeUnit::Month,
    TimeUnit::Year,
];

impl TimeUnit {
    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }

    fn parse(word: &str) -> Option<Self> {
        let word = word.to_ascii_lowercase();
        TIME_UNITS.iter().copied().find(|u| word == u.singular() || word == u.plural())
    }
}

/// Value of the `last` operator, e.g. `3 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeWindow {
    pub amount: u64,
    pub unit: TimeUnit,
}

#[allow(clippy::expect_used)]
fn window_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d+)\s+([A-Za-z]+)\s*$").expect("constant regex must compile")
    })
}

impl FromStr for RelativeWindow {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ValueError::NotAWindow(s.to_string());
        let caps = window_pattern().captures(s).ok_or_else(err)?;
        let amount = caps[1].parse::<u64>().map_err(|_| err())?;
        let unit = TimeUnit::parse(&caps[2]).ok_or_else(err)?;
        Ok(Self { amount, unit })
    }
}

impl fmt::Display for RelativeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.amount == 1 { self.unit.singular() } else { self.unit.plural() };
        write!(f, "{} {}", self.amount, unit)
    }
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` and RFC 3339.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATE_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
    {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Validate a single literal for a column type and operator.
pub fn validate_literal(kind: CategoryType, operator: Operator, literal: &str) -> Result<(), ValueError> {
    if literal.trim().is_empty() {
        return Err(ValueError::Empty);
    }
    if operator == Operator::Last {
        return literal.parse::<RelativeWindow>().map(|_| ());
    }
    match kind {
        CategoryType::Number => literal
            .trim()
            .parse::<f64>()
            .map(|_| ())
            .map_err(|_| ValueError::NotANumber(literal.to_string())),
        CategoryType::Boolean => parse_bool(literal)
            .map(|_| ())
            .ok_or_else(|| ValueError::NotABoolean(literal.to_string())),
        CategoryType::Date => parse_date(literal)
            .map(|_| ())
            .ok_or_else(|| ValueError::NotADate(literal.to_string())),
        CategoryType::String | CategoryType::Custom | CategoryType::Unknown => Ok(()),
    }
}

/// Validate a whole filter value: shape against the operator, then each
/// literal against the column type.
pub fn validate_value(kind: CategoryType, operator: Operator, value: &FilterValue) -> Result<(), ValueError> {
    match (operator.is_multi_value(), value) {
        (true, FilterValue::Single(_)) => Err(ValueError::ExpectedList { operator }),
        (true, FilterValue::Multiple(vs)) if vs.is_empty() => Err(ValueError::Empty),
        (false, FilterValue::Multiple(vs)) if vs.len() != 1 => {
            Err(ValueError::ExpectedSingle { operator })
        }
        _ => value.items().into_iter().try_for_each(|v| validate_literal(kind, operator, v)),
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
