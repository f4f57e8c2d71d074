// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suggestion lists for each step of an equation.

use crate::dataset::DatasetIndex;
use crate::token::{Suggestion, TokenNature};
use dxw_core::value::{TimeUnit, TIME_UNITS};
use dxw_core::{CategoryType, Column, Operator, RelativeWindow};
use std::collections::HashSet;

const BOOLEAN_VALUES: [&str; 2] = ["true", "false"];

fn matches(candidate: &str, typed: &str) -> bool {
    let typed = typed.trim();
    typed.is_empty() || candidate.to_lowercase().contains(&typed.to_lowercase())
}

/// Columns present in the data, minus `blocked`, matching the typed text.
pub fn categories(
    columns: &[Column],
    index: &DatasetIndex,
    blocked: &HashSet<String>,
    typed: &str,
) -> Vec<Suggestion> {
    columns
        .iter()
        .filter(|c| index.has_column(c) && !blocked.contains(&c.id))
        .filter(|c| matches(&c.id, typed) || matches(&c.label, typed))
        .map(|c| Suggestion {
            label: c.id.clone(),
            nature: TokenNature::Category,
            kind: index.kind_of(c),
        })
        .collect()
}

/// Operators from `allowed`, by display string.
pub fn operators(allowed: &[Operator], kind: CategoryType, typed: &str) -> Vec<Suggestion> {
    allowed
        .iter()
        .filter(|op| matches(op.display(), typed) || matches(op.internal(), typed))
        .map(|op| Suggestion { label: op.display().to_string(), nature: TokenNature::Operator, kind })
        .collect()
}

/// Candidate values for the equation's value token.
///
/// For list operators the text before the last comma is already chosen:
/// those items are left out and only the last fragment filters.
pub fn values(
    index: &DatasetIndex,
    column_id: Option<&str>,
    kind: CategoryType,
    operator: Operator,
    typed: &str,
) -> Vec<Suggestion> {
    let make = |label: String| Suggestion { label, nature: TokenNature::Value, kind };

    if operator == Operator::Last {
        return windows(typed).into_iter().map(make).collect();
    }

    let (chosen, fragment) = if operator.is_multi_value() {
        let mut parts: Vec<&str> = typed.split(',').map(str::trim).collect();
        let last = parts.pop().unwrap_or("");
        (parts.into_iter().collect::<HashSet<_>>(), last)
    } else {
        (HashSet::new(), typed)
    };

    let candidates: Vec<String> = if kind == CategoryType::Boolean {
        BOOLEAN_VALUES.iter().map(|s| s.to_string()).collect()
    } else {
        column_id.map(|id| index.values(id).map(str::to_string).collect()).unwrap_or_default()
    };

    candidates
        .into_iter()
        .filter(|v| !chosen.contains(v.as_str()) && matches(v, fragment))
        .map(make)
        .collect()
}

/// Once an amount is typed, offer it with every unit.
fn windows(typed: &str) -> Vec<String> {
    let mut words = typed.split_whitespace();
    let Some(amount) = words.next().and_then(|w| w.parse::<u64>().ok()) else {
        return Vec::new();
    };
    let unit_prefix = words.next().unwrap_or("").to_lowercase();
    TIME_UNITS
        .iter()
        .copied()
        .filter(|u: &TimeUnit| u.plural().starts_with(&unit_prefix))
        .map(|unit| RelativeWindow { amount, unit }.to_string())
        .collect()
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
