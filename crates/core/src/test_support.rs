// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Column, Filter, FilterId, FilterValue, Operator};

/// Shorthand for a single-value filter.
pub fn filter(id: u64, column: &str, operator: Operator, value: &str) -> Filter {
    Filter::new(FilterId(id), column, operator, FilterValue::Single(value.to_string()))
}

/// Shorthand for a list filter.
pub fn list_filter(id: u64, column: &str, operator: Operator, values: &[&str]) -> Filter {
    Filter::new(
        FilterId(id),
        column,
        operator,
        FilterValue::Multiple(values.iter().map(|v| v.to_string()).collect()),
    )
}

/// A small column set covering every value type.
pub fn sample_columns() -> Vec<Column> {
    use crate::CategoryType;
    vec![
        Column::new("JobID").label("ID").kind(CategoryType::Number),
        Column::new("Status").kind(CategoryType::String),
        Column::new("MinorStatus").label("Minor Status").kind(CategoryType::String),
        Column::new("Site").kind(CategoryType::String),
        Column::new("SubmissionTime").label("Submission Time").kind(CategoryType::Date),
        Column::new("Accounted").kind(CategoryType::Boolean),
    ]
}

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for filter types.
pub mod strategies {
    use crate::operator::ALL_OPERATORS;
    use crate::{Filter, FilterId, FilterValue, Operator};
    use proptest::prelude::*;

    pub fn arb_operator() -> impl Strategy<Value = Operator> {
        proptest::sample::select(ALL_OPERATORS.to_vec())
    }

    pub fn arb_value() -> impl Strategy<Value = FilterValue> {
        prop_oneof![
            "[A-Za-z0-9 ._%-]{1,12}".prop_map(FilterValue::Single),
            proptest::collection::vec("[A-Za-z0-9._-]{1,8}", 1..4).prop_map(FilterValue::Multiple),
        ]
    }

    pub fn arb_filter() -> impl Strategy<Value = Filter> {
        (any::<u64>(), "[A-Za-z]{1,10}", arb_operator(), arb_value()).prop_map(
            |(id, column, operator, value)| Filter::new(FilterId(id), column, operator, value),
        )
    }
}
