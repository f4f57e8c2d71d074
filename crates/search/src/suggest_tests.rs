// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::dataset::Row;
use dxw_core::test_support::sample_columns;
use serde_json::json;
use yare::parameterized;

fn index() -> DatasetIndex {
    let rows: Vec<Row> = serde_json::from_value(json!([
        {"JobID": 1, "Status": "Done", "Site": "LCG.CERN.ch", "Accounted": true},
        {"JobID": 2, "Status": "Failed", "Site": "LCG.IN2P3.fr", "Accounted": false},
        {"JobID": 3, "Status": "Running", "Site": "LCG.CERN.ch"},
    ]))
    .unwrap();
    DatasetIndex::new(&rows)
}

fn labels(suggestions: Vec<Suggestion>) -> Vec<String> {
    suggestions.into_iter().map(|s| s.label).collect()
}

#[test]
fn categories_only_offer_columns_with_data() {
    let got = labels(categories(&sample_columns(), &index(), &HashSet::new(), ""));
    assert_eq!(got, vec!["JobID", "Status", "Site", "Accounted"]);
}

#[test]
fn categories_skip_blocked_and_filter_by_label() {
    let blocked = HashSet::from(["Status".to_string()]);
    assert_eq!(labels(categories(&sample_columns(), &index(), &blocked, "s")), vec!["Site"]);
    // "ID" is the label of JobID
    assert_eq!(labels(categories(&sample_columns(), &index(), &HashSet::new(), "id")), vec!["JobID"]);
}

#[parameterized(
    number = { CategoryType::Number, "", &["=", "!=", ">", "<", "is in", "is not in"] },
    boolean = { CategoryType::Boolean, "", &["=", "!="] },
    date = { CategoryType::Date, "", &[">", "<", "in the last"] },
    string_typed = { CategoryType::String, "in", &["is in", "is not in"] },
    internal_code = { CategoryType::String, "like", &["like"] },
)]
fn operator_suggestions(kind: CategoryType, typed: &str, expected: &[&str]) {
    assert_eq!(labels(operators(dxw_core::ops_for(kind), kind, typed)), expected);
}

#[test]
fn operator_suggestions_stay_within_the_allowed_set() {
    let allowed = [Operator::In, Operator::NotIn];
    assert_eq!(labels(operators(&allowed, CategoryType::String, "")), vec!["is in", "is not in"]);
    assert!(operators(&allowed, CategoryType::String, "=").is_empty());
}

#[test]
fn values_come_from_the_data() {
    let got = labels(values(&index(), Some("Status"), CategoryType::String, Operator::Eq, "n"));
    assert_eq!(got, vec!["Done", "Running"]);
}

#[test]
fn list_values_exclude_already_chosen_items() {
    let got = labels(values(&index(), Some("Status"), CategoryType::String, Operator::In, "Done, "));
    assert_eq!(got, vec!["Failed", "Running"]);
    let got = labels(values(&index(), Some("Status"), CategoryType::String, Operator::In, "Done, fa"));
    assert_eq!(got, vec!["Failed"]);
}

#[test]
fn boolean_values_are_fixed() {
    let got = labels(values(&index(), Some("Accounted"), CategoryType::Boolean, Operator::Eq, ""));
    assert_eq!(got, vec!["true", "false"]);
}

#[test]
fn custom_category_has_no_values() {
    assert!(values(&index(), None, CategoryType::Custom, Operator::Eq, "").is_empty());
}

#[parameterized(
    no_amount = { "", &[] },
    not_a_number = { "few", &[] },
    one = { "1", &["1 minute", "1 hour", "1 day", "1 week", "1 month", "1 year"] },
    unit_prefix = { "3 m", &["3 minutes", "3 months"] },
)]
fn last_window_suggestions(typed: &str, expected: &[&str]) {
    let got = labels(values(&index(), Some("SubmissionTime"), CategoryType::Date, Operator::Last, typed));
    assert_eq!(got, expected);
}
