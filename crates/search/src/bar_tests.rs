// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dxw_core::test_support::{filter, list_filter, sample_columns};
use dxw_core::{FakeClock, FilterValue};
use serde_json::json;

fn rows() -> Vec<Row> {
    serde_json::from_value(json!([
        {"JobID": 1, "Status": "Done", "MinorStatus": "Execution Complete", "Site": "LCG.CERN.ch",
         "SubmissionTime": "2024-05-01 10:00", "Accounted": true},
        {"JobID": 2, "Status": "Failed", "MinorStatus": "Pending Requests", "Site": "LCG.IN2P3.fr",
         "SubmissionTime": "2024-05-02 11:00", "Accounted": false},
    ]))
    .unwrap()
}

fn bar() -> SearchBar<FakeClock> {
    let mut bar = SearchBar::new(sample_columns(), FilterIdGen::new(FakeClock::new()));
    bar.set_dataset(&rows());
    bar
}

/// Type and confirm each token in turn, returning the last step.
fn enter(bar: &mut SearchBar<FakeClock>, tokens: &[&str]) -> Step {
    let mut last = None;
    for token in tokens {
        bar.set_input(*token);
        last = Some(bar.confirm());
    }
    last.expect("at least one token")
}

fn conditions(filters: &[Filter]) -> Vec<String> {
    filters.iter().map(|f| f.to_string()).collect()
}

// =============================================================================
// Token-by-token building
// =============================================================================

#[test]
fn equation_walks_category_operator_value() {
    let mut bar = bar();
    assert_eq!(enter(&mut bar, &["Status"]).transition, Transition::Advanced);
    assert!(matches!(bar.draft(), Equation::CategoryChosen { .. }));
    assert_eq!(bar.draft().status(), EquationStatus::Waiting);

    assert_eq!(enter(&mut bar, &["="]).transition, Transition::Advanced);
    assert!(matches!(bar.draft(), Equation::OperatorChosen { operator: Operator::Eq, .. }));

    let step = enter(&mut bar, &["Done"]);
    assert_eq!(step.transition, Transition::Completed { index: 0, status: EquationStatus::Valid });
    assert!(bar.draft().is_empty());
    assert_eq!(conditions(&step.apply.unwrap()), vec!["Status = Done"]);
}

#[test]
fn category_can_be_typed_by_label() {
    let mut bar = bar();
    enter(&mut bar, &["minor status"]);
    assert_eq!(bar.draft().category().map(Token::text).as_deref(), Some("MinorStatus"));
}

#[test]
fn operator_outside_column_type_is_rejected() {
    let mut bar = bar();
    enter(&mut bar, &["Accounted"]);
    let step = enter(&mut bar, &[">"]);
    assert_eq!(
        step.transition,
        Transition::Rejected(Rejection::OperatorNotAllowed {
            operator: ">".into(),
            kind: CategoryType::Boolean
        })
    );
    assert!(matches!(bar.draft(), Equation::CategoryChosen { .. }));
}

#[test]
fn unknown_column_is_rejected_unless_free_text_allowed() {
    let mut bar = bar();
    let step = enter(&mut bar, &["Owner"]);
    assert_eq!(step.transition, Transition::Rejected(Rejection::UnknownColumn("Owner".into())));

    let mut bar = bar.with_options(BarOptions { allow_free_text: true });
    enter(&mut bar, &["Owner"]);
    let category = bar.draft().category().cloned().unwrap();
    assert_eq!(category.nature, TokenNature::Custom);
    assert_eq!(category.kind, CategoryType::Custom);
    // Free text allows only =, != and like
    assert!(matches!(enter(&mut bar, &["is in"]).transition, Transition::Rejected(_)));
    let step = enter(&mut bar, &["like", "alice%"]);
    assert_eq!(conditions(&step.apply.unwrap()), vec!["Owner like alice%"]);
}

#[test]
fn value_failing_type_check_makes_equation_invalid() {
    let mut bar = bar();
    let step = enter(&mut bar, &["JobID", ">", "lots"]);
    assert_eq!(step.transition, Transition::Completed { index: 0, status: EquationStatus::Invalid });
    assert_eq!(step.apply, None);
    assert!(bar.filters().is_empty());
}

#[test]
fn list_operator_takes_comma_separated_values() {
    let mut bar = bar();
    let step = enter(&mut bar, &["Status", "is in", "Done, Failed,"]);
    let filters = step.apply.unwrap();
    assert_eq!(filters[0].value, FilterValue::Multiple(vec!["Done".into(), "Failed".into()]));
}

#[test]
fn selecting_list_values_accumulates_them() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in"]);
    bar.set_input("fa");
    bar.select("Failed");
    bar.select("Done");
    bar.select("Done");
    assert_eq!(bar.input(), "Failed, Done");
    let step = bar.confirm();
    assert_eq!(conditions(&step.apply.unwrap()), vec!["Status is in [Failed, Done]"]);
}

#[test]
fn empty_confirm_is_rejected() {
    let mut bar = bar();
    let step = bar.confirm();
    assert_eq!(step.transition, Transition::Rejected(Rejection::EmptyInput));
}

// =============================================================================
// Column de-duplication
// =============================================================================

#[test]
fn used_column_is_hidden_and_rejected() {
    let mut bar = bar();
    enter(&mut bar, &["Site", "=", "LCG.CERN.ch"]);
    let labels: Vec<_> = bar.draft_token().suggestions.into_iter().map(|s| s.label).collect();
    assert!(!labels.contains(&"Site".to_string()));
    let step = enter(&mut bar, &["Site"]);
    assert_eq!(step.transition, Transition::Rejected(Rejection::DuplicateColumn("Site".into())));
}

#[test]
fn list_operator_columns_may_repeat() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in", "Done"]);
    let labels: Vec<_> = bar.draft_token().suggestions.into_iter().map(|s| s.label).collect();
    assert!(labels.contains(&"Status".to_string()));
    let step = enter(&mut bar, &["Status", "is not in", "Failed"]);
    assert_eq!(step.transition, Transition::Completed { index: 1, status: EquationStatus::Valid });
}

#[test]
fn repeated_list_column_only_takes_list_operators() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in", "Done"]);
    enter(&mut bar, &["Status"]);
    let labels: Vec<_> = bar.draft_token().suggestions.into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["is in", "is not in"]);

    let step = enter(&mut bar, &["="]);
    assert_eq!(
        step.transition,
        Transition::Rejected(Rejection::ListOperatorRequired { column: "Status".into(), operator: "=".into() })
    );
    assert!(matches!(bar.draft(), Equation::CategoryChosen { .. }));
    assert_eq!(bar.filters().len(), 1);
}

#[test]
fn editing_a_repeated_column_keeps_list_operators() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in", "Done"]);
    enter(&mut bar, &["Status", "is not in", "Failed"]);
    bar.focus_equation(1);
    bar.cursor_left();
    bar.edit_focused();
    bar.set_input("=");
    let step = bar.confirm();
    assert!(matches!(step.transition, Transition::Rejected(Rejection::ListOperatorRequired { .. })));
    assert_eq!(bar.filters()[1].operator, Operator::NotIn);
}

#[test]
fn moving_a_single_value_equation_onto_a_list_column_is_rejected() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in", "Done"]);
    enter(&mut bar, &["Site", "=", "LCG.CERN.ch"]);
    bar.focus_equation(1);
    bar.cursor_left();
    bar.cursor_left();
    bar.edit_focused();
    bar.set_input("Status");
    let step = bar.confirm();
    assert_eq!(
        step.transition,
        Transition::Rejected(Rejection::ListOperatorRequired { column: "Status".into(), operator: "=".into() })
    );
    assert_eq!(bar.filters()[1].column, "Site");
}

#[test]
fn sole_use_of_a_column_can_change_operator_freely() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "is in", "Done"]);
    bar.focus_equation(0);
    bar.cursor_left();
    bar.edit_focused();
    bar.set_input("=");
    let step = bar.confirm();
    assert!(matches!(step.transition, Transition::Edited { index: 0, .. }));
    assert_eq!(bar.filters()[0].operator, Operator::Eq);
}

// =============================================================================
// Backspace, removal and editing
// =============================================================================

#[test]
fn backspace_drops_draft_tokens_one_at_a_time() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "="]);
    bar.backspace();
    assert!(matches!(bar.draft(), Equation::CategoryChosen { .. }));
    bar.backspace();
    assert!(bar.draft().is_empty());
}

#[test]
fn backspace_deletes_typed_characters_first() {
    let mut bar = bar();
    bar.set_input("Sta");
    bar.backspace();
    assert_eq!(bar.input(), "St");
}

#[test]
fn backspace_reopens_last_value_without_deleting_equation() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    let id = bar.equations()[0].to_filter().unwrap().id;

    let step = bar.backspace();
    assert_eq!(step.transition, Transition::Reopened { index: 0 });
    assert_eq!(bar.input(), "Done");
    assert!(matches!(bar.draft(), Equation::OperatorChosen { .. }));

    bar.set_input("Failed");
    let step = bar.confirm();
    let filters = step.apply.unwrap();
    assert_eq!(conditions(&filters), vec!["Status = Failed"]);
    assert_eq!(filters[0].id, id, "reopened equation keeps its id");
}

#[test]
fn remove_equation_is_atomic() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    enter(&mut bar, &["Site", "=", "LCG.CERN.ch"]);
    let step = bar.remove_equation(0);
    assert_eq!(step.transition, Transition::Removed { index: 0 });
    assert_eq!(conditions(&step.apply.unwrap()), vec!["Site = LCG.CERN.ch"]);

    let step = bar.remove_equation(7);
    assert_eq!(step.transition, Transition::Rejected(Rejection::NoSuchEquation(7)));
}

#[test]
fn cursor_reopens_any_token_keeping_the_others() {
    let mut bar = bar();
    enter(&mut bar, &["JobID", "=", "1"]);
    bar.focus_equation(0);
    bar.cursor_left();
    assert_eq!(bar.focus().unwrap().slot, Slot::Operator);

    let step = bar.edit_focused();
    assert_eq!(step.transition, Transition::Reopened { index: 0 });
    assert_eq!(bar.input(), "=");
    assert_eq!(bar.statuses(), vec![EquationStatus::Waiting]);

    bar.set_input("is in");
    let step = bar.confirm();
    assert_eq!(step.transition, Transition::Edited { index: 0, status: EquationStatus::Valid });
    let filters = step.apply.unwrap();
    assert_eq!(filters[0].operator, Operator::In);
    assert_eq!(filters[0].value, FilterValue::Multiple(vec!["1".into()]));
}

#[test]
fn editing_category_revalidates_value() {
    let mut bar = bar();
    enter(&mut bar, &["Site", "=", "LCG.CERN.ch"]);
    bar.focus_equation(0);
    bar.cursor_left();
    bar.cursor_left();
    bar.cursor_left();
    assert_eq!(bar.focus().unwrap().slot, Slot::Category);
    bar.edit_focused();
    bar.set_input("JobID");
    let step = bar.confirm();
    assert_eq!(step.transition, Transition::Edited { index: 0, status: EquationStatus::Invalid });
    assert_eq!(step.apply, None);
}

#[test]
fn blur_discards_an_edit_in_progress() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    bar.focus_equation(0);
    bar.edit_focused();
    bar.set_input("Fai");
    let step = bar.blur();
    assert_eq!(step.apply, None, "nothing changed");
    assert_eq!(bar.input(), "");
    assert_eq!(bar.statuses(), vec![EquationStatus::Valid]);
}

// =============================================================================
// Auto-apply gating
// =============================================================================

#[test]
fn one_invalid_equation_suppresses_apply_until_fixed() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    let step = enter(&mut bar, &["JobID", ">", "many"]);
    assert_eq!(step.apply, None);

    let mut applies = 0;
    bar.focus_equation(1);
    for step in [bar.edit_focused(), bar.set_input("10"), bar.confirm(), bar.blur(), bar.confirm()] {
        applies += usize::from(step.apply.is_some());
    }
    assert_eq!(applies, 1, "exactly one recompute once all equations are valid");
    assert_eq!(conditions(&bar.filters()), vec!["Status = Done", "JobID > 10"]);
}

#[test]
fn draft_in_progress_suppresses_apply() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    enter(&mut bar, &["Site"]);
    let step = bar.remove_equation(0);
    assert_eq!(step.apply, None);
    let step = bar.backspace();
    assert_eq!(step.apply, Some(vec![]), "abandoning the draft settles the bar");
}

#[test]
fn clear_emits_empty_list_once() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    assert_eq!(bar.clear().apply, Some(vec![]));
    assert_eq!(bar.clear().apply, None);
}

#[test]
fn loaded_filters_count_as_applied() {
    let mut bar = bar();
    bar.load_filters(&[filter(5, "Status", Operator::Eq, "Done"), list_filter(6, "Site", Operator::In, &["A"])]);
    assert_eq!(bar.statuses(), vec![EquationStatus::Valid, EquationStatus::Valid]);
    assert_eq!(bar.set_input("x").apply, None);
    // New ids stay above loaded ones
    enter(&mut bar, &["JobID", "=", "3"]);
    assert!(bar.filters()[2].id.0 > 6);
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn draft_token_follows_the_equation_step() {
    let mut bar = bar();
    assert_eq!(bar.draft_token().nature, TokenNature::Category);
    enter(&mut bar, &["Accounted"]);
    let token = bar.draft_token();
    assert_eq!(token.nature, TokenNature::Operator);
    assert_eq!(token.kind, CategoryType::Boolean);
    assert_eq!(token.suggestions.len(), 2);
    enter(&mut bar, &["="]);
    let labels: Vec<_> = bar.draft_token().suggestions.into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["true", "false"]);
}

#[test]
fn suggestions_follow_dataset_changes() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "="]);
    assert_eq!(bar.draft_token().suggestions.len(), 2);
    bar.set_dataset(&serde_json::from_value::<Vec<Row>>(json!([{"Status": "Killed"}])).unwrap());
    let labels: Vec<_> = bar.draft_token().suggestions.into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Killed"]);
}

#[test]
fn empty_suggestions_are_hidden() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "="]);
    bar.set_input("zzz");
    assert!(bar.draft_token().hide_suggestion);
}

// =============================================================================
// Typed queries
// =============================================================================

#[test]
fn submit_text_parses_several_equations() {
    let mut bar = bar();
    let step = bar
        .submit_text("Status is in Done, Failed Minor Status = 'Pending Requests' JobID>1")
        .unwrap();
    assert_eq!(
        conditions(&step.apply.unwrap()),
        vec!["Status is in [Done, Failed]", "MinorStatus = Pending Requests", "JobID > 1"]
    );
}

#[test]
fn submit_text_handles_relative_windows() {
    let mut bar = bar();
    let step = bar.submit_text("SubmissionTime in the last 3 days").unwrap();
    let filters = step.apply.unwrap();
    assert_eq!(filters[0].operator, Operator::Last);
    assert_eq!(filters[0].value, FilterValue::Single("3 days".into()));
}

#[test]
fn submit_text_leaves_trailing_partial_equation_waiting() {
    let mut bar = bar();
    let step = bar.submit_text("Status =").unwrap();
    assert_eq!(step.apply, None);
    assert!(matches!(bar.draft(), Equation::OperatorChosen { .. }));
}

#[test]
fn submit_text_rejection_restores_the_bar() {
    let mut bar = bar();
    enter(&mut bar, &["Status", "=", "Done"]);
    let err = bar.submit_text("Site = A Bogus = 1").unwrap_err();
    assert_eq!(err.to_string(), "unknown column 'Bogus' (at 'Bogus')");
    assert_eq!(conditions(&bar.filters()), vec!["Status = Done"]);
    assert!(bar.draft().is_empty());
}

#[test]
fn submit_text_reports_lexer_errors() {
    let mut bar = bar();
    let err = bar.submit_text("Status = \"Done").unwrap_err();
    assert!(matches!(err, QueryError::Lex(LexerError::UnterminatedQuote { .. })));
}

#[yare::parameterized(
    display = { "is not in", Some(Operator::NotIn) },
    internal = { "neq", Some(Operator::Neq) },
    upper = { "LIKE", Some(Operator::Like) },
    padded = { "  >  ", Some(Operator::Gt) },
    unknown = { "between", None },
)]
fn operator_text(text: &str, expected: Option<Operator>) {
    assert_eq!(parse_operator(text), expected);
}
