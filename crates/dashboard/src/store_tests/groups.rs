// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn add_group_numbers_from_count() {
    let mut d = empty();
    assert_eq!(apply(&mut d, DashboardAction::AddGroup), Outcome::Changed(Change::GroupAdded { title: "Group 1".into() }));
    assert_eq!(apply(&mut d, DashboardAction::AddGroup), Outcome::Changed(Change::GroupAdded { title: "Group 2".into() }));
    assert!(d.group("Group 2").unwrap().extended);
}

#[test]
fn add_group_skips_taken_titles() {
    let mut d = dashboard(&[("Group 2", &[])]);
    // Count is 1, so "Group 2" is next, but it is taken
    assert_eq!(apply(&mut d, DashboardAction::AddGroup), Outcome::Changed(Change::GroupAdded { title: "Group 3".into() }));
}

#[test]
fn rename_group_to_existing_title_changes_nothing() {
    let mut d = dashboard(&[("A", &["a"]), ("B", &["b"])]);
    let outcome = apply(&mut d, DashboardAction::RenameGroup { title: "A".into(), new_title: "B".into() });
    assert_eq!(outcome, Outcome::Unchanged(Reason::TitleTaken("B".into())));
    let titles: Vec<_> = d.groups().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn rename_group_trims_and_rejects_empty() {
    let mut d = dashboard(&[("A", &[])]);
    assert_eq!(
        apply(&mut d, DashboardAction::RenameGroup { title: "A".into(), new_title: "  ".into() }),
        Outcome::Unchanged(Reason::EmptyTitle)
    );
    assert_eq!(
        apply(&mut d, DashboardAction::RenameGroup { title: "A".into(), new_title: " Jobs ".into() }),
        Outcome::Changed(Change::GroupRenamed { title: "Jobs".into() })
    );
    assert!(d.group("Jobs").is_some());
}

#[test]
fn delete_group_reports_removed_items() {
    let mut d = dashboard(&[("A", &["a", "b"]), ("B", &["c"])]);
    let outcome = apply(&mut d, DashboardAction::DeleteGroup { title: "A".into() });
    assert_eq!(
        outcome,
        Outcome::Changed(Change::GroupDeleted { title: "A".into(), items: vec![ItemId::new("a"), ItemId::new("b")] })
    );
    assert_eq!(d.item_count(), 1);
}

#[test]
fn toggle_flips_extended() {
    let mut d = dashboard(&[("A", &[])]);
    assert_eq!(
        apply(&mut d, DashboardAction::ToggleGroup { title: "A".into() }),
        Outcome::Changed(Change::GroupToggled { title: "A".into(), extended: false })
    );
    assert_eq!(
        apply(&mut d, DashboardAction::ToggleGroup { title: "A".into() }),
        Outcome::Changed(Change::GroupToggled { title: "A".into(), extended: true })
    );
}
