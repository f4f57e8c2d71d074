// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashSet;

#[test]
fn first_item_creates_a_group() {
    let mut d = empty();
    let outcome = apply(&mut d, DashboardAction::add_item(JOB_MONITOR));
    assert_eq!(
        outcome,
        Outcome::Changed(Change::ItemAdded {
            id: ItemId::new("Job Monitor0"),
            group: "Group 1".into(),
            title: JOB_MONITOR.into(),
        })
    );
    assert_eq!(d.groups().len(), 1);
    assert_eq!(d.item("Job Monitor0").unwrap().icon, "monitor");
}

#[test]
fn repeated_adds_number_titles() {
    let mut d = empty();
    for _ in 0..3 {
        apply(&mut d, DashboardAction::add_item(JOB_MONITOR));
    }
    let titles: Vec<_> = d.items().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Job Monitor", "Job Monitor 2", "Job Monitor 3"]);
}

#[test]
fn items_land_in_the_last_group_by_default() {
    let mut d = dashboard(&[("A", &["a"]), ("B", &[])]);
    apply(&mut d, DashboardAction::add_item(BASE_APPLICATION));
    assert_eq!(d.group("B").unwrap().items.len(), 1);
}

#[test]
fn explicit_group_and_title() {
    let mut d = dashboard(&[("A", &["a"]), ("B", &[])]);
    let outcome = apply(
        &mut d,
        DashboardAction::AddItem { app_type: JOB_MONITOR.into(), title: Some("Mine".into()), group: Some("A".into()) },
    );
    assert!(outcome.is_changed());
    assert!(d.group("A").unwrap().has_title("Mine"));

    let outcome = apply(
        &mut d,
        DashboardAction::AddItem { app_type: JOB_MONITOR.into(), title: None, group: Some("Z".into()) },
    );
    assert_eq!(outcome, Outcome::Unchanged(Reason::UnknownGroup("Z".into())));
}

#[test]
fn unknown_application_is_an_error() {
    let mut d = empty();
    let err = d.apply(DashboardAction::add_item("Pilot Monitor")).unwrap_err();
    assert!(matches!(err, DashboardError::Registry(_)));
    assert!(d.groups().is_empty());
}

#[test]
fn ids_stay_unique_after_deletions() {
    let mut d = empty();
    let mut seen = HashSet::new();
    for round in 0..4 {
        let Outcome::Changed(Change::ItemAdded { id, .. }) = apply(&mut d, DashboardAction::add_item(JOB_MONITOR))
        else {
            panic!("add failed in round {round}");
        };
        assert!(seen.insert(id.clone()), "id {id} reused");
        if round % 2 == 0 {
            apply(&mut d, DashboardAction::DeleteItem { id });
        }
    }
}

#[test]
fn ids_continue_after_hydrate() {
    let mut d = dashboard(&[("A", &["Job Monitor1"])]);
    let Outcome::Changed(Change::ItemAdded { id, .. }) = apply(&mut d, DashboardAction::add_item(JOB_MONITOR)) else {
        panic!("add failed");
    };
    // seq starts at the item count (1), which collides, so it moves on
    assert_eq!(id, "Job Monitor2");
}

#[test]
fn rename_item_checks_its_own_group_only() {
    let mut d = dashboard(&[("A", &["a", "b"]), ("B", &["c"])]);
    assert_eq!(
        apply(&mut d, DashboardAction::RenameItem { id: ItemId::new("a"), new_title: "b".into() }),
        Outcome::Unchanged(Reason::TitleTaken("b".into()))
    );
    assert_eq!(
        apply(&mut d, DashboardAction::RenameItem { id: ItemId::new("a"), new_title: "c".into() }),
        Outcome::Changed(Change::ItemRenamed { id: ItemId::new("a"), title: "c".into() })
    );
    // Renaming to its own title is allowed
    assert!(apply(&mut d, DashboardAction::RenameItem { id: ItemId::new("a"), new_title: "c".into() }).is_changed());
}

#[test]
fn rename_keeps_the_id() {
    let mut d = dashboard(&[("A", &["a"])]);
    apply(&mut d, DashboardAction::RenameItem { id: ItemId::new("a"), new_title: "Running jobs".into() });
    assert_eq!(d.item("a").unwrap().title, "Running jobs");
}

#[test]
fn delete_unknown_item() {
    let mut d = dashboard(&[("A", &["a"])]);
    assert_eq!(
        apply(&mut d, DashboardAction::DeleteItem { id: ItemId::new("zz") }),
        Outcome::Unchanged(Reason::UnknownItem(ItemId::new("zz")))
    );
    assert_eq!(d.item_count(), 1);
}
