// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod groups;
mod items;
mod reorder;

use super::*;
use crate::action::{Change, DashboardAction, DropTarget, Edge, Outcome, Reason};
use crate::model::{DashboardGroup, DashboardItem, ItemId};
use crate::registry::{AppRegistry, BASE_APPLICATION, JOB_MONITOR};
use std::sync::Arc;

fn empty() -> Dashboard {
    Dashboard::new(Arc::new(AppRegistry::builtin()))
}

fn item(title: &str, id: &str) -> DashboardItem {
    DashboardItem { title: title.into(), id: ItemId::new(id), app_type: JOB_MONITOR.into(), icon: String::new() }
}

fn group(title: &str, ids: &[&str]) -> DashboardGroup {
    let mut group = DashboardGroup::new(title);
    group.items = ids.iter().map(|id| item(id, id)).collect();
    group
}

/// Dashboard with the given groups; item titles equal their ids.
fn dashboard(groups: &[(&str, &[&str])]) -> Dashboard {
    let groups = groups.iter().map(|(title, ids)| group(title, ids)).collect();
    Dashboard::hydrate(Arc::new(AppRegistry::builtin()), groups).unwrap()
}

fn ids(dashboard: &Dashboard, group: &str) -> Vec<String> {
    dashboard.group(group).unwrap().items.iter().map(|i| i.id.to_string()).collect()
}

fn apply(dashboard: &mut Dashboard, action: DashboardAction) -> Outcome {
    dashboard.apply(action).unwrap()
}

#[test]
fn hydrate_attaches_icons() {
    let d = dashboard(&[("Group 1", &["a"])]);
    assert_eq!(d.item("a").unwrap().icon, "monitor");
    assert_eq!(d.item_count(), 1);
}

#[test]
fn hydrate_rejects_unknown_types() {
    let mut g = group("Group 1", &["a"]);
    g.items[0].app_type = "Pilot Monitor".into();
    let err = Dashboard::hydrate(Arc::new(AppRegistry::builtin()), vec![g]).unwrap_err();
    assert_eq!(err.to_string(), "unknown application type 'Pilot Monitor'");
}

#[test]
fn hydrate_rejects_duplicate_group_titles() {
    let err = Dashboard::hydrate(
        Arc::new(AppRegistry::builtin()),
        vec![group("Group 1", &["a"]), group("Group 1", &["b"])],
    )
    .unwrap_err();
    assert_eq!(err, DashboardError::DuplicateGroup("Group 1".into()));
}

#[test]
fn hydrate_rejects_duplicate_ids_across_groups() {
    let err = Dashboard::hydrate(
        Arc::new(AppRegistry::builtin()),
        vec![group("Group 1", &["a"]), group("Group 2", &["a"])],
    )
    .unwrap_err();
    assert_eq!(err, DashboardError::DuplicateItemId(ItemId::new("a")));
}

#[test]
fn hydrate_rejects_duplicate_titles_within_a_group() {
    let mut g = group("Group 1", &["a", "b"]);
    g.items[1].title = "a".into();
    let err = Dashboard::hydrate(Arc::new(AppRegistry::builtin()), vec![g]).unwrap_err();
    assert_eq!(err, DashboardError::DuplicateItemTitle { group: "Group 1".into(), title: "a".into() });
}

#[test]
fn unique_title_counts_up_from_two() {
    let taken = ["Job Monitor", "Job Monitor 2"];
    assert_eq!(unique_title("Job Monitor", |t| taken.contains(&t)), "Job Monitor 3");
    assert_eq!(unique_title(BASE_APPLICATION, |t| taken.contains(&t)), BASE_APPLICATION);
}

#[test]
fn unchanged_actions_leave_the_dashboard_alone() {
    let mut d = dashboard(&[("Group 1", &["a", "b"])]);
    let before = d.groups().to_vec();
    let outcome = apply(&mut d, DashboardAction::DeleteGroup { title: "Group 9".into() });
    assert_eq!(outcome, Outcome::Unchanged(Reason::UnknownGroup("Group 9".into())));
    assert_eq!(d.groups(), before.as_slice());
}
