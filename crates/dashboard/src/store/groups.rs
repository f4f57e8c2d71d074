// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Group actions.

use super::Dashboard;
use crate::action::{Change, Outcome, Reason};
use crate::model::DashboardGroup;

/// Next free `Group {n}` title, starting from the group count plus one.
pub(super) fn next_group_title(dashboard: &Dashboard) -> String {
    let mut n = dashboard.groups.len() + 1;
    loop {
        let title = format!("Group {n}");
        if dashboard.group_index(&title).is_none() {
            return title;
        }
        n += 1;
    }
}

pub(super) fn add(dashboard: &mut Dashboard) -> Outcome {
    let title = next_group_title(dashboard);
    dashboard.groups.push(DashboardGroup::new(title.clone()));
    Outcome::Changed(Change::GroupAdded { title })
}

pub(super) fn rename(dashboard: &mut Dashboard, title: &str, new_title: &str) -> Outcome {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Outcome::Unchanged(Reason::EmptyTitle);
    }
    let Some(index) = dashboard.group_index(title) else {
        return Outcome::Unchanged(Reason::UnknownGroup(title.to_string()));
    };
    if dashboard.group_index(new_title).is_some() {
        return Outcome::Unchanged(Reason::TitleTaken(new_title.to_string()));
    }
    dashboard.groups[index].title = new_title.to_string();
    Outcome::Changed(Change::GroupRenamed { title: new_title.to_string() })
}

pub(super) fn delete(dashboard: &mut Dashboard, title: &str) -> Outcome {
    let Some(index) = dashboard.group_index(title) else {
        return Outcome::Unchanged(Reason::UnknownGroup(title.to_string()));
    };
    let group = dashboard.groups.remove(index);
    Outcome::Changed(Change::GroupDeleted {
        title: group.title,
        items: group.items.into_iter().map(|i| i.id).collect(),
    })
}

pub(super) fn toggle(dashboard: &mut Dashboard, title: &str) -> Outcome {
    let Some(index) = dashboard.group_index(title) else {
        return Outcome::Unchanged(Reason::UnknownGroup(title.to_string()));
    };
    let group = &mut dashboard.groups[index];
    group.extended = !group.extended;
    Outcome::Changed(Change::GroupToggled { title: group.title.clone(), extended: group.extended })
}
