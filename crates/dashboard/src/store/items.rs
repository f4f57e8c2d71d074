// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Item actions.

use super::{groups, unique_title, Dashboard, DashboardError};
use crate::action::{Change, Outcome, Reason};
use crate::model::{DashboardGroup, DashboardItem, ItemId};

pub(super) fn add(
    dashboard: &mut Dashboard,
    app_type: &str,
    title: Option<String>,
    group: Option<&str>,
) -> Result<Outcome, DashboardError> {
    let app = dashboard.registry.get(app_type)?.clone();

    let index = match group {
        Some(name) => match dashboard.group_index(name) {
            Some(index) => index,
            None => return Ok(Outcome::Unchanged(Reason::UnknownGroup(name.to_string()))),
        },
        None if dashboard.groups.is_empty() => {
            let title = groups::next_group_title(dashboard);
            dashboard.groups.push(DashboardGroup::new(title));
            0
        }
        None => dashboard.groups.len() - 1,
    };

    let base = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| app.name.clone());
    let target = &dashboard.groups[index];
    let title = unique_title(&base, |t| target.has_title(t));

    let id = next_id(dashboard, &title);
    let group = &mut dashboard.groups[index];
    group.items.push(DashboardItem { title: title.clone(), id: id.clone(), app_type: app.name, icon: app.icon });
    Ok(Outcome::Changed(Change::ItemAdded { id, group: group.title.clone(), title }))
}

/// `{title}{seq}` with `seq` at least the current item count, bumped past
/// any id in use.
fn next_id(dashboard: &mut Dashboard, title: &str) -> ItemId {
    let mut seq = dashboard.next_seq.max(dashboard.item_count() as u64);
    loop {
        let id = ItemId::new(format!("{title}{seq}"));
        seq = seq.saturating_add(1);
        if dashboard.item(&id).is_none() {
            dashboard.next_seq = seq;
            return id;
        }
    }
}

pub(super) fn rename(dashboard: &mut Dashboard, id: &ItemId, new_title: &str) -> Outcome {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Outcome::Unchanged(Reason::EmptyTitle);
    }
    let Some((g, i)) = dashboard.locate(id) else {
        return Outcome::Unchanged(Reason::UnknownItem(id.clone()));
    };
    let group = &mut dashboard.groups[g];
    if group.items.iter().enumerate().any(|(j, item)| j != i && item.title == new_title) {
        return Outcome::Unchanged(Reason::TitleTaken(new_title.to_string()));
    }
    group.items[i].title = new_title.to_string();
    Outcome::Changed(Change::ItemRenamed { id: id.clone(), title: new_title.to_string() })
}

pub(super) fn delete(dashboard: &mut Dashboard, id: &ItemId) -> Outcome {
    let Some((g, i)) = dashboard.locate(id) else {
        return Outcome::Unchanged(Reason::UnknownItem(id.clone()));
    };
    dashboard.groups[g].items.remove(i);
    Outcome::Changed(Change::ItemDeleted { id: id.clone() })
}
