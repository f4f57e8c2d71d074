// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-and-drop reorder with index correction.

use super::Dashboard;
use crate::action::{Change, DropTarget, Edge, Outcome, Reason};
use crate::model::ItemId;

/// A resolved move: both ends checked, destination already corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Plan {
    from: (usize, usize),
    to_group: usize,
    /// `None` appends.
    to_index: Option<usize>,
}

/// Resolve source and destination without touching the dashboard.
pub(super) fn plan(dashboard: &Dashboard, id: &ItemId, target: &DropTarget) -> Result<Plan, Reason> {
    let (source_group, source_index) = dashboard.locate(id).ok_or_else(|| Reason::UnknownItem(id.clone()))?;
    let to_group = dashboard
        .group_index(target.group_title())
        .ok_or_else(|| Reason::UnknownGroup(target.group_title().to_string()))?;

    let mut to_index = match target {
        DropTarget::Group { .. } => None,
        DropTarget::Item { index, edge, group_title } => {
            if *index >= dashboard.groups[to_group].items.len() {
                return Err(Reason::IndexOutOfRange { group: group_title.clone(), index: *index });
            }
            Some(match edge {
                Edge::Top => *index,
                Edge::Bottom => *index + 1,
            })
        }
    };

    if to_group == source_group {
        match to_index {
            None => return Err(Reason::SamePosition),
            Some(dest) if dest == source_index => return Err(Reason::SamePosition),
            Some(dest) if source_index < dest => {
                // Removing the source shifts everything after it up by one
                to_index = Some(dest - 1);
                if dest - 1 == source_index {
                    return Err(Reason::SamePosition);
                }
            }
            Some(_) => {}
        }
    }
    Ok(Plan { from: (source_group, source_index), to_group, to_index })
}

pub(super) fn apply(dashboard: &mut Dashboard, id: &ItemId, target: &DropTarget) -> Outcome {
    let plan = match plan(dashboard, id, target) {
        Ok(plan) => plan,
        Err(reason) => return Outcome::Unchanged(reason),
    };
    let (g, i) = plan.from;
    let item = dashboard.groups[g].items.remove(i);
    let items = &mut dashboard.groups[plan.to_group].items;
    let index = match plan.to_index {
        Some(index) => index.min(items.len()),
        None => items.len(),
    };
    items.insert(index, item);
    Outcome::Changed(Change::ItemMoved {
        id: id.clone(),
        group: dashboard.groups[plan.to_group].title.clone(),
        index,
    })
}
