// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dashboard store: ordered groups of ordered items, changed only
//! through [`Dashboard::apply`].

mod groups;
mod items;
mod reorder;

use crate::action::{DashboardAction, DropTarget, Outcome, Reason};
use crate::model::{DashboardGroup, DashboardItem, ItemId};
use crate::registry::{AppRegistry, RegistryError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("duplicate group title '{0}'")]
    DuplicateGroup(String),
    #[error("duplicate item title '{title}' in group '{group}'")]
    DuplicateItemTitle { group: String, title: String },
    #[error("duplicate item id '{0}'")]
    DuplicateItemId(ItemId),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    registry: Arc<AppRegistry>,
    groups: Vec<DashboardGroup>,
    /// Next suffix for item ids. Never decreases, so freed ids are not reused.
    next_seq: u64,
}

impl Dashboard {
    pub fn new(registry: Arc<AppRegistry>) -> Self {
        Self { registry, groups: Vec::new(), next_seq: 0 }
    }

    /// Build a dashboard from groups loaded elsewhere.
    ///
    /// Icons are re-attached from the registry; unknown application types,
    /// duplicate group titles, duplicate item titles within a group and
    /// duplicate ids are rejected.
    pub fn hydrate(registry: Arc<AppRegistry>, mut groups: Vec<DashboardGroup>) -> Result<Self, DashboardError> {
        let mut seen_groups = std::collections::HashSet::new();
        let mut seen_ids = std::collections::HashSet::new();
        for group in &mut groups {
            if !seen_groups.insert(group.title.clone()) {
                return Err(DashboardError::DuplicateGroup(group.title.clone()));
            }
            let mut titles = std::collections::HashSet::new();
            for item in &mut group.items {
                item.icon = registry.get(&item.app_type)?.icon.clone();
                if !titles.insert(item.title.clone()) {
                    return Err(DashboardError::DuplicateItemTitle {
                        group: group.title.clone(),
                        title: item.title.clone(),
                    });
                }
                if !seen_ids.insert(item.id.clone()) {
                    return Err(DashboardError::DuplicateItemId(item.id.clone()));
                }
            }
        }
        let next_seq = groups.iter().map(|g| g.items.len() as u64).sum();
        Ok(Self { registry, groups, next_seq })
    }

    /// Suffix the next item id will start from.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Continue item ids from a counter saved alongside the layout.
    ///
    /// The counter only moves forward: a stale value below the current one
    /// is ignored.
    pub fn resume_seq(mut self, seq: u64) -> Self {
        self.next_seq = self.next_seq.max(seq);
        self
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &[DashboardGroup] {
        &self.groups
    }

    pub fn group(&self, title: &str) -> Option<&DashboardGroup> {
        self.groups.iter().find(|g| g.title == title)
    }

    pub fn item(&self, id: &str) -> Option<&DashboardItem> {
        self.groups.iter().flat_map(|g| &g.items).find(|i| i.id == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &DashboardItem> {
        self.groups.iter().flat_map(|g| &g.items)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Group index and position of an item.
    pub fn locate(&self, id: &str) -> Option<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .find_map(|(g, group)| group.position(id).map(|i| (g, i)))
    }

    fn group_index(&self, title: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.title == title)
    }

    /// Whether dropping `id` on `target` would move it, and if not, why.
    pub fn check_move(&self, id: &ItemId, target: &DropTarget) -> Result<(), Reason> {
        reorder::plan(self, id, target).map(|_| ())
    }

    /// Apply an action.
    ///
    /// Recoverable conditions (title collisions, unknown targets, no-op
    /// moves) come back as [`Outcome::Unchanged`] with the dashboard
    /// untouched. Only an unknown application type is an error.
    pub fn apply(&mut self, action: DashboardAction) -> Result<Outcome, DashboardError> {
        let name = action.name();
        let outcome = match action {
            DashboardAction::AddItem { app_type, title, group } => {
                items::add(self, &app_type, title, group.as_deref())?
            }
            DashboardAction::RenameItem { id, new_title } => items::rename(self, &id, &new_title),
            DashboardAction::DeleteItem { id } => items::delete(self, &id),

            DashboardAction::AddGroup => groups::add(self),
            DashboardAction::RenameGroup { title, new_title } => groups::rename(self, &title, &new_title),
            DashboardAction::DeleteGroup { title } => groups::delete(self, &title),
            DashboardAction::ToggleGroup { title } => groups::toggle(self, &title),

            DashboardAction::Move { id, target } => reorder::apply(self, &id, &target),
        };
        match &outcome {
            Outcome::Changed(change) => tracing::debug!(action = name, ?change, "dashboard changed"),
            Outcome::Unchanged(reason) => tracing::debug!(action = name, %reason, "dashboard unchanged"),
        }
        Ok(outcome)
    }
}

/// `base`, or `base 2`, `base 3`, ... until `taken` says no.
pub(crate) fn unique_title(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (2u64..)
        .map(|n| format!("{base} {n}"))
        .find(|t| !taken(t))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
#[path = "../store_tests/mod.rs"]
mod tests;
