// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutations of the dashboard and their outcomes.

use crate::model::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the hovered item the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

dxw_core::simple_display! {
    Edge {
        Top => "top",
        Bottom => "bottom",
    }
}

/// Where a dragged item is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "on", rename_all = "snake_case")]
pub enum DropTarget {
    /// On an item: lands above or below it.
    Item { group_title: String, index: usize, edge: Edge },
    /// On a group header or its empty area: appended to the group.
    Group { group_title: String },
}

impl DropTarget {
    pub fn group_title(&self) -> &str {
        match self {
            DropTarget::Item { group_title, .. } | DropTarget::Group { group_title } => group_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Add an instance of a registered application.
    ///
    /// Lands in `group` when given, else in the last group (created when the
    /// dashboard is empty). `title` defaults to the application name.
    AddItem { app_type: String, title: Option<String>, group: Option<String> },
    AddGroup,
    RenameGroup { title: String, new_title: String },
    RenameItem { id: ItemId, new_title: String },
    DeleteGroup { title: String },
    DeleteItem { id: ItemId },
    ToggleGroup { title: String },
    Move { id: ItemId, target: DropTarget },
}

impl DashboardAction {
    pub fn add_item(app_type: impl Into<String>) -> Self {
        DashboardAction::AddItem { app_type: app_type.into(), title: None, group: None }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::AddItem { .. } => "add_item",
            DashboardAction::AddGroup => "add_group",
            DashboardAction::RenameGroup { .. } => "rename_group",
            DashboardAction::RenameItem { .. } => "rename_item",
            DashboardAction::DeleteGroup { .. } => "delete_group",
            DashboardAction::DeleteItem { .. } => "delete_item",
            DashboardAction::ToggleGroup { .. } => "toggle_group",
            DashboardAction::Move { .. } => "move",
        }
    }
}

/// What an applied action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    ItemAdded { id: ItemId, group: String, title: String },
    GroupAdded { title: String },
    GroupRenamed { title: String },
    ItemRenamed { id: ItemId, title: String },
    GroupDeleted { title: String, items: Vec<ItemId> },
    ItemDeleted { id: ItemId },
    GroupToggled { title: String, extended: bool },
    ItemMoved { id: ItemId, group: String, index: usize },
}

/// Why an action left the dashboard untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    UnknownGroup(String),
    UnknownItem(ItemId),
    TitleTaken(String),
    EmptyTitle,
    IndexOutOfRange { group: String, index: usize },
    /// The move would put the item back where it is.
    SamePosition,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::UnknownGroup(title) => write!(f, "no group named '{title}'"),
            Reason::UnknownItem(id) => write!(f, "no item with id '{id}'"),
            Reason::TitleTaken(title) => write!(f, "title '{title}' is already taken"),
            Reason::EmptyTitle => f.write_str("title is empty"),
            Reason::IndexOutOfRange { group, index } => {
                write!(f, "index {index} is out of range for group '{group}'")
            }
            Reason::SamePosition => f.write_str("item is already there"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed(Change),
    Unchanged(Reason),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }
}
