// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Groups and the application instances they hold.

use serde::{Deserialize, Serialize};

dxw_core::define_id! {
    /// Stable, dashboard-wide unique id of an application instance.
    ///
    /// Also the key its per-app state is stored under.
    pub struct ItemId;
}

/// One application instance on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardItem {
    pub title: String,
    pub id: ItemId,
    /// Registered application name, e.g. `Job Monitor`.
    #[serde(rename = "type")]
    pub app_type: String,
    /// Icon resolved from the registry. Never persisted.
    #[serde(skip)]
    pub icon: String,
}

/// A named, collapsible container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardGroup {
    pub title: String,
    pub extended: bool,
    pub items: Vec<DashboardItem>,
}

impl DashboardGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), extended: true, items: Vec::new() }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.items.iter().any(|i| i.title == title)
    }
}
