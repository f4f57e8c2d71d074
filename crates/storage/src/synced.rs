// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A dashboard that writes itself back to the session store after every
//! change.

use crate::app_state;
use crate::layout::{self, LayoutError};
use crate::store::SessionStore;
use crate::url::{self as url_codec, SharedDashboard};
use dxw_dashboard::{AppRegistry, Change, Dashboard, DashboardAction, ItemId, Outcome};
use indexmap::IndexMap;
use std::sync::Arc;

pub struct SyncedDashboard<S> {
    dashboard: Dashboard,
    store: S,
}

impl<S: SessionStore> SyncedDashboard<S> {
    /// Load the stored layout, or start empty.
    pub fn open(registry: Arc<AppRegistry>, store: S) -> Result<Self, LayoutError> {
        let dashboard = match layout::load(&store, Arc::clone(&registry))? {
            Some(dashboard) => dashboard,
            None => Dashboard::new(registry),
        };
        tracing::debug!(groups = dashboard.groups().len(), items = dashboard.item_count(), "dashboard loaded");
        Ok(Self { dashboard, store })
    }

    /// Replace the stored dashboard and states with a shared link's.
    pub fn restore(registry: Arc<AppRegistry>, store: S, encoded: &str) -> Result<Self, LayoutError> {
        let shared = url_codec::decode(encoded)?;
        let mut dashboard = Dashboard::hydrate(registry, shared.layout)?;
        if let Some(seq) = layout::stored_seq(&store)? {
            dashboard = dashboard.resume_seq(seq);
        }
        for (id, state) in &shared.states {
            if dashboard.item(id).is_none() {
                tracing::warn!(%id, "shared link carries state for an unknown item");
                continue;
            }
            app_state::save(&store, id, state)?;
        }
        layout::save(&store, &dashboard)?;
        tracing::info!(items = dashboard.item_count(), "dashboard restored from link");
        Ok(Self { dashboard, store })
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an action and persist the layout if it changed.
    ///
    /// Deleted items take their stored state with them.
    pub fn apply(&mut self, action: DashboardAction) -> Result<Outcome, LayoutError> {
        let outcome = self.dashboard.apply(action)?;
        if let Outcome::Changed(change) = &outcome {
            match change {
                Change::ItemDeleted { id } => app_state::remove(&self.store, id)?,
                Change::GroupDeleted { items, .. } => {
                    for id in items {
                        app_state::remove(&self.store, id)?;
                    }
                }
                _ => {}
            }
            layout::save(&self.store, &self.dashboard)?;
        }
        Ok(outcome)
    }

    /// Encode the layout and every stored state as a link-safe string.
    pub fn share(&self) -> Result<String, LayoutError> {
        let mut states = IndexMap::new();
        for item in self.dashboard.items() {
            let Some(raw) = app_state::load_raw(&self.store, &item.id)? else {
                continue;
            };
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    states.insert(item.id.to_string(), value);
                }
                Err(e) => tracing::warn!(id = %item.id, error = %e, "not sharing unreadable state"),
            }
        }
        let shared = SharedDashboard { layout: self.dashboard.groups().to_vec(), states };
        Ok(url_codec::encode(&shared)?)
    }

    /// Raw state of an item, as exported.
    pub fn state_of(&self, id: &ItemId) -> Result<Option<String>, LayoutError> {
        Ok(app_state::load_raw(&self.store, id)?)
    }
}

#[cfg(test)]
#[path = "synced_tests.rs"]
mod tests;
