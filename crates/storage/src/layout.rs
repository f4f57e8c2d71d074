// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted dashboard shape: `[{title, extended, items: [{title, id, type}]}]`.
//!
//! Icons are presentation only; they are dropped on save and looked up in the
//! registry on load.

use crate::store::{SessionStore, StoreError};
use crate::url::CodecError;
use dxw_dashboard::{AppRegistry, Dashboard, DashboardError, DashboardGroup};
use std::sync::Arc;
use thiserror::Error;

/// Session key the layout is stored under.
pub const LAYOUT_KEY: &str = "savedDashboardData";

/// Session key of the item id counter, kept next to the layout so ids freed
/// by a delete stay retired across reloads.
pub const ITEM_SEQ_KEY: &str = "dashboardItemSeq";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed dashboard layout: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error("invalid dashboard link: {0}")]
    Codec(#[from] CodecError),
}

/// Serialize the stripped layout.
pub fn to_json(groups: &[DashboardGroup]) -> Result<String, LayoutError> {
    Ok(serde_json::to_string(groups)?)
}

/// Parse a stripped layout and re-attach icons.
pub fn from_json(registry: Arc<AppRegistry>, json: &str) -> Result<Dashboard, LayoutError> {
    let groups: Vec<DashboardGroup> = serde_json::from_str(json)?;
    Ok(Dashboard::hydrate(registry, groups)?)
}

pub fn save(store: &impl SessionStore, dashboard: &Dashboard) -> Result<(), LayoutError> {
    store.set(LAYOUT_KEY, &to_json(dashboard.groups())?)?;
    store.set(ITEM_SEQ_KEY, &dashboard.next_seq().to_string())?;
    Ok(())
}

/// The saved item id counter, if any.
pub fn stored_seq(store: &impl SessionStore) -> Result<Option<u64>, LayoutError> {
    match store.get(ITEM_SEQ_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// The stored dashboard, or `None` when nothing was saved yet.
pub fn load(store: &impl SessionStore, registry: Arc<AppRegistry>) -> Result<Option<Dashboard>, LayoutError> {
    let Some(json) = store.get(LAYOUT_KEY)? else {
        return Ok(None);
    };
    let dashboard = from_json(registry, &json)?;
    Ok(Some(match stored_seq(store)? {
        Some(seq) => dashboard.resume_seq(seq),
        None => dashboard,
    }))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
