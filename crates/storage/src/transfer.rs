// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Export and import of application instances: `[{appType, appName?, state}]`.

use crate::app_state;
use crate::layout::LayoutError;
use crate::store::SessionStore;
use crate::synced::SyncedDashboard;
use dxw_dashboard::{Change, DashboardAction, ItemId, Outcome, RegistryError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `state` value of an instance that has nothing stored.
pub const NULL_STATE: &str = "null";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Invalid JSON format")]
    InvalidJson,
    #[error("no item with id '{0}'")]
    UnknownItem(ItemId),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// One exported application instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    pub app_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// The instance's stored state as JSON text, or `"null"`.
    pub state: String,
}

/// Export the given items, or every item when `ids` is empty.
pub fn export<S: SessionStore>(synced: &SyncedDashboard<S>, ids: &[ItemId]) -> Result<Vec<ExportEntry>, TransferError> {
    let dashboard = synced.dashboard();
    let items: Vec<_> = if ids.is_empty() {
        dashboard.items().collect()
    } else {
        ids.iter()
            .map(|id| dashboard.item(id).ok_or_else(|| TransferError::UnknownItem(id.clone())))
            .collect::<Result<_, _>>()?
    };
    items
        .into_iter()
        .map(|item| -> Result<ExportEntry, TransferError> {
            Ok(ExportEntry {
                app_type: item.app_type.clone(),
                app_name: Some(item.title.clone()),
                state: synced.state_of(&item.id)?.unwrap_or_else(|| NULL_STATE.to_string()),
            })
        })
        .collect()
}

/// Serialized export document.
pub fn export_json<S: SessionStore>(synced: &SyncedDashboard<S>, ids: &[ItemId]) -> Result<String, TransferError> {
    let entries = export(synced, ids)?;
    serde_json::to_string_pretty(&entries).map_err(|e| TransferError::Layout(LayoutError::Json(e)))
}

/// What an import added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<ItemId>,
    /// Entries without state.
    pub skipped: usize,
}

impl ImportReport {
    /// Message to show the user; nothing when no instance was added.
    pub fn confirmation(&self) -> Option<String> {
        match self.imported.len() {
            0 => None,
            1 => Some("Imported 1 application".to_string()),
            n => Some(format!("Imported {n} applications")),
        }
    }
}

/// Add the instances of an export document to the dashboard.
///
/// The whole document is checked before anything changes: malformed JSON,
/// a malformed `state`, or an unregistered `appType` leave the dashboard
/// and store untouched. Entries whose state is `"null"` are skipped.
pub fn import<S: SessionStore>(synced: &mut SyncedDashboard<S>, json: &str) -> Result<ImportReport, TransferError> {
    let entries: Vec<ExportEntry> = serde_json::from_str(json).map_err(|e| {
        tracing::warn!(error = %e, "rejected import document");
        TransferError::InvalidJson
    })?;

    let (importable, skipped): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.state != NULL_STATE);
    for entry in &importable {
        synced.dashboard().registry().get(&entry.app_type)?;
        if serde_json::from_str::<serde_json::Value>(&entry.state).is_err() {
            tracing::warn!(app_type = %entry.app_type, "rejected import entry with malformed state");
            return Err(TransferError::InvalidJson);
        }
    }

    let mut report = ImportReport { imported: Vec::new(), skipped: skipped.len() };
    for entry in importable {
        let action = DashboardAction::AddItem { app_type: entry.app_type, title: entry.app_name, group: None };
        let id = match synced.apply(action)? {
            Outcome::Changed(Change::ItemAdded { id, .. }) => id,
            other => {
                tracing::warn!(outcome = ?other, "import entry was not added");
                continue;
            }
        };
        app_state::save_raw(synced.store(), &id, &entry.state).map_err(LayoutError::from)?;
        report.imported.push(id);
    }
    if !report.imported.is_empty() {
        tracing::info!(imported = report.imported.len(), skipped = report.skipped, "applications imported");
    }
    Ok(report)
}

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
