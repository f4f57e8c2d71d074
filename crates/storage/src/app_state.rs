// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-application state, stored under `{id}_State`.

use crate::store::{SessionStore, StoreError};
use dxw_core::JobMonitorState;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn state_key(id: &str) -> String {
    format!("{id}_State")
}

pub fn load<T: DeserializeOwned>(store: &impl SessionStore, id: &str) -> Result<Option<T>, StoreError> {
    match store.get(&state_key(id))? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save<T: Serialize>(store: &impl SessionStore, id: &str, state: &T) -> Result<(), StoreError> {
    store.set(&state_key(id), &serde_json::to_string(state)?)
}

/// Raw JSON text, as exported.
pub fn load_raw(store: &impl SessionStore, id: &str) -> Result<Option<String>, StoreError> {
    store.get(&state_key(id))
}

pub fn save_raw(store: &impl SessionStore, id: &str, json: &str) -> Result<(), StoreError> {
    store.set(&state_key(id), json)
}

pub fn remove(store: &impl SessionStore, id: &str) -> Result<(), StoreError> {
    store.remove(&state_key(id))
}

/// A Job Monitor's state, or the default layout for a fresh instance.
pub fn job_monitor(store: &impl SessionStore, id: &str) -> Result<JobMonitorState, StoreError> {
    Ok(load(store, id)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
