// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a data hook reports at a point in time.

use serde::{Deserialize, Serialize};

/// Snapshot of an asynchronous fetch: `{data, error, isLoading}`.
///
/// The engine only observes these; fetching, retrying and caching belong
/// to whoever produces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl<T> Default for DataSnapshot<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> DataSnapshot<T> {
    pub fn loading() -> Self {
        Self { data: None, error: None, is_loading: true }
    }

    pub fn ready(data: T) -> Self {
        Self { data: Some(data), error: None, is_loading: false }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { data: None, error: Some(error.into()), is_loading: false }
    }

    /// Data if the fetch finished without error.
    pub fn settled(&self) -> Option<&T> {
        match (self.is_loading, &self.error) {
            (false, None) => self.data.as_ref(),
            _ => None,
        }
    }
}
