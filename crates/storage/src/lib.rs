// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dxw-storage: session persistence for the dashboard and its applications

pub mod app_state;
pub mod layout;
mod store;
mod synced;
pub mod transfer;
pub mod url;

pub use layout::{LayoutError, ITEM_SEQ_KEY, LAYOUT_KEY};
pub use store::{FileStore, MemoryStore, SessionStore, StoreError};
pub use synced::SyncedDashboard;
pub use transfer::{export, export_json, import, ExportEntry, ImportReport, TransferError, NULL_STATE};
pub use url::{CodecError, SharedDashboard};
