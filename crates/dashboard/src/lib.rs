// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dxw-dashboard: groups of application instances, the registry of
//! application types, and drag-and-drop reordering.

pub mod action;
pub mod drag;
pub mod model;
pub mod registry;
pub mod store;

pub use action::{Change, DashboardAction, DropTarget, Edge, Outcome, Reason};
pub use drag::{should_show_indicator, DragGesture, DragState, Hover};
pub use model::{DashboardGroup, DashboardItem, ItemId};
pub use registry::{AppDescriptor, AppRegistry, RegistryError, BASE_APPLICATION, JOB_MONITOR};
pub use store::{Dashboard, DashboardError};
