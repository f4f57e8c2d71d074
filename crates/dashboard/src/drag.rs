// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drag gesture: `Idle → Dragging → (hover) → drop → Idle`.
//!
//! The gesture never touches the dashboard until `drop`, and `drop` commits
//! through [`Dashboard::apply`] as a single move.

use crate::action::{DashboardAction, DropTarget, Outcome, Reason};
use crate::model::ItemId;
use crate::store::{Dashboard, DashboardError};

/// What the hovered target should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub target: DropTarget,
    /// Whether a "drop here" line is drawn. Off where the drop would not
    /// move the item.
    pub indicator: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: ItemId,
        hover: Option<Hover>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging an item. Only one gesture runs at a time; a new
    /// `begin` replaces any gesture in progress.
    pub fn begin(&mut self, source: ItemId) {
        if self.is_dragging() {
            tracing::warn!(%source, "drag started while another drag was active");
        }
        self.state = DragState::Dragging { source, hover: None };
    }

    /// Pointer over a target. Returns whether to show a drop indicator.
    pub fn hover(&mut self, dashboard: &Dashboard, target: DropTarget) -> bool {
        let DragState::Dragging { source, hover } = &mut self.state else {
            return false;
        };
        let indicator = should_show_indicator(dashboard, source, &target);
        *hover = Some(Hover { target, indicator });
        indicator
    }

    /// Pointer left every target.
    pub fn leave(&mut self) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = None;
        }
    }

    /// Release. Moves the item when over a target; always ends the gesture.
    pub fn drop(&mut self, dashboard: &mut Dashboard) -> Result<Option<Outcome>, DashboardError> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { source, hover: Some(hover) } => {
                dashboard.apply(DashboardAction::Move { id: source, target: hover.target }).map(Some)
            }
            DragState::Dragging { hover: None, .. } | DragState::Idle => Ok(None),
        }
    }

    /// Escape, or release outside any target.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// No indicator on the source itself, on the slot just above it with edge
/// bottom, on the slot just below it with edge top, or on its own group.
pub fn should_show_indicator(dashboard: &Dashboard, source: &ItemId, target: &DropTarget) -> bool {
    match dashboard.check_move(source, target) {
        Ok(()) => true,
        Err(Reason::SamePosition) => false,
        Err(reason) => {
            tracing::debug!(%source, %reason, "hover over unusable drop target");
            false
        }
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
