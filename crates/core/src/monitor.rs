// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job Monitor table state.
//!
//! This is the per-instance UI state the Job Monitor application persists:
//! its filters plus how the job table is laid out and paged.

use crate::category::CategoryType;
use crate::column::Column;
use crate::filter::Filter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page sizes the job table offers.
pub const PAGE_SIZES: [u32; 5] = [10, 25, 50, 100, 500];

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Zero-based table pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_index: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page_index: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    /// Back to the first page, keeping the page size.
    pub fn first_page(self) -> Self {
        Self { page_index: 0, ..self }
    }

    /// One-based page number, as the search endpoint expects.
    pub fn page_number(self) -> u32 {
        self.page_index + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPinning {
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

/// Persisted state of one Job Monitor instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobMonitorState {
    pub filters: Vec<Filter>,
    pub column_visibility: IndexMap<String, bool>,
    pub column_pinning: ColumnPinning,
    pub row_selection: IndexMap<String, bool>,
    pub pagination: Pagination,
}

impl Default for JobMonitorState {
    fn default() -> Self {
        let column_visibility = job_columns()
            .into_iter()
            .map(|c| {
                let visible = !HIDDEN_BY_DEFAULT.contains(&c.id.as_str());
                (c.id, visible)
            })
            .collect();
        Self {
            filters: Vec::new(),
            column_visibility,
            column_pinning: ColumnPinning { left: vec!["JobID".to_string()], right: Vec::new() },
            row_selection: IndexMap::new(),
            pagination: Pagination::default(),
        }
    }
}

impl JobMonitorState {
    /// Replace the filters and go back to the first page.
    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = filters;
        self.pagination = self.pagination.first_page();
        self.row_selection.clear();
    }

    pub fn selected_rows(&self) -> impl Iterator<Item = &str> {
        self.row_selection.iter().filter(|(_, on)| **on).map(|(k, _)| k.as_str())
    }
}

const HIDDEN_BY_DEFAULT: [&str; 6] =
    ["JobGroup", "OwnerGroup", "VO", "LastSignOfLife", "RescheduleCounter", "UserPriority"];

/// Columns of the job table.
pub fn job_columns() -> Vec<Column> {
    use CategoryType::{Date, Number, String as Text};
    [
        ("JobID", "ID", Number),
        ("JobName", "Name", Text),
        ("Site", "Site", Text),
        ("Status", "Status", Text),
        ("MinorStatus", "Minor Status", Text),
        ("ApplicationStatus", "Application Status", Text),
        ("JobType", "Type", Text),
        ("JobGroup", "Job Group", Text),
        ("Owner", "Owner", Text),
        ("OwnerGroup", "Owner Group", Text),
        ("VO", "VO", Text),
        ("SubmissionTime", "Submission Time", Date),
        ("LastUpdateTime", "Last Update Time", Date),
        ("LastSignOfLife", "Last Sign of Life", Date),
        ("RescheduleCounter", "Reschedule Counter", Number),
        ("UserPriority", "User Priority", Number),
    ]
    .into_iter()
    .map(|(id, label, kind)| Column::new(id).label(label).kind(kind))
    .collect()
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
