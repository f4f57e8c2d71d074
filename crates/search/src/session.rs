// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edited vs applied filters, and switching between application instances.

use crate::bar::{BarOptions, SearchBar, Step};
use crate::dataset::Row;
use dxw_core::monitor::PAGE_SIZES;
use dxw_core::{same_conditions, Clock, Column, Filter, FilterError, FilterIdGen, JobMonitorState, Pagination};
use dxw_wire::{compile, compile_free_text, SearchBody, SearchQuery, SortSpec};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("page size {0} is not one of 10, 25, 50, 100, 500")]
    PageSize(u32),
    #[error("no application is active")]
    NoActiveApp,
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Filter state of one table: what the user edited and what was submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSession {
    pub filters: Vec<Filter>,
    pub applied_filters: Vec<Filter>,
    pub pagination: Pagination,
    pub sort: Vec<SortSpec>,
}

impl FilterSession {
    /// Session restored from persisted Job Monitor state. Its filters count
    /// as applied.
    pub fn from_state(state: &JobMonitorState) -> Self {
        Self {
            filters: state.filters.clone(),
            applied_filters: state.filters.clone(),
            pagination: state.pagination,
            sort: Vec::new(),
        }
    }

    /// Write the session back into persisted state.
    pub fn store_into(&self, state: &mut JobMonitorState) {
        state.filters = self.applied_filters.clone();
        state.pagination = self.pagination;
    }

    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = filters;
    }

    /// Edited filters differ from the applied ones. Ids are ignored.
    pub fn has_unapplied_changes(&self) -> bool {
        !same_conditions(&self.filters, &self.applied_filters)
    }

    /// Submit the edited filters. Pagination goes back to the first page.
    pub fn apply(&mut self, columns: &[Column], options: BarOptions) -> Result<SearchQuery, SessionError> {
        let body = compile_with(&self.filters, columns, options)?;
        self.applied_filters = self.filters.clone();
        self.pagination = self.pagination.first_page();
        tracing::debug!(filters = self.applied_filters.len(), "filters applied");
        Ok(SearchQuery::new(body.with_sort(self.sort.clone()), self.pagination))
    }

    /// Query for the applied filters at the current page.
    pub fn query(&self, columns: &[Column], options: BarOptions) -> Result<SearchQuery, SessionError> {
        let body = compile_with(&self.applied_filters, columns, options)?;
        Ok(SearchQuery::new(body.with_sort(self.sort.clone()), self.pagination))
    }

    pub fn set_page(&mut self, page_index: u32) {
        self.pagination.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<(), SessionError> {
        if !PAGE_SIZES.contains(&page_size) {
            return Err(SessionError::PageSize(page_size));
        }
        self.pagination = Pagination { page_index: 0, page_size };
        Ok(())
    }

    /// Replace the sort order. Back to the first page.
    pub fn set_sort(&mut self, sort: Vec<SortSpec>) {
        self.sort = sort;
        self.pagination = self.pagination.first_page();
    }
}

fn compile_with(filters: &[Filter], columns: &[Column], options: BarOptions) -> Result<SearchBody, FilterError> {
    if options.allow_free_text {
        compile_free_text(filters, columns)
    } else {
        compile(filters, columns)
    }
}

/// One search bar shared by several application instances.
///
/// Switching instance swaps the session wholesale and rebuilds the bar from
/// the incoming session's filters and dataset.
pub struct SearchController<C: Clock> {
    bar: SearchBar<C>,
    options: BarOptions,
    sessions: IndexMap<String, FilterSession>,
    active: Option<String>,
}

impl<C: Clock> SearchController<C> {
    pub fn new(columns: Vec<Column>, ids: FilterIdGen<C>, options: BarOptions) -> Self {
        Self {
            bar: SearchBar::new(columns, ids).with_options(options),
            options,
            sessions: IndexMap::new(),
            active: None,
        }
    }

    pub fn bar(&self) -> &SearchBar<C> {
        &self.bar
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn session(&self, app_id: &str) -> Option<&FilterSession> {
        self.sessions.get(app_id)
    }

    pub fn active_session(&self) -> Option<&FilterSession> {
        self.active.as_deref().and_then(|id| self.sessions.get(id))
    }

    /// Make `app_id` the active instance.
    ///
    /// `session` seeds the instance the first time it is seen; later
    /// switches keep the session already held.
    pub fn switch_to(&mut self, app_id: &str, session: FilterSession, rows: &[Row]) {
        let session = self.sessions.entry(app_id.to_string()).or_insert(session);
        self.bar.set_dataset(rows);
        self.bar.load_filters(&session.filters.clone());
        self.active = Some(app_id.to_string());
        tracing::debug!(app_id, "search bar switched instance");
    }

    /// Run a bar operation; when it emits filters, apply them to the active
    /// session and return the resulting query.
    ///
    /// A list that fails to apply is retracted from the bar, so the next
    /// settled step emits it again.
    pub fn drive(
        &mut self,
        op: impl FnOnce(&mut SearchBar<C>) -> Step,
    ) -> Result<(Step, Option<SearchQuery>), SessionError> {
        let previous = self.bar.emitted().to_vec();
        let step = op(&mut self.bar);
        let Some(filters) = step.apply.clone() else {
            return Ok((step, None));
        };
        match self.apply_active(filters) {
            Ok(query) => Ok((step, Some(query))),
            Err(e) => {
                tracing::debug!(error = %e, "emitted filters not applied");
                self.bar.retract_emission(previous);
                Err(e)
            }
        }
    }

    fn apply_active(&mut self, filters: Vec<Filter>) -> Result<SearchQuery, SessionError> {
        let id = self.active.as_deref().ok_or(SessionError::NoActiveApp)?;
        let session = self.sessions.get_mut(id).ok_or(SessionError::NoActiveApp)?;
        session.set_filters(filters);
        session.apply(self.bar.columns(), self.options)
    }

    /// Drop an instance's session, e.g. when its dashboard item is deleted.
    pub fn forget(&mut self, app_id: &str) {
        self.sessions.shift_remove(app_id);
        if self.active.as_deref() == Some(app_id) {
            self.active = None;
            self.bar.clear();
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
