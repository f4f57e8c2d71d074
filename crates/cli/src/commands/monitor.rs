// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job Monitor command handlers

use anyhow::Result;
use clap::{Args, Subcommand};
use dxw_core::JobMonitorState;
use dxw_dashboard::{ItemId, JOB_MONITOR};
use dxw_search::{EquationStatus, FilterSession};
use dxw_storage::{app_state, FileStore, SyncedDashboard};
use dxw_wire::{SearchQuery, SortDirection, SortSpec};

use super::Context;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct MonitorArgs {
    #[command(subcommand)]
    pub command: MonitorCommand,
}

#[derive(Subcommand)]
pub enum MonitorCommand {
    /// Set a Job Monitor's filters from a query and print the search request
    Apply {
        /// Job Monitor item id
        id: String,
        /// Query text; empty clears the filters
        #[arg(default_value = "")]
        query: String,
        /// One-based page to request
        #[arg(long)]
        page: Option<u32>,
        /// Rows per page: 10, 25, 50, 100 or 500
        #[arg(long)]
        page_size: Option<u32>,
        /// Sort order, e.g. `--sort JobID:desc` (repeatable)
        #[arg(long, value_parser = parse_sort)]
        sort: Vec<SortSpec>,
    },
    /// Show a Job Monitor's stored filters and its current search request
    Show {
        /// Job Monitor item id
        id: String,
    },
}

pub fn handle(command: MonitorCommand, ctx: &Context) -> Result<()> {
    match command {
        MonitorCommand::Apply { id, query, page, page_size, sort } => {
            apply(ctx, &ItemId::new(id), &query, page, page_size, sort)
        }
        MonitorCommand::Show { id } => show(ctx, &ItemId::new(id)),
    }
}

/// `column[:asc|desc]`
pub(crate) fn parse_sort(text: &str) -> Result<SortSpec, String> {
    let (parameter, direction) = match text.rsplit_once(':') {
        Some((p, "asc")) => (p, SortDirection::Asc),
        Some((p, "desc")) => (p, SortDirection::Desc),
        Some((_, other)) => return Err(format!("sort direction must be asc or desc, not '{other}'")),
        None => (text, SortDirection::Asc),
    };
    if parameter.is_empty() {
        return Err("sort column is empty".to_string());
    }
    Ok(SortSpec { parameter: parameter.to_string(), direction })
}

/// The dashboard, after checking `id` names a Job Monitor on it.
fn open_monitor(ctx: &Context, id: &ItemId) -> Result<SyncedDashboard<FileStore>> {
    let synced = ctx.open_dashboard()?;
    match synced.dashboard().item(id) {
        Some(item) if item.app_type == JOB_MONITOR => Ok(synced),
        Some(item) => Err(ExitError::failed(format!("'{id}' is a {}, not a {JOB_MONITOR}", item.app_type)).into()),
        None => Err(ExitError::failed(format!("no item with id '{id}'")).into()),
    }
}

fn apply(
    ctx: &Context,
    id: &ItemId,
    query: &str,
    page: Option<u32>,
    page_size: Option<u32>,
    sort: Vec<SortSpec>,
) -> Result<()> {
    let synced = open_monitor(ctx, id)?;
    let store = synced.store();
    let mut state: JobMonitorState = app_state::job_monitor(store, id)?;

    let mut bar = ctx.search_bar();
    bar.submit_text(query).map_err(|e| ExitError::failed(e.to_string()))?;
    if !bar.draft().is_empty() || bar.statuses().iter().any(|s| *s != EquationStatus::Valid) {
        return Err(ExitError::failed(format!("query '{query}' is incomplete or invalid")).into());
    }

    let columns = ctx.columns();
    let options = ctx.config.bar_options();
    let mut session = FilterSession::from_state(&state);
    if let Some(size) = page_size.or(ctx.config.page_size) {
        session.set_page_size(size).map_err(|e| ExitError::failed(e.to_string()))?;
    }
    session.set_sort(sort);
    session.set_filters(bar.filters());
    session.apply(&columns, options)?;
    if let Some(page) = page {
        session.set_page(page.saturating_sub(1));
    }
    let request = session.query(&columns, options)?;

    session.store_into(&mut state);
    app_state::save(store, id, &state)?;
    tracing::info!(%id, filters = state.filters.len(), "job monitor filters applied");
    print_request(&request, ctx.format)
}

fn show(ctx: &Context, id: &ItemId) -> Result<()> {
    let synced = open_monitor(ctx, id)?;
    let state = app_state::job_monitor(synced.store(), id)?;
    let session = FilterSession::from_state(&state);
    let request = session.query(&ctx.columns(), ctx.config.bar_options())?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "state": state, "request": request }))?,
        OutputFormat::Text => {
            if state.filters.is_empty() {
                println!("{}", color::muted("No filters"));
            }
            for filter in &state.filters {
                println!("{filter}");
            }
            print_request(&request, OutputFormat::Text)?;
        }
    }
    Ok(())
}

fn print_request(request: &SearchQuery, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(request),
        OutputFormat::Text => {
            println!("{}", color::muted(&request.query_string()));
            let body = dxw_wire::encode(&request.body)?;
            println!("{}", String::from_utf8_lossy(&body));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
