// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard command handlers

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use dxw_dashboard::{AppRegistry, DashboardAction, DropTarget, Edge, ItemId};
use dxw_storage::{transfer, SyncedDashboard};

use super::Context;
use crate::exit_error::ExitError;
use crate::output::{format_dashboard, print_json, report_outcome, OutputFormat};

#[derive(Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EdgeArg {
    Top,
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Top => Edge::Top,
            EdgeArg::Bottom => Edge::Bottom,
        }
    }
}

#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Show groups and their applications
    Show,
    /// Add an application instance
    Add {
        /// Application type, e.g. "Job Monitor"
        app_type: String,
        /// Title (defaults to the application name)
        #[arg(long)]
        title: Option<String>,
        /// Group to add to (defaults to the last group)
        #[arg(long)]
        group: Option<String>,
    },
    /// Add an empty group
    NewGroup,
    /// Rename a group
    RenameGroup { title: String, new_title: String },
    /// Rename an application instance
    RenameItem { id: String, new_title: String },
    /// Delete a group and everything in it
    DeleteGroup { title: String },
    /// Delete an application instance
    DeleteItem { id: String },
    /// Expand or collapse a group
    Toggle { title: String },
    /// Move an application instance
    ///
    /// Without --index the item is appended to the group.
    Move {
        id: String,
        /// Destination group
        #[arg(long)]
        group: String,
        /// Item to drop on, by position in the destination group
        #[arg(long)]
        index: Option<usize>,
        /// Which half of the target item to drop on
        #[arg(long, value_enum, default_value = "top", requires = "index")]
        edge: EdgeArg,
    },
    /// Export application instances with their state
    Export {
        /// Item ids (all items when omitted)
        ids: Vec<String>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Import application instances from an export document (`-` for stdin)
    Import { file: PathBuf },
    /// Print a shareable link payload for the dashboard
    Url,
    /// Replace the dashboard with one from a link payload
    LoadUrl { payload: String },
    /// List the registered application types
    Apps,
}

pub fn handle(command: DashboardCommand, ctx: &Context) -> Result<()> {
    let action = match command {
        DashboardCommand::Show => return show(ctx),
        DashboardCommand::Export { ids, file } => return export(ctx, ids, file),
        DashboardCommand::Import { file } => return import(ctx, file),
        DashboardCommand::Url => return share(ctx),
        DashboardCommand::LoadUrl { payload } => return load_url(ctx, &payload),
        DashboardCommand::Apps => return apps(ctx),

        DashboardCommand::Add { app_type, title, group } => DashboardAction::AddItem { app_type, title, group },
        DashboardCommand::NewGroup => DashboardAction::AddGroup,
        DashboardCommand::RenameGroup { title, new_title } => DashboardAction::RenameGroup { title, new_title },
        DashboardCommand::RenameItem { id, new_title } => {
            DashboardAction::RenameItem { id: ItemId::new(id), new_title }
        }
        DashboardCommand::DeleteGroup { title } => DashboardAction::DeleteGroup { title },
        DashboardCommand::DeleteItem { id } => DashboardAction::DeleteItem { id: ItemId::new(id) },
        DashboardCommand::Toggle { title } => DashboardAction::ToggleGroup { title },
        DashboardCommand::Move { id, group, index, edge } => {
            let target = match index {
                Some(index) => DropTarget::Item { group_title: group, index, edge: edge.into() },
                None => DropTarget::Group { group_title: group },
            };
            DashboardAction::Move { id: ItemId::new(id), target }
        }
    };

    let mut synced = ctx.open_dashboard()?;
    let outcome = synced.apply(action)?;
    report_outcome(&outcome, ctx.format)
}

fn show(ctx: &Context) -> Result<()> {
    let synced = ctx.open_dashboard()?;
    match ctx.format {
        OutputFormat::Text => print!("{}", format_dashboard(synced.dashboard())),
        OutputFormat::Json => print_json(synced.dashboard().groups())?,
    }
    Ok(())
}

fn apps(ctx: &Context) -> Result<()> {
    let registry = AppRegistry::builtin();
    match ctx.format {
        OutputFormat::Text => {
            for app in registry.iter() {
                println!("{:<20} {}", app.name, crate::color::muted(&app.description));
            }
        }
        OutputFormat::Json => {
            let names: Vec<_> = registry
                .iter()
                .map(|a| serde_json::json!({ "name": a.name, "icon": a.icon, "description": a.description }))
                .collect();
            print_json(&names)?;
        }
    }
    Ok(())
}

fn export(ctx: &Context, ids: Vec<String>, file: Option<PathBuf>) -> Result<()> {
    let synced = ctx.open_dashboard()?;
    let ids: Vec<ItemId> = ids.into_iter().map(ItemId::new).collect();
    let json = transfer::export_json(&synced, &ids)?;
    match file {
        Some(path) => {
            std::fs::write(&path, json.as_bytes()).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn import(ctx: &Context, file: PathBuf) -> Result<()> {
    let text = super::read_input(&file)?;
    let mut synced = ctx.open_dashboard()?;
    let report = match transfer::import(&mut synced, &text) {
        Ok(report) => report,
        Err(e @ dxw_storage::TransferError::InvalidJson) => return Err(ExitError::failed(e.to_string()).into()),
        Err(e) => return Err(e.into()),
    };
    match ctx.format {
        OutputFormat::Json => {
            let ids: Vec<&str> = report.imported.iter().map(ItemId::as_str).collect();
            print_json(&serde_json::json!({ "imported": ids, "skipped": report.skipped }))?;
        }
        OutputFormat::Text => {
            if let Some(message) = report.confirmation() {
                println!("{message}");
            }
        }
    }
    Ok(())
}

fn share(ctx: &Context) -> Result<()> {
    let synced = ctx.open_dashboard()?;
    println!("{}", synced.share()?);
    Ok(())
}

fn load_url(ctx: &Context, payload: &str) -> Result<()> {
    let synced = SyncedDashboard::restore(Arc::new(AppRegistry::builtin()), ctx.store(), payload)
        .map_err(|e| ExitError::failed(e.to_string()))?;
    match ctx.format {
        OutputFormat::Text => print!("{}", format_dashboard(synced.dashboard())),
        OutputFormat::Json => print_json(synced.dashboard().groups())?,
    }
    Ok(())
}
