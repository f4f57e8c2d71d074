// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use dxw_dashboard::{Change, Dashboard, Outcome};
use serde::Serialize;

use crate::color;
use crate::exit_error::ExitError;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Dashboard tree: one line per group, items indented beneath.
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    if dashboard.groups().is_empty() {
        return "No groups\n".to_string();
    }
    let mut out = String::new();
    for group in dashboard.groups() {
        let marker = if group.extended { "▾" } else { "▸" };
        out.push_str(&format!("{marker} {}\n", color::header(&group.title)));
        if !group.extended {
            continue;
        }
        for item in &group.items {
            out.push_str(&format!(
                "    {} {} {}\n",
                item.title,
                color::literal(&format!("[{}]", item.id)),
                color::muted(&item.app_type)
            ));
        }
    }
    out
}

/// One line describing an applied change.
pub fn format_change(change: &Change) -> String {
    match change {
        Change::ItemAdded { id, group, title } => format!("Added '{title}' ({id}) to '{group}'"),
        Change::GroupAdded { title } => format!("Added group '{title}'"),
        Change::GroupRenamed { title } => format!("Renamed group to '{title}'"),
        Change::ItemRenamed { id, title } => format!("Renamed {id} to '{title}'"),
        Change::GroupDeleted { title, items } => match items.len() {
            0 => format!("Deleted group '{title}'"),
            n => format!("Deleted group '{title}' and {n} item(s)"),
        },
        Change::ItemDeleted { id } => format!("Deleted {id}"),
        Change::GroupToggled { title, extended: true } => format!("Expanded '{title}'"),
        Change::GroupToggled { title, extended: false } => format!("Collapsed '{title}'"),
        Change::ItemMoved { id, group, index } => format!("Moved {id} to '{group}' at position {index}"),
    }
}

/// Print a changed outcome; an unchanged one becomes exit code 2.
pub fn report_outcome(outcome: &Outcome, format: OutputFormat) -> anyhow::Result<()> {
    match outcome {
        Outcome::Changed(change) => {
            match format {
                OutputFormat::Text => println!("{}", format_change(change)),
                OutputFormat::Json => print_json(&serde_json::json!({ "changed": format_change(change) }))?,
            }
            Ok(())
        }
        Outcome::Unchanged(reason) => Err(ExitError::unchanged(reason).into()),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
