// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dashboard;
pub mod monitor;
pub mod search;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use dxw_core::{Column, FilterIdGen, SystemClock};
use dxw_dashboard::AppRegistry;
use dxw_search::{Row, SearchBar};
use dxw_storage::{FileStore, SyncedDashboard, LAYOUT_KEY};
use dxw_wire::DataSnapshot;
use serde::Deserialize;

use crate::config::Config;
use crate::output::OutputFormat;

/// What every command gets: resolved config, state directory and output format.
pub struct Context {
    pub config: Config,
    pub state_dir: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    pub fn columns(&self) -> Vec<Column> {
        self.config.columns()
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_dir).backup(LAYOUT_KEY)
    }

    pub fn open_dashboard(&self) -> Result<SyncedDashboard<FileStore>> {
        SyncedDashboard::open(Arc::new(AppRegistry::builtin()), self.store())
            .with_context(|| format!("loading dashboard from {}", self.state_dir.display()))
    }

    pub fn search_bar(&self) -> SearchBar<SystemClock> {
        SearchBar::new(self.columns(), FilterIdGen::new(SystemClock)).with_options(self.config.bar_options())
    }
}

/// A dataset file: bare rows, or a data-hook snapshot wrapping them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Rows(Vec<Row>),
    Snapshot(DataSnapshot<Vec<Row>>),
}

/// Rows for value suggestions.
///
/// A snapshot that is still loading or failed contributes no rows.
pub fn read_dataset(path: &std::path::Path) -> Result<Vec<Row>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: DatasetFile = dxw_wire::decode(&bytes)
        .with_context(|| format!("{} is neither a row array nor a data snapshot", path.display()))?;
    Ok(match file {
        DatasetFile::Rows(rows) => rows,
        DatasetFile::Snapshot(snapshot) => {
            if let Some(error) = &snapshot.error {
                tracing::warn!(path = %path.display(), error = %error, "dataset snapshot carries an error");
            }
            snapshot.settled().cloned().unwrap_or_default()
        }
    })
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &std::path::Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
