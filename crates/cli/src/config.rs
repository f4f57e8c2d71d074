// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `config.toml` loading.
//!
//! ```toml
//! state_dir = "/tmp/dxw"
//! page_size = 50
//! allow_free_text = false
//!
//! [[columns]]
//! id = "Site"
//! label = "Grid site"
//!
//! [[columns]]
//! id = "JobGroup"
//! hidden = true
//! ```

use dxw_core::monitor::PAGE_SIZES;
use dxw_core::{job_columns, CategoryType, Column};
use dxw_search::BarOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config {path}: {source}")]
    Toml { path: PathBuf, source: toml::de::Error },
    #[error("page_size {0} is not one of 10, 25, 50, 100, 500")]
    PageSize(u32),
    #[error("no state directory: set DXW_STATE_DIR or state_dir in the config")]
    NoStateDir,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub state_dir: Option<PathBuf>,
    pub page_size: Option<u32>,
    pub allow_free_text: bool,
    pub columns: Vec<ColumnOverride>,
}

/// Change, hide or add a Job Monitor column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnOverride {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<CategoryType>,
    #[serde(default)]
    pub hidden: bool,
}

impl Config {
    /// Load from `path`. A missing file is an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
        };
        Self::parse(&text).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml { path: path.to_path_buf(), source },
            other => other,
        })
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(text).map_err(|source| ConfigError::Toml { path: PathBuf::new(), source })?;
        if let Some(size) = config.page_size {
            if !PAGE_SIZES.contains(&size) {
                return Err(ConfigError::PageSize(size));
            }
        }
        Ok(config)
    }

    /// State directory: flag > `DXW_STATE_DIR` > config > platform default.
    pub fn state_dir(&self, flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
        flag.map(Path::to_path_buf)
            .or_else(crate::env::state_dir_override)
            .or_else(|| self.state_dir.clone())
            .or_else(crate::env::default_state_dir)
            .ok_or(ConfigError::NoStateDir)
    }

    pub fn bar_options(&self) -> BarOptions {
        BarOptions { allow_free_text: self.allow_free_text }
    }

    /// Job Monitor columns with overrides applied, in table order.
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = job_columns();
        for o in &self.columns {
            match columns.iter().position(|c| c.id == o.id) {
                Some(i) if o.hidden => {
                    columns.remove(i);
                }
                Some(i) => {
                    let column = &mut columns[i];
                    if let Some(label) = &o.label {
                        column.label = label.clone();
                    }
                    if o.kind.is_some() {
                        column.kind = o.kind;
                    }
                }
                None if o.hidden => {}
                None => {
                    let mut column = Column::new(o.id.as_str());
                    if let Some(label) = &o.label {
                        column = column.label(label.as_str());
                    }
                    column.kind = o.kind;
                    columns.push(column);
                }
            }
        }
        columns
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
