// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// State directory override: `DXW_STATE_DIR`.
pub fn state_dir_override() -> Option<PathBuf> {
    std::env::var_os("DXW_STATE_DIR").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Default state directory: XDG_STATE_HOME/dxw > platform state dir > local data dir.
pub fn default_state_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("dxw"));
    }
    dirs::state_dir().or_else(dirs::data_local_dir).map(|d| d.join("dxw"))
}

/// Config file: DXW_CONFIG > <config_dir>/dxw/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DXW_CONFIG").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("dxw").join("config.toml"))
}

/// Log filter directives from `DXW_LOG`, e.g. `debug` or `dxw_search=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("DXW_LOG").ok().filter(|s| !s.is_empty())
}
