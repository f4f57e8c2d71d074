// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application registry: maps an item's `type` to how it is presented.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("application '{0}' is already registered")]
    Duplicate(String),
    #[error("unknown application type '{0}'")]
    Unknown(String),
    #[error("application name is empty")]
    EmptyName,
}

/// A registered kind of application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Name used as the item `type` and as the default item title.
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { name: name.into(), icon: icon.into(), description: String::new() }
    }

    dxw_core::setters! {
        into { description: String }
    }
}

pub const JOB_MONITOR: &str = "Job Monitor";
pub const BASE_APPLICATION: &str = "Base Application";

/// Registered applications in registration order.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: IndexMap<String, AppDescriptor>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The applications shipped with the dashboard.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for app in [
            AppDescriptor::new(JOB_MONITOR, "monitor").description("Monitor, filter and act on jobs"),
            AppDescriptor::new(BASE_APPLICATION, "dashboard").description("Empty application template"),
        ] {
            // Names above are distinct and non-empty
            let _ = registry.register(app);
        }
        registry
    }

    pub fn register(&mut self, app: AppDescriptor) -> Result<(), RegistryError> {
        if app.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.apps.contains_key(&app.name) {
            return Err(RegistryError::Duplicate(app.name));
        }
        self.apps.insert(app.name.clone(), app);
        Ok(())
    }

    pub fn get(&self, app_type: &str) -> Result<&AppDescriptor, RegistryError> {
        self.apps.get(app_type).ok_or_else(|| RegistryError::Unknown(app_type.to_string()))
    }

    pub fn contains(&self, app_type: &str) -> bool {
        self.apps.contains_key(app_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.values()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
