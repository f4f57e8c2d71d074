// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value types of filterable columns.

use serde::{Deserialize, Serialize};

/// Value type of a column. Drives the operator subset offered for it and
/// how typed values are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Number,
    String,
    Boolean,
    Date,
    /// Free text category that matches no known column.
    Custom,
    #[default]
    Unknown,
}

impl CategoryType {
    /// Infer a type from a JSON sample value.
    ///
    /// Strings that look like dates are not promoted: a column's date type
    /// comes from its definition, not from its data.
    pub fn infer(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(_) => CategoryType::Number,
            serde_json::Value::Bool(_) => CategoryType::Boolean,
            serde_json::Value::String(_) => CategoryType::String,
            _ => CategoryType::Unknown,
        }
    }
}

crate::simple_display! {
    CategoryType {
        Number => "number",
        String => "string",
        Boolean => "boolean",
        Date => "date",
        Custom => "custom",
        Unknown => "unknown",
    }
}
