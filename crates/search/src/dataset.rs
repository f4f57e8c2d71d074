// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Index over the rows currently shown, used to drive suggestions.

use dxw_core::{CategoryType, Column};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeSet;

/// One table row, keyed by column id.
pub type Row = IndexMap<String, Value>;

/// Distinct values and inferred types per column.
#[derive(Debug, Clone, Default)]
pub struct DatasetIndex {
    rows: usize,
    values: IndexMap<String, BTreeSet<String>>,
    inferred: IndexMap<String, CategoryType>,
}

impl DatasetIndex {
    pub fn new(rows: &[Row]) -> Self {
        let mut index = DatasetIndex { rows: rows.len(), ..Default::default() };
        for row in rows {
            for (key, value) in row {
                let Some(text) = value_text(value) else {
                    continue;
                };
                index.values.entry(key.clone()).or_default().insert(text);
                index.inferred.entry(key.clone()).or_insert_with(|| CategoryType::infer(value));
            }
        }
        index
    }

    /// No rows loaded yet.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Whether any row carries a value for the column.
    ///
    /// With no rows at all every column counts as present, so a fresh table
    /// still offers its schema.
    pub fn has_column(&self, column: &Column) -> bool {
        self.is_empty() || self.values.contains_key(&column.id)
    }

    /// Sorted distinct values seen for the column.
    pub fn values(&self, column_id: &str) -> impl Iterator<Item = &str> {
        self.values.get(column_id).into_iter().flatten().map(String::as_str)
    }

    /// Declared type, else the type of the first value seen.
    pub fn kind_of(&self, column: &Column) -> CategoryType {
        column
            .kind
            .or_else(|| self.inferred.get(&column.id).copied())
            .unwrap_or_default()
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
