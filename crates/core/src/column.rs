// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table column definitions.

use crate::category::CategoryType;
use crate::operator::{ops_for, Operator};
use serde::{Deserialize, Serialize};

/// A column of a data table.
///
/// `id` is the backend parameter name; `label` is what the user sees and
/// types. The `type` decides which operators are legal for filters on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryType>,
}

impl Column {
    /// Column whose label equals its id and whose type is unknown.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { label: id.clone(), id, kind: None }
    }

    crate::setters! {
        into { label: String }
        option { kind: CategoryType }
    }

    pub fn category_type(&self) -> CategoryType {
        self.kind.unwrap_or_default()
    }

    pub fn operators(&self) -> &'static [Operator] {
        ops_for(self.category_type())
    }

    pub fn allows(&self, op: Operator) -> bool {
        self.operators().contains(&op)
    }

    /// Whether `text` names this column, by id or label, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.id.eq_ignore_ascii_case(text) || self.label.eq_ignore_ascii_case(text)
    }
}

/// Find a column by id or label.
pub fn find_column<'a>(columns: &'a [Column], text: &str) -> Option<&'a Column> {
    columns
        .iter()
        .find(|c| c.id == text)
        .or_else(|| columns.iter().find(|c| c.matches(text)))
}
