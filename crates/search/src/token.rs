// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search bar tokens and suggestions.

use dxw_core::{CategoryType, FilterValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a token within an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenNature {
    Category,
    Operator,
    Value,
    /// Free text category that names no known column.
    Custom,
}

dxw_core::simple_display! {
    TokenNature {
        Category => "category",
        Operator => "operator",
        Value => "value",
        Custom => "custom",
    }
}

/// Text of a token: one label, or several for `in` / `not in` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenLabel {
    Single(String),
    Multiple(Vec<String>),
}

impl TokenLabel {
    /// Text to put back into the input box when the token is reopened.
    pub fn to_input(&self) -> String {
        match self {
            TokenLabel::Single(s) => s.clone(),
            TokenLabel::Multiple(items) => items.join(", "),
        }
    }
}

impl fmt::Display for TokenLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_input())
    }
}

impl From<TokenLabel> for FilterValue {
    fn from(label: TokenLabel) -> Self {
        match label {
            TokenLabel::Single(s) => FilterValue::Single(s),
            TokenLabel::Multiple(items) => FilterValue::Multiple(items),
        }
    }
}

impl From<FilterValue> for TokenLabel {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Single(s) => TokenLabel::Single(s),
            FilterValue::Multiple(items) => TokenLabel::Multiple(items),
        }
    }
}

/// One lexical unit of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub label: TokenLabel,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    pub nature: TokenNature,
}

impl Token {
    pub fn new(label: impl Into<String>, kind: CategoryType, nature: TokenNature) -> Self {
        Self { label: TokenLabel::Single(label.into()), kind, nature }
    }

    pub fn text(&self) -> String {
        self.label.to_input()
    }
}

/// A candidate for the token being typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub nature: TokenNature,
    #[serde(rename = "type")]
    pub kind: CategoryType,
}

/// The token currently being typed, with what the bar proposes for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftToken {
    pub text: String,
    pub nature: TokenNature,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    pub hide_suggestion: bool,
    pub suggestions: Vec<Suggestion>,
}
