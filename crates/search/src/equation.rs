// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Equation state machine.
//!
//! An equation walks `Empty → CategoryChosen → OperatorChosen → Complete`.
//! Each state carries exactly the tokens it has, so an operator without a
//! category, or a value without an operator, cannot be represented.

use crate::token::{Token, TokenLabel, TokenNature};
use dxw_core::{find_column, ops_for, validate_value, CategoryType, Column, Filter, FilterId, Operator};
use serde::{Deserialize, Serialize};

/// Whether a complete equation can become a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "validity", rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid { reason: String },
}

/// Externally reported status of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationStatus {
    Valid,
    Invalid,
    Waiting,
}

dxw_core::simple_display! {
    EquationStatus {
        Valid => "valid",
        Invalid => "invalid",
        Waiting => "waiting",
    }
}

/// Position of a token inside an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Category,
    Operator,
    Value,
}

impl Slot {
    pub fn prev(self) -> Self {
        match self {
            Slot::Category | Slot::Operator => Slot::Category,
            Slot::Value => Slot::Operator,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Slot::Category => Slot::Operator,
            Slot::Operator | Slot::Value => Slot::Value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Equation {
    Empty,
    CategoryChosen {
        category: Token,
    },
    OperatorChosen {
        category: Token,
        operator: Operator,
    },
    Complete {
        id: FilterId,
        category: Token,
        operator: Operator,
        value: Token,
        validity: Validity,
    },
}

impl Equation {
    pub fn status(&self) -> EquationStatus {
        match self {
            Equation::Complete { validity: Validity::Valid, .. } => EquationStatus::Valid,
            Equation::Complete { validity: Validity::Invalid { .. }, .. } => EquationStatus::Invalid,
            _ => EquationStatus::Waiting,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Equation::Empty)
    }

    /// Category token, once chosen.
    pub fn category(&self) -> Option<&Token> {
        match self {
            Equation::Empty => None,
            Equation::CategoryChosen { category }
            | Equation::OperatorChosen { category, .. }
            | Equation::Complete { category, .. } => Some(category),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Equation::OperatorChosen { operator, .. } | Equation::Complete { operator, .. } => {
                Some(*operator)
            }
            _ => None,
        }
    }

    /// Tokens in order, operators rendered with their display string.
    pub fn tokens(&self) -> Vec<Token> {
        let mut out = Vec::new();
        if let Some(category) = self.category() {
            out.push(category.clone());
        }
        if let Some(op) = self.operator() {
            let kind = self.category().map(|c| c.kind).unwrap_or_default();
            out.push(Token::new(op.display(), kind, TokenNature::Operator));
        }
        if let Equation::Complete { value, .. } = self {
            out.push(value.clone());
        }
        out
    }

    /// Text of the token in `slot`, if present.
    pub fn slot_text(&self, slot: Slot) -> Option<String> {
        match slot {
            Slot::Category => self.category().map(Token::text),
            Slot::Operator => self.operator().map(|op| op.display().to_string()),
            Slot::Value => match self {
                Equation::Complete { value, .. } => Some(value.text()),
                _ => None,
            },
        }
    }

    /// Drop the last token: `Complete` is not shrunk here, see
    /// [`Equation::reopen_value`].
    pub fn pop_token(self) -> Self {
        match self {
            Equation::Empty | Equation::CategoryChosen { .. } => Equation::Empty,
            Equation::OperatorChosen { category, .. } => Equation::CategoryChosen { category },
            complete @ Equation::Complete { .. } => complete,
        }
    }

    /// Turn a complete equation back into one waiting for its value.
    ///
    /// Returns the equation, its id, and the value text to edit.
    pub fn reopen_value(self) -> Option<(Self, FilterId, String)> {
        match self {
            Equation::Complete { id, category, operator, value, .. } => {
                Some((Equation::OperatorChosen { category, operator }, id, value.text()))
            }
            _ => None,
        }
    }

    /// Build a complete equation and validate it.
    pub fn complete(id: FilterId, category: Token, operator: Operator, value: TokenLabel) -> Self {
        let value = Token { label: value, kind: category.kind, nature: TokenNature::Value };
        let validity = validate(&category, operator, &value.label);
        Equation::Complete { id, category, operator, value, validity }
    }

    /// Revalidate after a token was replaced.
    pub fn revalidated(self) -> Self {
        match self {
            Equation::Complete { id, category, operator, value, .. } => {
                Equation::complete(id, category, operator, value.label)
            }
            other => other,
        }
    }

    /// Collapse a valid equation into a filter.
    pub fn to_filter(&self) -> Option<Filter> {
        match self {
            Equation::Complete { id, category, operator, value, validity: Validity::Valid } => {
                Some(Filter::new(*id, category.text(), *operator, value.label.clone().into()))
            }
            _ => None,
        }
    }

    /// Rebuild an equation from a persisted filter.
    ///
    /// Filters on columns the table does not know become custom categories
    /// and are validated as free text.
    pub fn from_filter(filter: &Filter, columns: &[Column], kind_of: impl Fn(&Column) -> CategoryType) -> Self {
        let category = match find_column(columns, &filter.column) {
            Some(column) => Token::new(column.id.clone(), kind_of(column), TokenNature::Category),
            None => Token::new(filter.column.clone(), CategoryType::Custom, TokenNature::Custom),
        };
        Equation::complete(filter.id, category, filter.operator, filter.value.clone().into())
    }
}

/// Check operator and value against the category's type.
pub fn validate(category: &Token, operator: Operator, value: &TokenLabel) -> Validity {
    if !ops_for(category.kind).contains(&operator) {
        return Validity::Invalid {
            reason: format!("'{}' is not valid for a {} column", operator.display(), category.kind),
        };
    }
    match validate_value(category.kind, operator, &value.clone().into()) {
        Ok(()) => Validity::Valid,
        Err(e) => Validity::Invalid { reason: e.to_string() },
    }
}

/// Reshape a value when the operator changes between single and list.
pub fn coerce_label(label: TokenLabel, operator: Operator) -> TokenLabel {
    match (operator.is_multi_value(), label) {
        (true, TokenLabel::Single(s)) => TokenLabel::Multiple(vec![s]),
        (false, TokenLabel::Multiple(items)) if items.len() == 1 => {
            TokenLabel::Single(items.into_iter().next().unwrap_or_default())
        }
        (_, label) => label,
    }
}

#[cfg(test)]
#[path = "equation_tests.rs"]
mod tests;
