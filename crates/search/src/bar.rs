// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search bar: builds filters one token at a time.
//!
//! The bar holds completed equations plus one draft. Every mutation returns
//! a [`Step`]; when the bar settles into a state where every equation is
//! valid and the resulting filters differ from the last emitted list, the
//! step carries the new filters exactly once.

use crate::dataset::{DatasetIndex, Row};
use crate::equation::{coerce_label, Equation, EquationStatus, Slot};
use crate::lexer::{LexKind, LexToken, Lexer, LexerError};
use crate::suggest;
use crate::token::{DraftToken, Token, TokenLabel, TokenNature};
use dxw_core::{
    find_column, same_conditions, CategoryType, Clock, Column, Filter, FilterId, FilterIdGen, Operator,
};
use std::collections::HashSet;
use thiserror::Error;

/// Why an input was refused. The bar state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("nothing typed")]
    EmptyInput,
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("column '{0}' is already filtered")]
    DuplicateColumn(String),
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("'{operator}' is not available for {kind} columns")]
    OperatorNotAllowed { operator: String, kind: CategoryType },
    #[error("column '{column}' is already filtered; only 'is in' or 'is not in' can be added, not '{operator}'")]
    ListOperatorRequired { column: String, operator: String },
    #[error("no equation at position {0}")]
    NoSuchEquation(usize),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Lex(#[from] LexerError),
    #[error("{rejection} (at '{text}')")]
    Rejected { text: String, rejection: Rejection },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A token was added to the draft.
    Advanced,
    /// The draft became equation `index`.
    Completed { index: usize, status: EquationStatus },
    /// A completed equation was pulled back for editing.
    Reopened { index: usize },
    /// A token in a completed equation was replaced.
    Edited { index: usize, status: EquationStatus },
    Removed { index: usize },
    Cleared,
    Rejected(Rejection),
    Unchanged,
}

/// Outcome of one bar operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub transition: Transition,
    /// Filters to apply, when the bar just settled on a new valid list.
    pub apply: Option<Vec<Filter>>,
}

/// Keyboard focus on a completed equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub equation: usize,
    pub slot: Slot,
    /// The focused token is reopened in the input box.
    pub editing: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarOptions {
    /// Accept categories that name no column.
    pub allow_free_text: bool,
}

/// Longest run of words tried when matching a multi-word column label or
/// operator such as `is not in`.
const MAX_PHRASE_WORDS: usize = 4;

pub struct SearchBar<C: Clock> {
    columns: Vec<Column>,
    index: DatasetIndex,
    options: BarOptions,
    equations: Vec<Equation>,
    draft: Equation,
    /// Id kept from an equation reopened by backspace.
    draft_id: Option<FilterId>,
    input: String,
    focus: Option<Focus>,
    last_emitted: Vec<Filter>,
    ids: FilterIdGen<C>,
}

impl<C: Clock> SearchBar<C> {
    pub fn new(columns: Vec<Column>, ids: FilterIdGen<C>) -> Self {
        Self {
            columns,
            index: DatasetIndex::default(),
            options: BarOptions::default(),
            equations: Vec::new(),
            draft: Equation::Empty,
            draft_id: None,
            input: String::new(),
            focus: None,
            last_emitted: Vec::new(),
            ids,
        }
    }

    pub fn with_options(mut self, options: BarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn draft(&self) -> &Equation {
        &self.draft
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Status of each completed equation. An equation whose token is open
    /// for editing reports `Waiting`.
    pub fn statuses(&self) -> Vec<EquationStatus> {
        (0..self.equations.len()).map(|i| self.status_of(i)).collect()
    }

    fn status_of(&self, index: usize) -> EquationStatus {
        match self.focus {
            Some(Focus { equation, editing: true, .. }) if equation == index => EquationStatus::Waiting,
            _ => self.equations[index].status(),
        }
    }

    /// Filters for every valid equation, in order.
    pub fn filters(&self) -> Vec<Filter> {
        self.equations.iter().filter_map(Equation::to_filter).collect()
    }

    /// Filters last handed out for applying.
    pub(crate) fn emitted(&self) -> &[Filter] {
        &self.last_emitted
    }

    /// Undo an emission the caller could not apply, so the next settled step
    /// offers the same list again.
    pub(crate) fn retract_emission(&mut self, previous: Vec<Filter>) {
        self.last_emitted = previous;
    }

    /// Replace the rows suggestions are drawn from.
    pub fn set_dataset(&mut self, rows: &[Row]) {
        self.index = DatasetIndex::new(rows);
        tracing::debug!(rows = rows.len(), "search bar dataset replaced");
    }

    /// Rebuild every equation from persisted filters.
    ///
    /// The loaded list counts as already applied.
    pub fn load_filters(&mut self, filters: &[Filter]) {
        let index = &self.index;
        self.equations = filters
            .iter()
            .map(|f| Equation::from_filter(f, &self.columns, |c| index.kind_of(c)))
            .collect();
        self.ids.observe(filters.iter().map(|f| f.id));
        self.draft = Equation::Empty;
        self.draft_id = None;
        self.input.clear();
        self.focus = None;
        self.last_emitted = self.filters();
    }

    // -- typing --------------------------------------------------------------

    /// Replace the text of the token being typed.
    pub fn set_input(&mut self, text: impl Into<String>) -> Step {
        self.input = text.into();
        self.step(Transition::Unchanged)
    }

    /// Pick a suggestion. List operators accumulate picks in the input;
    /// everything else commits immediately.
    pub fn select(&mut self, label: &str) -> Step {
        let list_value = self.focus.is_none()
            && matches!(self.draft, Equation::OperatorChosen { operator, .. } if operator.is_multi_value());
        if list_value {
            let mut items = split_list(&self.input);
            // A trailing fragment without a comma is the text being filtered on
            let partial = !self.input.trim_end().ends_with(',');
            if partial && items.last().is_some_and(|last| label.to_lowercase().contains(&last.to_lowercase())) {
                items.pop();
            }
            if !items.iter().any(|i| i == label) {
                items.push(label.to_string());
            }
            self.input = items.join(", ");
            return self.step(Transition::Unchanged);
        }
        self.input = label.to_string();
        self.confirm()
    }

    /// Commit the input as the next token (Enter).
    pub fn confirm(&mut self) -> Step {
        let transition = match self.focus {
            Some(Focus { equation, slot, editing: true }) => self.commit_edit(equation, slot),
            _ => self.commit_draft(),
        };
        self.step(transition)
    }

    fn commit_draft(&mut self) -> Transition {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Transition::Rejected(Rejection::EmptyInput);
        }
        let next = match std::mem::replace(&mut self.draft, Equation::Empty) {
            Equation::Empty => self.resolve_category(&text, None).map(|category| Equation::CategoryChosen { category }),
            Equation::CategoryChosen { category } => match self.resolve_operator(&text, &category, None) {
                Ok(operator) => Ok(Equation::OperatorChosen { category, operator }),
                Err(e) => {
                    self.draft = Equation::CategoryChosen { category };
                    return Transition::Rejected(e);
                }
            },
            Equation::OperatorChosen { category, operator } => {
                let id = self.draft_id.take().unwrap_or_else(|| self.ids.next());
                Ok(Equation::complete(id, category, operator, parse_label(&text, operator)))
            }
            complete @ Equation::Complete { .. } => Ok(complete),
        };
        match next {
            Ok(equation @ Equation::Complete { .. }) => {
                let status = equation.status();
                self.equations.push(equation);
                self.input.clear();
                Transition::Completed { index: self.equations.len() - 1, status }
            }
            Ok(equation) => {
                self.draft = equation;
                self.input.clear();
                Transition::Advanced
            }
            Err(e) => Transition::Rejected(e),
        }
    }

    fn commit_edit(&mut self, index: usize, slot: Slot) -> Transition {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Transition::Rejected(Rejection::EmptyInput);
        }
        let Some(Equation::Complete { id, category, operator, value, .. }) = self.equations.get(index).cloned()
        else {
            return Transition::Rejected(Rejection::NoSuchEquation(index));
        };
        let edited = match slot {
            Slot::Category => self.resolve_category(&text, Some(index)).and_then(|category| {
                if !operator.is_multi_value() && self.column_reused(&category, Some(index)) {
                    return Err(Rejection::ListOperatorRequired {
                        column: category.text(),
                        operator: operator.display().to_string(),
                    });
                }
                Ok(Equation::complete(id, category, operator, value.label))
            }),
            Slot::Operator => self.resolve_operator(&text, &category, Some(index)).map(|operator| {
                let label = coerce_label(value.label, operator);
                Equation::complete(id, category, operator, label)
            }),
            Slot::Value => Ok(Equation::complete(id, category, operator, parse_label(&text, operator))),
        };
        match edited {
            Ok(equation) => {
                let status = equation.status();
                self.equations[index] = equation;
                self.input.clear();
                self.focus = Some(Focus { equation: index, slot, editing: false });
                Transition::Edited { index, status }
            }
            Err(e) => Transition::Rejected(e),
        }
    }

    /// Backspace with the cursor at the start of an empty input.
    ///
    /// Drops the draft's last token; with no draft, reopens the value of the
    /// last completed equation.
    pub fn backspace(&mut self) -> Step {
        if !self.input.is_empty() {
            self.input.pop();
            return self.step(Transition::Unchanged);
        }
        if self.focus.is_some_and(|f| f.editing) {
            return self.step(Transition::Unchanged);
        }
        if !self.draft.is_empty() {
            let draft = std::mem::replace(&mut self.draft, Equation::Empty);
            self.draft = draft.pop_token();
            if self.draft.is_empty() {
                self.draft_id = None;
            }
            return self.step(Transition::Advanced);
        }
        let Some(last) = self.equations.pop() else {
            return self.step(Transition::Unchanged);
        };
        let index = self.equations.len();
        match last.reopen_value() {
            Some((draft, id, text)) => {
                self.draft = draft;
                self.draft_id = Some(id);
                self.input = text;
                self.focus = None;
                self.step(Transition::Reopened { index })
            }
            None => self.step(Transition::Removed { index }),
        }
    }

    /// Remove a completed equation in one step.
    pub fn remove_equation(&mut self, index: usize) -> Step {
        if index >= self.equations.len() {
            return self.step(Transition::Rejected(Rejection::NoSuchEquation(index)));
        }
        self.equations.remove(index);
        self.focus = match self.focus {
            Some(f) if f.equation == index => {
                self.input.clear();
                None
            }
            Some(f) if f.equation > index => Some(Focus { equation: f.equation - 1, ..f }),
            other => other,
        };
        self.step(Transition::Removed { index })
    }

    /// Drop every equation and the draft.
    pub fn clear(&mut self) -> Step {
        self.equations.clear();
        self.draft = Equation::Empty;
        self.draft_id = None;
        self.input.clear();
        self.focus = None;
        self.step(Transition::Cleared)
    }

    // -- focus and cursor ----------------------------------------------------

    /// Focus the last token of a completed equation.
    pub fn focus_equation(&mut self, index: usize) -> Step {
        if index >= self.equations.len() {
            return self.step(Transition::Rejected(Rejection::NoSuchEquation(index)));
        }
        self.cancel_edit();
        self.focus = Some(Focus { equation: index, slot: Slot::Value, editing: false });
        self.step(Transition::Unchanged)
    }

    pub fn cursor_left(&mut self) -> Step {
        self.move_cursor(Slot::prev)
    }

    pub fn cursor_right(&mut self) -> Step {
        self.move_cursor(Slot::next)
    }

    fn move_cursor(&mut self, f: impl Fn(Slot) -> Slot) -> Step {
        if let Some(focus) = self.focus.as_mut().filter(|focus| !focus.editing) {
            focus.slot = f(focus.slot);
        }
        self.step(Transition::Unchanged)
    }

    /// Reopen the focused token in the input box.
    pub fn edit_focused(&mut self) -> Step {
        let Some(focus) = self.focus else {
            return self.step(Transition::Unchanged);
        };
        let text = self.equations.get(focus.equation).and_then(|e| e.slot_text(focus.slot));
        match text {
            Some(text) => {
                self.input = text;
                self.focus = Some(Focus { editing: true, ..focus });
                self.step(Transition::Reopened { index: focus.equation })
            }
            None => self.step(Transition::Unchanged),
        }
    }

    /// Leave focus mode, discarding any token edit in progress (Escape).
    pub fn blur(&mut self) -> Step {
        self.cancel_edit();
        self.focus = None;
        self.step(Transition::Unchanged)
    }

    fn cancel_edit(&mut self) {
        if self.focus.is_some_and(|f| f.editing) {
            self.input.clear();
        }
    }

    // -- whole queries -------------------------------------------------------

    /// Feed a typed query such as `Status is in Done, Failed JobID > 10`.
    ///
    /// Either every token is accepted or the bar is left as it was.
    pub fn submit_text(&mut self, text: &str) -> Result<Step, QueryError> {
        let tokens = Lexer::tokenize(text)?;
        let saved = (self.equations.clone(), self.draft.clone(), self.draft_id, self.input.clone(), self.focus);
        self.focus = None;
        self.input.clear();

        match self.feed(&tokens, text) {
            Ok(()) => Ok(self.step(Transition::Unchanged)),
            Err(e) => {
                (self.equations, self.draft, self.draft_id, self.input, self.focus) = saved;
                Err(e)
            }
        }
    }

    fn feed(&mut self, tokens: &[LexToken], source: &str) -> Result<(), QueryError> {
        let mut pos = 0;
        while pos < tokens.len() {
            let (text, used) = match &self.draft {
                Equation::Empty => self.match_phrase(&tokens[pos..], |bar, t| {
                    find_column(&bar.columns, t).is_some()
                }),
                Equation::CategoryChosen { .. } => {
                    self.match_phrase(&tokens[pos..], |_, t| parse_operator(t).is_some())
                }
                Equation::OperatorChosen { operator, .. } => value_phrase(&tokens[pos..], *operator),
                Equation::Complete { .. } => break,
            };
            let span = tokens[pos].span;
            self.input = text;
            if let Transition::Rejected(rejection) = self.commit_draft() {
                let end = tokens[pos + used.max(1) - 1].span.end;
                let text = source.get(span.start..end).unwrap_or_default().to_string();
                return Err(QueryError::Rejected { text, rejection });
            }
            pos += used.max(1);
        }
        Ok(())
    }

    /// Longest run of leading words accepted by `accept`, else the first word.
    fn match_phrase(&self, tokens: &[LexToken], accept: impl Fn(&Self, &str) -> bool) -> (String, usize) {
        let words: Vec<&str> = tokens.iter().map_while(|t| t.kind.text()).take(MAX_PHRASE_WORDS).collect();
        for n in (1..=words.len()).rev() {
            let phrase = words[..n].join(" ");
            if accept(self, &phrase) {
                return (phrase, n);
            }
        }
        (words.first().map(|w| w.to_string()).unwrap_or_default(), 1)
    }

    // -- suggestions ---------------------------------------------------------

    /// The token being typed, with suggestions for it.
    pub fn draft_token(&self) -> DraftToken {
        let (equation, slot) = match self.focus {
            Some(Focus { equation, slot, editing: true }) => (self.equations.get(equation), Some(slot)),
            _ => (Some(&self.draft), None),
        };
        let category = equation.and_then(Equation::category);
        let operator = equation.and_then(Equation::operator);
        let nature = match (slot, equation) {
            (Some(Slot::Category), _) | (None, Some(Equation::Empty)) => TokenNature::Category,
            (Some(Slot::Operator), _) | (None, Some(Equation::CategoryChosen { .. })) => TokenNature::Operator,
            _ => TokenNature::Value,
        };
        let kind = category.map(|c| c.kind).unwrap_or_default();

        let suggestions = match nature {
            TokenNature::Category | TokenNature::Custom => {
                let blocked = self.blocked_columns(self.focus.filter(|f| f.editing).map(|f| f.equation));
                suggest::categories(&self.columns, &self.index, &blocked, &self.input)
            }
            TokenNature::Operator => {
                let skip = self.focus.filter(|f| f.editing).map(|f| f.equation);
                let allowed = match category {
                    Some(category) => self.allowed_operators(category, skip),
                    None => dxw_core::ops_for(kind).to_vec(),
                };
                suggest::operators(&allowed, kind, &self.input)
            }
            TokenNature::Value => {
                let column_id = category.filter(|c| c.nature == TokenNature::Category).map(Token::text);
                match operator {
                    Some(op) => suggest::values(&self.index, column_id.as_deref(), kind, op, &self.input),
                    None => Vec::new(),
                }
            }
        };
        DraftToken {
            text: self.input.clone(),
            nature,
            kind,
            hide_suggestion: suggestions.is_empty(),
            suggestions,
        }
    }

    // -- internals -----------------------------------------------------------

    /// Columns that may not start another equation.
    ///
    /// A column already used by an equation is blocked unless every use is a
    /// list operator, which are combined by the backend.
    fn blocked_columns(&self, skip: Option<usize>) -> HashSet<String> {
        let mut list_only: Vec<(String, bool)> = Vec::new();
        for (i, equation) in self.equations.iter().enumerate() {
            if Some(i) == skip {
                continue;
            }
            let (Some(category), Some(op)) = (equation.category(), equation.operator()) else {
                continue;
            };
            let name = category.text();
            match list_only.iter_mut().find(|(n, _)| *n == name) {
                Some((_, all_list)) => *all_list &= op.is_multi_value(),
                None => list_only.push((name, op.is_multi_value())),
            }
        }
        list_only.into_iter().filter(|(_, all_list)| !all_list).map(|(n, _)| n).collect()
    }

    fn resolve_category(&self, text: &str, skip: Option<usize>) -> Result<Token, Rejection> {
        match find_column(&self.columns, text) {
            Some(column) => {
                if self.blocked_columns(skip).contains(&column.id) {
                    return Err(Rejection::DuplicateColumn(column.id.clone()));
                }
                Ok(Token::new(column.id.clone(), self.index.kind_of(column), TokenNature::Category))
            }
            None if self.options.allow_free_text => {
                Ok(Token::new(text, CategoryType::Custom, TokenNature::Custom))
            }
            None => Err(Rejection::UnknownColumn(text.to_string())),
        }
    }

    /// Operators a draft on `category` may use.
    ///
    /// A column already filtered only with list operators can be filtered
    /// again, but only with another list operator.
    fn allowed_operators(&self, category: &Token, skip: Option<usize>) -> Vec<Operator> {
        let reused = self.column_reused(category, skip);
        dxw_core::ops_for(category.kind)
            .iter()
            .copied()
            .filter(|op| !reused || op.is_multi_value())
            .collect()
    }

    /// Another equation, other than `skip`, already filters this column.
    fn column_reused(&self, category: &Token, skip: Option<usize>) -> bool {
        let name = category.text();
        self.equations
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .any(|(_, e)| e.category().is_some_and(|c| c.text() == name))
    }

    fn resolve_operator(&self, text: &str, category: &Token, skip: Option<usize>) -> Result<Operator, Rejection> {
        let operator = parse_operator(text).ok_or_else(|| Rejection::UnknownOperator(text.to_string()))?;
        let kind = category.kind;
        if !dxw_core::ops_for(kind).contains(&operator) {
            return Err(Rejection::OperatorNotAllowed { operator: operator.display().to_string(), kind });
        }
        if !self.allowed_operators(category, skip).contains(&operator) {
            return Err(Rejection::ListOperatorRequired {
                column: category.text(),
                operator: operator.display().to_string(),
            });
        }
        Ok(operator)
    }

    /// Wrap a transition, emitting filters when the bar has settled on a new
    /// valid list.
    fn step(&mut self, transition: Transition) -> Step {
        let settled = self.draft.is_empty()
            && !self.focus.is_some_and(|f| f.editing)
            && self.equations.iter().all(|e| e.status() == EquationStatus::Valid);
        let apply = if settled {
            let filters = self.filters();
            if same_conditions(&filters, &self.last_emitted) {
                None
            } else {
                tracing::debug!(count = filters.len(), "search bar emitting filters");
                self.last_emitted = filters.clone();
                Some(filters)
            }
        } else {
            None
        };
        if let Transition::Rejected(ref r) = transition {
            tracing::debug!(reason = %r, "search bar input rejected");
        }
        Step { transition, apply }
    }
}

/// Operator from its display string or wire code, ignoring case.
pub fn parse_operator(text: &str) -> Option<Operator> {
    let text = text.trim();
    text.parse::<Operator>().ok().or_else(|| text.to_lowercase().parse::<Operator>().ok())
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn parse_label(text: &str, operator: Operator) -> TokenLabel {
    if operator.is_multi_value() {
        TokenLabel::Multiple(split_list(text))
    } else {
        TokenLabel::Single(text.trim().to_string())
    }
}

/// Tokens making up a value: `<n> <unit>` for `last`, a comma separated run
/// for list operators, otherwise one word.
fn value_phrase(tokens: &[LexToken], operator: Operator) -> (String, usize) {
    let word = |t: &LexToken| match &t.kind {
        LexKind::Comma => None,
        kind => kind.text().map(str::to_string),
    };
    if operator == Operator::Last {
        let words: Vec<String> = tokens.iter().take(2).map_while(word).collect();
        return (words.join(" "), words.len());
    }
    if !operator.is_multi_value() {
        return (tokens.first().and_then(word).unwrap_or_default(), 1);
    }
    let mut items = Vec::new();
    let mut used = 0;
    let mut expect_item = true;
    for token in tokens {
        match (&token.kind, expect_item) {
            (LexKind::Comma, false) => expect_item = true,
            (LexKind::Comma, true) => {}
            (_, true) => {
                items.extend(word(token));
                expect_item = false;
            }
            (_, false) => break,
        }
        used += 1;
    }
    (items.join(", "), used)
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
