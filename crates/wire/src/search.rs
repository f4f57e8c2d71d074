// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job search payload and the compiler from filters.

use dxw_core::operator::free_text_ops;
use dxw_core::{
    validate_value, CategoryType, Clock, Column, Filter, FilterError, FilterIdGen, FilterValue, Operator,
    OperatorError, Pagination,
};
use serde::{Deserialize, Serialize};

/// One condition of the search body.
///
/// `operator` stays a plain string on the wire; turning it back into an
/// [`Operator`] goes through the catalog and can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParam {
    pub parameter: String,
    pub operator: String,
    pub value: FilterValue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub parameter: String,
    pub direction: SortDirection,
}

/// Body of a job search request: `{search: [...], sort: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBody {
    pub search: Vec<SearchParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortSpec>,
}

impl SearchBody {
    /// Compile filters in order. No validation.
    pub fn from_filters(filters: &[Filter]) -> Self {
        let search = filters
            .iter()
            .map(|f| SearchParam {
                parameter: f.column.clone(),
                operator: f.operator.internal().to_string(),
                value: f.value.clone(),
            })
            .collect();
        Self { search, sort: Vec::new() }
    }

    pub fn with_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    /// Rebuild filters from a payload, assigning fresh ids.
    pub fn to_filters<C: Clock>(&self, ids: &FilterIdGen<C>) -> Result<Vec<Filter>, OperatorError> {
        self.search
            .iter()
            .map(|p| {
                let operator = Operator::from_internal(&p.operator)?;
                Ok(Filter::new(ids.next(), p.parameter.clone(), operator, p.value.clone()))
            })
            .collect()
    }
}

/// Validate every filter against the table columns, then compile.
///
/// Filters name columns by id or label; the payload always carries the id.
pub fn compile(filters: &[Filter], columns: &[Column]) -> Result<SearchBody, FilterError> {
    compile_filters(filters, columns, false)
}

/// Like [`compile`], but a filter on a column the table does not know is
/// sent as free text, limited to `=`, `!=` and `like`.
pub fn compile_free_text(filters: &[Filter], columns: &[Column]) -> Result<SearchBody, FilterError> {
    compile_filters(filters, columns, true)
}

fn compile_filters(filters: &[Filter], columns: &[Column], free_text: bool) -> Result<SearchBody, FilterError> {
    let mut resolved = Vec::with_capacity(filters.len());
    for filter in filters {
        let mut filter = filter.clone();
        match dxw_core::find_column(columns, &filter.column) {
            Some(column) => {
                filter.validate(columns)?;
                filter.column = column.id.clone();
            }
            None if free_text => validate_free_text(&filter)?,
            None => return Err(FilterError::UnknownColumn(filter.column)),
        }
        resolved.push(filter);
    }
    Ok(SearchBody::from_filters(&resolved))
}

fn validate_free_text(filter: &Filter) -> Result<(), FilterError> {
    if !free_text_ops().contains(&filter.operator) {
        return Err(FilterError::OperatorNotAllowed {
            column: filter.column.clone(),
            operator: filter.operator,
        });
    }
    validate_value(CategoryType::Custom, filter.operator, &filter.value)
        .map_err(|source| FilterError::Value { column: filter.column.clone(), source })
}

/// A full search request: body plus paging query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub body: SearchBody,
    /// One-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    pub fn new(body: SearchBody, pagination: Pagination) -> Self {
        Self { body, page: pagination.page_number(), per_page: pagination.page_size }
    }

    /// `page=..&per_page=..` for the request URL.
    pub fn query_string(&self) -> String {
        format!("page={}&per_page={}", self.page, self.per_page)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
