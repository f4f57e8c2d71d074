// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search bar command handlers

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use dxw_core::{Clock, Filter};
use dxw_search::{Equation, EquationStatus, SearchBar, Token, Validity};
use dxw_wire::SearchQuery;
use serde::Serialize;

use super::Context;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// Parse a query into filters and print the search payload
    Parse {
        /// Query text, e.g. `Status is in Done, Failed`
        query: String,
    },
    /// Suggest completions for the token after a partial query
    Suggest {
        /// Query typed so far; the last incomplete word is the prefix
        #[arg(default_value = "")]
        query: String,
        /// JSON array of rows to draw value suggestions from
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

pub fn handle(command: SearchCommand, ctx: &Context) -> Result<()> {
    match command {
        SearchCommand::Parse { query } => parse(&query, ctx),
        SearchCommand::Suggest { query, dataset } => suggest(&query, dataset, ctx),
    }
}

#[derive(Serialize)]
struct ParsedEquation {
    text: String,
    status: EquationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Serialize)]
struct ParseReport {
    equations: Vec<ParsedEquation>,
    /// Unfinished trailing equation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<SearchQuery>,
}

fn equation_text(equation: &Equation) -> String {
    equation.tokens().iter().map(Token::text).collect::<Vec<_>>().join(" ")
}

fn parse_report<C: Clock>(bar: &SearchBar<C>, ctx: &Context) -> Result<ParseReport> {
    let equations = bar
        .equations()
        .iter()
        .map(|eq| ParsedEquation {
            text: equation_text(eq),
            status: eq.status(),
            reason: match eq {
                Equation::Complete { validity: Validity::Invalid { reason }, .. } => Some(reason.clone()),
                _ => None,
            },
        })
        .collect::<Vec<_>>();
    let pending = (!bar.draft().is_empty()).then(|| equation_text(bar.draft()));

    let all_valid = equations.iter().all(|e| e.status == EquationStatus::Valid);
    let query = if all_valid && pending.is_none() {
        let filters: Vec<Filter> = bar.filters();
        let mut session = dxw_search::FilterSession::default();
        if let Some(size) = ctx.config.page_size {
            session.set_page_size(size)?;
        }
        session.set_filters(filters);
        Some(session.apply(bar.columns(), ctx.config.bar_options())?)
    } else {
        None
    };
    Ok(ParseReport { equations, pending, query })
}

fn parse(query: &str, ctx: &Context) -> Result<()> {
    let mut bar = ctx.search_bar();
    bar.submit_text(query).map_err(|e| ExitError::failed(e.to_string()))?;
    let report = parse_report(&bar, ctx)?;

    match ctx.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            for eq in &report.equations {
                match &eq.reason {
                    None => println!("{}", eq.text),
                    Some(reason) => println!("{}  {}", color::invalid(&eq.text), color::muted(reason)),
                }
            }
            if let Some(pending) = &report.pending {
                println!("{} {}", pending, color::muted("(incomplete)"));
            }
            if let Some(query) = &report.query {
                println!("{}", color::muted(&query.query_string()));
                println!("{}", serde_json::to_string(&query.body)?);
            }
        }
    }
    Ok(())
}

/// Split `query` into the complete part and the word being typed.
///
/// A trailing space means the last word is finished.
fn split_prefix(query: &str) -> (&str, &str) {
    if query.is_empty() || query.ends_with(char::is_whitespace) {
        return (query, "");
    }
    match query.rfind(char::is_whitespace) {
        Some(i) => (&query[..i], &query[i + 1..]),
        None => ("", query),
    }
}

fn suggest(query: &str, dataset: Option<PathBuf>, ctx: &Context) -> Result<()> {
    let mut bar = ctx.search_bar();
    if let Some(path) = dataset {
        bar.set_dataset(&super::read_dataset(&path)?);
    }
    let (done, typed) = split_prefix(query);
    if !done.trim().is_empty() {
        bar.submit_text(done).map_err(|e| ExitError::failed(e.to_string()))?;
    }
    bar.set_input(typed);
    let draft = bar.draft_token();

    match ctx.format {
        OutputFormat::Json => print_json(&draft)?,
        OutputFormat::Text => {
            if draft.suggestions.is_empty() {
                println!("{}", color::muted(&format!("No {} suggestions", draft.nature)));
            }
            for s in &draft.suggestions {
                println!("{}", s.label);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
