// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dxw-search: the search bar that turns typed tokens into filters

pub mod bar;
pub mod dataset;
pub mod equation;
pub mod lexer;
pub mod session;
pub mod suggest;
pub mod token;

pub use bar::{parse_operator, BarOptions, Focus, QueryError, Rejection, SearchBar, Step, Transition};
pub use dataset::{DatasetIndex, Row};
pub use equation::{Equation, EquationStatus, Slot, Validity};
pub use lexer::{LexKind, LexToken, Lexer, LexerError, Span};
pub use session::{FilterSession, SearchController, SessionError};
pub use token::{DraftToken, Suggestion, Token, TokenLabel, TokenNature};
