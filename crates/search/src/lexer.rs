// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for typed search queries such as `Status is in Done, Failed`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A byte-offset range in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Extract the spanned text, or "" when out of bounds.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated quote at position {}", span.start)]
    UnterminatedQuote { span: Span },

    #[error("invalid escape sequence '\\{ch}' at position {}", span.start)]
    InvalidEscape { ch: char, span: Span },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexKind {
    /// Unquoted run of text.
    Word(String),
    /// Quoted text; may contain spaces and commas.
    Quoted(String),
    /// One of `=`, `!=`, `<`, `>`.
    Symbol(&'static str),
    Comma,
}

impl LexKind {
    /// Text of a word-like token.
    pub fn text(&self) -> Option<&str> {
        match self {
            LexKind::Word(s) | LexKind::Quoted(s) => Some(s.as_str()),
            LexKind::Symbol(s) => Some(*s),
            LexKind::Comma => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    pub kind: LexKind,
    pub span: Span,
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Split a query into words, quoted strings, symbols and commas.
    ///
    /// Whitespace separates tokens. Square brackets are ignored so that
    /// `[a, b]` lexes like `a, b`.
    pub fn tokenize(input: &'a str) -> Result<Vec<LexToken>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<LexToken>, LexerError> {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() || ch == '[' || ch == ']' {
                self.chars.next();
            } else {
                break;
            }
        }
        let Some(&(start, ch)) = self.chars.peek() else {
            return Ok(None);
        };
        match ch {
            ',' => {
                self.chars.next();
                Ok(Some(LexToken { kind: LexKind::Comma, span: Span::new(start, start + 1) }))
            }
            '"' | '\'' => self.quoted(start, ch).map(Some),
            '=' | '<' | '>' => {
                self.chars.next();
                let sym = match ch {
                    '=' => "=",
                    '<' => "<",
                    _ => ">",
                };
                Ok(Some(LexToken { kind: LexKind::Symbol(sym), span: Span::new(start, start + 1) }))
            }
            '!' if self.input[start..].starts_with("!=") => {
                self.chars.next();
                self.chars.next();
                Ok(Some(LexToken { kind: LexKind::Symbol("!="), span: Span::new(start, start + 2) }))
            }
            _ => Ok(Some(self.word(start))),
        }
    }

    fn word(&mut self, start: usize) -> LexToken {
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            let stop = ch.is_whitespace()
                || matches!(ch, ',' | '"' | '\'' | '=' | '<' | '>' | '[' | ']')
                || (ch == '!' && self.input[pos..].starts_with("!="));
            if stop {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }
        LexToken { kind: LexKind::Word(self.input[start..end].to_string()), span: Span::new(start, end) }
    }

    fn quoted(&mut self, start: usize, quote: char) -> Result<LexToken, LexerError> {
        self.chars.next();
        let mut text = String::new();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                c if c == quote => {
                    return Ok(LexToken { kind: LexKind::Quoted(text), span: Span::new(start, pos + 1) });
                }
                // Escapes only apply inside double quotes
                '\\' if quote == '"' => match self.chars.next() {
                    Some((_, c @ ('"' | '\\'))) => text.push(c),
                    Some((_, c)) => {
                        return Err(LexerError::InvalidEscape { ch: c, span: Span::new(pos, pos + 2) })
                    }
                    None => break,
                },
                c => text.push(c),
            }
        }
        Err(LexerError::UnterminatedQuote { span: Span::new(start, self.input.len()) })
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
