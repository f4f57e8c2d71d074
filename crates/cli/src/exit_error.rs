// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that choose the process exit code.
//!
//! Handlers return these rather than exiting so the log guard in `main()`
//! is dropped first.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

/// Exit code for a dashboard action that left everything as it was.
pub const UNCHANGED: i32 = 2;

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Plain failure, exit code 1.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(1, message)
    }

    pub fn unchanged(reason: impl fmt::Display) -> Self {
        Self::new(UNCHANGED, format!("Nothing changed: {reason}"))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
