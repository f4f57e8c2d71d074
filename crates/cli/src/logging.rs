// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File logging for the CLI.
//!
//! Logs go to `<state_dir>/dxw.log`, never to the terminal, so command output
//! stays machine-readable. The filter comes from `DXW_LOG` (default `warn`).

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE: &str = "dxw.log";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(state_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(state_dir)?;
    let appender = tracing_appender::rolling::never(state_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match crate::env::log_filter() {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::new("warn"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()?;
    Ok(guard)
}
