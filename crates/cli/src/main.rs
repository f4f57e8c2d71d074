// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dxw: drive the DiracX Web client engine from the command line

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{dashboard, monitor, search, Context};
use config::Config;
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "dxw", version, about = "DiracX Web dashboard and job search engine", styles = color::styles())]
struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t, global = true)]
    output: OutputFormat,

    /// State directory (overrides DXW_STATE_DIR and the config file)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse queries and suggest completions
    Search(search::SearchArgs),
    /// Arrange application instances
    Dashboard(dashboard::DashboardArgs),
    /// Job Monitor filters and search requests
    Monitor(monitor::MonitorArgs),
}

fn main() {
    let code = match run() {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("{}", exit.message);
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                1
            }
        },
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(env::config_path().as_deref())?;
    let state_dir = config.state_dir(cli.state_dir.as_deref())?;
    // Guard flushes the log file on drop, before process::exit
    let _guard = match logging::init(&state_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    };
    tracing::debug!(state_dir = %state_dir.display(), "starting");

    let ctx = Context { config, state_dir, format: cli.output };
    match command {
        Commands::Search(args) => search::handle(args.command, &ctx),
        Commands::Dashboard(args) => dashboard::handle(args.command, &ctx),
        Commands::Monitor(args) => monitor::handle(args.command, &ctx),
    }
}
