// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actc - action chain compiler CLI

mod commands;
mod error;
mod output;

use actc_core::Project;
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::completions::{completions, CompletionsArgs};
use commands::{build, check, list, new};
use error::Diagnostic;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "actc",
    version,
    about = "Compile action chain definitions into a runtime registry"
)]
struct Cli {
    /// Project root directory (default: nearest ancestor with actc.toml)
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompile the registry artifact
    Build,
    /// Parse and validate without writing
    Check,
    /// Show every action's processor chain
    List(list::ListArgs),
    /// Scaffold a processor stub
    New(new::NewArgs),
    /// Print shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print!("{}", Diagnostic::from_anyhow(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions don't need a project
    if let Commands::Completions(args) = &cli.command {
        completions::<Cli>(args, &mut std::io::stdout());
        return Ok(());
    }

    let project = Project::discover(cli.project.as_deref())?;
    tracing::debug!(root = %project.root().display(), "project resolved");

    match cli.command {
        Commands::Build => build::build(project),
        Commands::Check => check::check(project),
        Commands::List(args) => list::list(project, args),
        Commands::New(args) => new::new(project, args),
        Commands::Completions(_) => Ok(()),
    }
}

/// Logs go to stderr; stdout carries results and diagnostics.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
