//! dslscope CLI
//!
//! Structural analyzer for design DSL documents.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::analyze::run_analyze;
use crate::commands::docs::run_docs;
use crate::commands::extract::run_extract;
use crate::commands::get_dsl::run_get_dsl;
use crate::commands::meta::run_meta;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Analyze {
            url,
            stdin,
            input,
            format,
            compact,
        } => run_analyze(
            &cli,
            url.as_deref(),
            *stdin,
            input.as_deref(),
            (*format).into(),
            *compact,
        ),
        Commands::Extract {
            kind,
            input,
            pretty,
        } => run_extract(*kind, input.as_deref(), *pretty),
        Commands::GetDsl { layer, pretty } => run_get_dsl(&cli, layer, *pretty),
        Commands::Meta { layer } => run_meta(&cli, layer),
        Commands::Docs {
            urls,
            from_dsl,
            input,
            json,
        } => run_docs(&cli, urls, *from_dsl, input.as_deref(), *json),
    }
}
