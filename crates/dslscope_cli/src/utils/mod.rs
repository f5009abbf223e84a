//! CLI utility functions

use std::io::Read;
use std::path::Path;

use dslscope_core::{AnalyzeError, parse_json};
use dslscope_fetch::{FetchConfig, FetchError};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use tokio::runtime::Runtime;

use crate::cli::Cli;

pub fn create_tokio_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()
}

/// Reads a whole document from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(AnalyzeError::Io)
                .into_diagnostic()?;
            Ok(input)
        }
    }
}

/// Parses a DSL document.
pub fn parse_document(input: &str) -> Result<Value> {
    parse_json(input)
        .map_err(AnalyzeError::MalformedInput)
        .into_diagnostic()
}

/// Fetch configuration from the environment, overridden by CLI flags.
pub fn fetch_config(cli: &Cli) -> FetchConfig {
    let mut config = FetchConfig::from_env();
    if let Some(token) = &cli.token {
        config = config.with_token(token.as_str());
    }
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    config
}

/// Converts a fetch error into a diagnostic carrying its suggestion.
pub fn fetch_diagnostic(error: FetchError) -> miette::Report {
    match error.suggestion() {
        Some(help) => miette::miette!(help = help, "{}", error),
        None => miette::miette!("{}", error),
    }
}
