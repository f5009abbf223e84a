//! Analyze command implementation

use std::path::Path;

use dslscope_core::Summarizer;
use dslscope_core::render::{OutputFormat, Renderer};
use dslscope_fetch::DslClient;
use miette::{IntoDiagnostic, Result};
use serde_json::Value;

use crate::cli::Cli;
use crate::commands::load_config;
use crate::utils::{
    create_tokio_runtime, fetch_config, fetch_diagnostic, parse_document, read_input,
};

pub fn run_analyze(
    cli: &Cli,
    url: Option<&str>,
    stdin: bool,
    input: Option<&Path>,
    format: OutputFormat,
    compact: bool,
) -> Result<bool> {
    let config = load_config(cli)?;

    let document = match (url, input) {
        (Some(url), _) => fetch_document(cli, url)?,
        (None, Some(path)) => parse_document(&read_input(Some(path))?)?,
        (None, None) if stdin => parse_document(&read_input(None)?)?,
        (None, None) => {
            return Err(miette::miette!("Please provide a URL, --input or --stdin"));
        }
    };

    let analysis = Summarizer::new(&config).analyze(&document);
    let output = Renderer::new(config.limits)
        .pretty(!compact)
        .render(&analysis, format)
        .into_diagnostic()?;
    println!("{}", output);

    Ok(false)
}

fn fetch_document(cli: &Cli, url: &str) -> Result<Value> {
    let client = DslClient::new(fetch_config(cli)).map_err(fetch_diagnostic)?;
    let response = create_tokio_runtime()?
        .block_on(client.get_dsl_from_url(url))
        .map_err(fetch_diagnostic)?;

    serde_json::to_value(response).into_diagnostic()
}
