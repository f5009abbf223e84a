//! Docs command implementation

use std::path::Path;

use dslscope_core::extract_component_links;
use dslscope_fetch::DocFetcher;
use miette::Result;
use tracing::info;

use crate::cli::Cli;
use crate::output::output_docs;
use crate::utils::{
    create_tokio_runtime, fetch_config, fetch_diagnostic, parse_document, read_input,
};

/// Returns `true` when any document failed to fetch.
pub fn run_docs(
    cli: &Cli,
    urls: &[String],
    from_dsl: bool,
    input: Option<&Path>,
    json: bool,
) -> Result<bool> {
    let mut urls = urls.to_vec();
    if from_dsl {
        let document = parse_document(&read_input(input)?)?;
        let links = extract_component_links(&document);
        info!("Found {} component documentation link(s)", links.len());
        urls.extend(links);
    }

    if urls.is_empty() {
        return Err(miette::miette!(
            "No URLs provided. Pass URLs as arguments or use --from-dsl"
        ));
    }

    let fetcher = DocFetcher::with_timeout(fetch_config(cli).timeout()).map_err(fetch_diagnostic)?;
    let bundle = create_tokio_runtime()?.block_on(fetcher.fetch_all(urls));

    output_docs(&bundle, json)?;
    Ok(bundle.has_errors())
}
