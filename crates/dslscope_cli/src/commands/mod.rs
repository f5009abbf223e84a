//! Command implementations

pub mod analyze;
pub mod docs;
pub mod extract;
pub mod get_dsl;
pub mod meta;

use dslscope_core::AnalyzerConfig;
use dslscope_fetch::{DesignUrl, DslClient};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::cli::{Cli, LayerArgs};
use crate::utils::fetch_diagnostic;

/// Loads the analyzer config given with `--config`, or discovers one.
pub fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    match &cli.config {
        Some(path) => AnalyzerConfig::from_file(path).into_diagnostic(),
        None => find_config(),
    }
}

pub fn find_config() -> Result<AnalyzerConfig> {
    if let Some(path) = AnalyzerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return AnalyzerConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(AnalyzerConfig::new())
}

/// Resolves the layer named on the command line, following short links.
pub async fn resolve_layer(client: &DslClient, layer: &LayerArgs) -> Result<DesignUrl> {
    match (&layer.url, &layer.file_id, &layer.layer_id) {
        (Some(url), _, _) => client.extract_ids(url).await.map_err(fetch_diagnostic),
        (None, Some(file_id), Some(layer_id)) => Ok(DesignUrl {
            file_id: file_id.clone(),
            layer_id: layer_id.clone(),
        }),
        _ => Err(miette::miette!(
            "Please provide a URL or --file-id and --layer-id"
        )),
    }
}
