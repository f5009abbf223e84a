//! Get-dsl command implementation

use dslscope_core::render::to_json;
use dslscope_fetch::DslClient;
use miette::{IntoDiagnostic, Result};
use tracing::info;

use crate::cli::{Cli, LayerArgs};
use crate::commands::resolve_layer;
use crate::utils::{create_tokio_runtime, fetch_config, fetch_diagnostic};

pub fn run_get_dsl(cli: &Cli, layer: &LayerArgs, pretty: bool) -> Result<bool> {
    let client = DslClient::new(fetch_config(cli)).map_err(fetch_diagnostic)?;

    let response = create_tokio_runtime()?.block_on(async {
        let ids = resolve_layer(&client, layer).await?;
        info!("Fetching DSL for file {} layer {}", ids.file_id, ids.layer_id);
        client
            .get_dsl(&ids.file_id, &ids.layer_id)
            .await
            .map_err(fetch_diagnostic)
    })?;

    println!("{}", to_json(&response, pretty).into_diagnostic()?);
    Ok(false)
}
