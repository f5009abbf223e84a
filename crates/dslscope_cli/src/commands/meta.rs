//! Meta command implementation

use dslscope_core::render::to_json;
use dslscope_fetch::DslClient;
use miette::{IntoDiagnostic, Result};

use crate::cli::{Cli, LayerArgs};
use crate::commands::resolve_layer;
use crate::utils::{create_tokio_runtime, fetch_config, fetch_diagnostic};

pub fn run_meta(cli: &Cli, layer: &LayerArgs) -> Result<bool> {
    let client = DslClient::new(fetch_config(cli)).map_err(fetch_diagnostic)?;

    let meta = create_tokio_runtime()?.block_on(async {
        let ids = resolve_layer(&client, layer).await?;
        client
            .get_meta(&ids.file_id, &ids.layer_id)
            .await
            .map_err(fetch_diagnostic)
    })?;

    println!("{}", to_json(&meta, true).into_diagnostic()?);
    Ok(false)
}
