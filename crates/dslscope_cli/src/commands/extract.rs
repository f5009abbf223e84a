//! Extract command implementation

use std::path::Path;

use dslscope_core::render::to_json;
use dslscope_core::{
    build_component_tree, extract_component_links, extract_navigations, extract_texts,
    extract_tokens,
};
use miette::{IntoDiagnostic, Result};

use crate::cli::ExtractKind;
use crate::utils::{parse_document, read_input};

pub fn run_extract(kind: ExtractKind, input: Option<&Path>, pretty: bool) -> Result<bool> {
    let document = parse_document(&read_input(input)?)?;

    let output = match kind {
        ExtractKind::Texts => to_json(&extract_texts(&document), pretty),
        ExtractKind::Navigations => to_json(&extract_navigations(&document), pretty),
        ExtractKind::Components => to_json(&extract_component_links(&document), pretty),
        ExtractKind::Tokens => to_json(&extract_tokens(&document), pretty),
        ExtractKind::Tree => to_json(&build_component_tree(&document), pretty),
    }
    .into_diagnostic()?;
    println!("{}", output);

    Ok(false)
}
