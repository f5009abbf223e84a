//! Targeted single-purpose extractors.
//!
//! Each extractor normalizes its input on its own and runs one traversal, so
//! none of them depends on the summarizer having run.

use dslscope_model::{DocumentRoot, PreOrder, build_tree};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{NavigationEntry, TextEntry};

/// Top-level key of the link list pre-extracted by the DSL fetcher.
pub const PRE_EXTRACTED_LINKS_KEY: &str = "componentDocumentLinks";

const DEFAULT_TAG: &str = "div";

/// Design tokens keyed by CSS variable name, in input order.
pub type TokenTable = IndexMap<String, TokenEntry>;

/// One entry of the document's `localStyleMap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: Value,
}

/// Node of the simplified component tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Full, untruncated text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    /// `style.value` merged with `style.layoutStyles`.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub styles: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

/// Collects every `TEXT` node with non-empty characters.
pub fn extract_texts(value: &Value) -> Vec<TextEntry> {
    let root = DocumentRoot::normalize(value);
    PreOrder::new(root.nodes())
        .filter(|visit| visit.node.is_text())
        .filter_map(|visit| {
            let node = visit.node;
            node.characters().map(|text| TextEntry {
                id: node.id().to_string(),
                name: node.name().to_string(),
                text: text.to_string(),
            })
        })
        .collect()
}

/// Collects navigation actions that name a target layer.
pub fn extract_navigations(value: &Value) -> Vec<NavigationEntry> {
    let root = DocumentRoot::normalize(value);
    PreOrder::new(root.nodes())
        .flat_map(|visit| {
            let node = visit.node;
            node.navigations()
                .filter_map(|action| action.target_layer_id)
                .filter(|target| !target.is_empty())
                .map(move |target| NavigationEntry {
                    source_id: node.id().to_string(),
                    source_name: node.name().to_string(),
                    target_layer_id: Some(target.to_string()),
                })
        })
        .collect()
}

/// Collects distinct component documentation links in first-seen order.
///
/// A fetched envelope that already carries `componentDocumentLinks` is
/// answered from that list.
pub fn extract_component_links(value: &Value) -> Vec<String> {
    if let Some(links) = value.get(PRE_EXTRACTED_LINKS_KEY).and_then(Value::as_array) {
        let links: IndexSet<&str> = links
            .iter()
            .filter_map(Value::as_str)
            .filter(|link| !link.is_empty())
            .collect();
        return links.into_iter().map(str::to_string).collect();
    }

    let root = DocumentRoot::normalize(value);
    let links: IndexSet<&str> = PreOrder::new(root.nodes())
        .flat_map(|visit| visit.node.doc_links())
        .collect();
    links.into_iter().map(str::to_string).collect()
}

/// Builds the design-token table from `localStyleMap`.
///
/// Entries are keyed by their `variable`, or `--{tokenId}` when it is
/// missing. Entries that are not objects are skipped.
pub fn extract_tokens(value: &Value) -> TokenTable {
    let root = DocumentRoot::normalize(value);
    let Some(style_map) = root.local_style_map() else {
        return TokenTable::new();
    };

    style_map
        .iter()
        .filter_map(|(token_id, token)| {
            let token = token.as_object()?;
            let field = |key: &str| {
                token
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            let variable = token
                .get("variable")
                .and_then(Value::as_str)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("--{token_id}"));

            Some((
                variable,
                TokenEntry {
                    id: token_id.clone(),
                    name: field("name"),
                    token_type: field("type"),
                    value: token
                        .get("value")
                        .cloned()
                        .unwrap_or_else(|| Value::String(String::new())),
                },
            ))
        })
        .collect()
}

/// Builds the simplified component tree.
pub fn build_component_tree(value: &Value) -> Vec<ComponentNode> {
    let root = DocumentRoot::normalize(value);
    let mut walk = PreOrder::new(root.nodes());

    build_tree(
        &mut walk,
        |visit| {
            let node = visit.node;
            ComponentNode {
                id: node.id().to_string(),
                node_type: node.node_type().to_string(),
                name: node.name().to_string(),
                tag: node.tag().unwrap_or(DEFAULT_TAG).to_string(),
                size: node.size().map(|size| size.to_string()),
                text: node.characters().map(str::to_string),
                component_doc: node.doc_links().next().map(str::to_string),
                navigate_to: node
                    .navigations()
                    .last()
                    .and_then(|action| action.target_layer_id)
                    .map(str::to_string),
                styles: node.merged_styles(),
                children: Vec::new(),
            }
        },
        |component: &mut ComponentNode| &mut component.children,
    )
}
