//! Analysis result types.
//!
//! These are the owned, serializable values produced by the summarizer and
//! the extractors. Field names serialize in camelCase to match the DSL.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Summary of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub version: String,
    pub framework: String,
    pub stats: Stats,
    /// Distinct component documentation links, first-seen order.
    pub component_docs: IndexSet<String>,
    pub texts: Vec<TextEntry>,
    pub navigations: Vec<NavigationEntry>,
    /// One digest per top-level node.
    pub structure: Vec<NodeDigest>,
}

impl Analysis {
    /// Returns true if the document had no nodes.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }
}

/// Aggregate counts collected during the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_nodes: usize,
    pub text_nodes: usize,
    /// Number of distinct component documentation links.
    pub component_instances: usize,
    pub navigations: usize,
}

/// A text node and its full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub id: String,
    pub name: String,
    pub text: String,
}

/// A navigation edge from a node to a target layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub source_id: String,
    pub source_name: String,
    pub target_layer_id: Option<String>,
}

/// Size-bounded summary of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDigest {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: usize,
    /// `WxH`, present only when both dimensions are.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// First component documentation link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_doc: Option<String>,
    /// Target of the last navigation action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Token alias keys in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDigest>,
}
