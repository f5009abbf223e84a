//! Document root normalization.
//!
//! DSL exports arrive in several shapes: a single `root` node or a `nodes`
//! forest, optionally wrapped once under an envelope key by the fetcher.
//! [`DocumentRoot::normalize`] resolves the shape once so traversals never
//! look at it again.

use serde_json::{Map, Value};

use crate::DesignNode;
use crate::node::object_field;

/// Key under which a fetched document is wrapped.
pub const ENVELOPE_KEY: &str = "dsl";

const UNKNOWN: &str = "unknown";

/// Top-level node(s) of a document.
#[derive(Debug, Clone)]
pub enum TopLevel<'a> {
    /// Document with a single `root` node.
    Single(DesignNode<'a>),
    /// Document with a `nodes` array. May be empty.
    Forest(Vec<DesignNode<'a>>),
}

impl<'a> TopLevel<'a> {
    /// Returns the top-level nodes as a slice.
    pub fn nodes(&self) -> &[DesignNode<'a>] {
        match self {
            TopLevel::Single(node) => std::slice::from_ref(node),
            TopLevel::Forest(nodes) => nodes,
        }
    }
}

/// Normalized view over a DSL document.
#[derive(Debug, Clone)]
pub struct DocumentRoot<'a> {
    document: &'a Value,
    top_level: TopLevel<'a>,
}

impl<'a> DocumentRoot<'a> {
    /// Normalizes `value` into a document root.
    ///
    /// Never fails: a value with neither `root` nor `nodes` (including
    /// non-object input) yields an empty forest.
    pub fn normalize(value: &'a Value) -> Self {
        let document = Self::unwrap_envelope(value);

        let top_level = match document.get("root").and_then(DesignNode::from_value) {
            Some(root) => TopLevel::Single(root),
            None => TopLevel::Forest(
                document
                    .get("nodes")
                    .and_then(Value::as_array)
                    .map(|nodes| nodes.iter().filter_map(DesignNode::from_value).collect())
                    .unwrap_or_default(),
            ),
        };

        Self {
            document,
            top_level,
        }
    }

    /// Strips the envelope from `value`, exactly one level.
    pub fn unwrap_envelope(value: &'a Value) -> &'a Value {
        match value.get(ENVELOPE_KEY) {
            Some(inner @ Value::Object(_)) => inner,
            _ => value,
        }
    }

    /// The unwrapped document value.
    pub fn document(&self) -> &'a Value {
        self.document
    }

    /// The resolved top-level shape.
    pub fn top_level(&self) -> &TopLevel<'a> {
        &self.top_level
    }

    /// The top-level nodes.
    pub fn nodes(&self) -> &[DesignNode<'a>] {
        self.top_level.nodes()
    }

    /// Returns true if the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// DSL version, `"unknown"` when missing.
    pub fn version(&self) -> String {
        self.scalar_field("version")
    }

    /// Target framework, `"unknown"` when missing.
    pub fn framework(&self) -> String {
        self.scalar_field("framework")
    }

    /// The document's `localStyleMap`.
    pub fn local_style_map(&self) -> Option<&'a Map<String, Value>> {
        self.document
            .as_object()
            .and_then(|document| object_field(document, "localStyleMap"))
    }

    fn scalar_field(&self, key: &str) -> String {
        let Some(object) = self.document.as_object() else {
            return UNKNOWN.to_string();
        };
        match object.get(key) {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => UNKNOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn ids(root: &DocumentRoot<'_>) -> Vec<String> {
        root.nodes().iter().map(|n| n.id().to_string()).collect()
    }

    #[test]
    fn test_single_root() {
        let value = json!({ "root": { "id": "r" }, "nodes": [{ "id": "ignored" }] });
        let root = DocumentRoot::normalize(&value);

        assert!(matches!(root.top_level(), TopLevel::Single(_)));
        assert_eq!(ids(&root), vec!["r"]);
    }

    #[test]
    fn test_forest_skips_absent_entries() {
        let value = json!({ "nodes": [{ "id": "a" }, null, {}, 1, { "id": "b" }] });
        let root = DocumentRoot::normalize(&value);

        assert!(matches!(root.top_level(), TopLevel::Forest(_)));
        assert_eq!(ids(&root), vec!["a", "b"]);
    }

    #[test]
    fn test_null_root_falls_back_to_nodes() {
        let value = json!({ "root": null, "nodes": [{ "id": "a" }] });
        let root = DocumentRoot::normalize(&value);

        assert_eq!(ids(&root), vec!["a"]);
    }

    #[rstest]
    #[case::empty_object(json!({}))]
    #[case::null(json!(null))]
    #[case::array(json!([{ "id": "a" }]))]
    #[case::nodes_not_array(json!({ "nodes": { "id": "a" } }))]
    #[case::empty_root(json!({ "root": {} }))]
    fn test_degrades_to_empty_forest(#[case] value: Value) {
        let root = DocumentRoot::normalize(&value);

        assert!(root.is_empty());
        assert_eq!(root.version(), "unknown");
        assert_eq!(root.framework(), "unknown");
    }

    #[test]
    fn test_envelope_is_unwrapped_once() {
        let inner = json!({ "version": "2", "root": { "id": "r" } });
        let wrapped = json!({ "dsl": inner.clone(), "componentDocumentLinks": [] });
        let doubly = json!({ "dsl": { "dsl": inner.clone() } });

        let root = DocumentRoot::normalize(&wrapped);
        assert_eq!(root.document(), &inner);
        assert_eq!(root.version(), "2");
        assert_eq!(ids(&root), vec!["r"]);

        let root = DocumentRoot::normalize(&doubly);
        assert!(root.is_empty());
    }

    #[test]
    fn test_non_object_envelope_is_ignored() {
        let value = json!({ "dsl": "text", "nodes": [{ "id": "a" }] });
        let root = DocumentRoot::normalize(&value);

        assert_eq!(ids(&root), vec!["a"]);
    }

    #[test]
    fn test_version_and_framework() {
        let value = json!({ "version": 3, "framework": "react", "nodes": [] });
        let root = DocumentRoot::normalize(&value);

        assert_eq!(root.version(), "3");
        assert_eq!(root.framework(), "react");
    }

    #[test]
    fn test_local_style_map() {
        let value = json!({ "localStyleMap": { "t1": { "name": "brand" } } });
        let root = DocumentRoot::normalize(&value);

        assert_eq!(root.local_style_map().map(|m| m.len()), Some(1));
        assert!(DocumentRoot::normalize(&json!({})).local_style_map().is_none());
    }
}
