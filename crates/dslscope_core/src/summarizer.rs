//! Single-pass document summarizer.
//!
//! One pre-order traversal builds the digest tree and, through a
//! [`SummaryContext`], the flat aggregates (stats, texts, navigations and
//! component docs). Formatting is left to the renderers.

use dslscope_model::{DesignNode, DocumentRoot, PreOrder, Visit, build_tree};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, warn};

use crate::parse::parse_json;
use crate::text::truncate_with_ellipsis;
use crate::{
    AnalyzeError, Analysis, AnalyzerConfig, NavigationEntry, NodeDigest, Stats, TextEntry,
};

/// Builds an [`Analysis`] from a DSL document.
#[derive(Debug, Clone)]
pub struct Summarizer {
    max_depth: usize,
    text_limit: usize,
}

impl Summarizer {
    /// Creates a summarizer using the depth cap and digest text limit of `config`.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            text_limit: config.limits.digest_text,
        }
    }

    /// Normalizes `value` and analyzes it.
    pub fn analyze(&self, value: &Value) -> Analysis {
        self.analyze_root(&DocumentRoot::normalize(value))
    }

    /// Analyzes an already normalized document.
    pub fn analyze_root(&self, root: &DocumentRoot<'_>) -> Analysis {
        let mut context = SummaryContext::new();
        let mut walk = PreOrder::with_max_depth(root.nodes(), self.max_depth);

        let structure = build_tree(
            &mut walk,
            |visit| {
                context.record(visit.node);
                self.digest(visit)
            },
            |digest: &mut NodeDigest| &mut digest.children,
        );

        if walk.skipped() > 0 {
            warn!(
                "Skipped {} subtree(s) deeper than {} levels",
                walk.skipped(),
                self.max_depth
            );
        }

        let stats = context.stats();
        debug!(
            "Analyzed {} nodes ({} texts, {} components, {} navigations)",
            stats.total_nodes, stats.text_nodes, stats.component_instances, stats.navigations
        );

        context.finish(root.version(), root.framework(), structure)
    }

    fn digest(&self, visit: &Visit<'_>) -> NodeDigest {
        let node = visit.node;
        NodeDigest {
            id: node.id().to_string(),
            name: node.name().to_string(),
            node_type: node.node_type().to_string(),
            depth: visit.depth,
            size: node.size().map(|size| size.to_string()),
            text: node
                .characters()
                .map(|text| truncate_with_ellipsis(text, self.text_limit)),
            component_doc: node.doc_links().next().map(str::to_string),
            navigate_to: node
                .navigations()
                .last()
                .and_then(|action| action.target_layer_id)
                .map(str::to_string),
            tag: node.tag().map(str::to_string),
            tokens: node.token_aliases().map(str::to_string).collect(),
            children: Vec::new(),
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

/// Accumulators threaded through one traversal.
#[derive(Debug, Default)]
pub struct SummaryContext {
    stats: Stats,
    component_docs: IndexSet<String>,
    texts: Vec<TextEntry>,
    navigations: Vec<NavigationEntry>,
}

impl SummaryContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visited node.
    pub fn record(&mut self, node: DesignNode<'_>) {
        self.stats.total_nodes += 1;

        if node.is_text()
            && let Some(text) = node.characters()
        {
            self.texts.push(TextEntry {
                id: node.id().to_string(),
                name: node.name().to_string(),
                text: text.to_string(),
            });
            self.stats.text_nodes += 1;
        }

        for link in node.doc_links() {
            if !self.component_docs.contains(link) {
                self.component_docs.insert(link.to_string());
                self.stats.component_instances += 1;
            }
        }

        for action in node.navigations() {
            self.navigations.push(NavigationEntry {
                source_id: node.id().to_string(),
                source_name: node.name().to_string(),
                target_layer_id: action.target_layer_id.map(str::to_string),
            });
            self.stats.navigations += 1;
        }
    }

    /// Counts recorded so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Consumes the context into an [`Analysis`].
    pub fn finish(
        self,
        version: String,
        framework: String,
        structure: Vec<NodeDigest>,
    ) -> Analysis {
        Analysis {
            version,
            framework,
            stats: self.stats,
            component_docs: self.component_docs,
            texts: self.texts,
            navigations: self.navigations,
            structure,
        }
    }
}

/// Analyzes `value` with the default configuration.
pub fn analyze(value: &Value) -> Analysis {
    Summarizer::default().analyze(value)
}

/// Parses `input` as JSON and analyzes it with the default configuration.
pub fn analyze_str(input: &str) -> Result<Analysis, AnalyzeError> {
    let value = parse_json(input).map_err(AnalyzeError::MalformedInput)?;
    Ok(analyze(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderLimits;
    use dslscope_model::DEFAULT_MAX_DEPTH;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn digest(id: &str, node_type: &str, depth: usize) -> NodeDigest {
        NodeDigest {
            id: id.to_string(),
            name: String::new(),
            node_type: node_type.to_string(),
            depth,
            size: None,
            text: None,
            component_doc: None,
            navigate_to: None,
            tag: None,
            tokens: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Independent recursive node count over the raw value.
    fn reference_count(value: &Value) -> usize {
        match value {
            Value::Object(object) if !object.is_empty() => {
                1 + object
                    .get("children")
                    .and_then(Value::as_array)
                    .map(|children| children.iter().map(reference_count).sum::<usize>())
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    fn sample() -> Value {
        json!({
            "dsl": {
                "version": "1.0",
                "framework": "react",
                "root": {
                    "id": "0:1",
                    "name": "Page",
                    "type": "FRAME",
                    "layout": { "width": { "value": 375 }, "height": { "value": 812 } },
                    "style": {
                        "tag": "main",
                        "styleTokenAlias": { "fill": "--bg", "radius": "--r" }
                    },
                    "children": [
                        {
                            "id": "1:1",
                            "name": "Title",
                            "type": "TEXT",
                            "characters": "Welcome"
                        },
                        {
                            "id": "1:2",
                            "name": "Button",
                            "type": "INSTANCE",
                            "componentInfo": {
                                "componentSetDocumentLink": [
                                    "https://docs/button.mdx",
                                    "https://docs/base.mdx"
                                ]
                            },
                            "interactive": [
                                { "type": "navigation", "targetLayerId": "0:3" },
                                { "type": "hover" },
                                { "type": "navigation", "targetLayerId": "0:4" }
                            ],
                            "children": [
                                { "id": "1:3", "name": "Label", "type": "TEXT", "characters": "" }
                            ]
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_forest_scenario() {
        let value = json!({ "nodes": [{
            "id": "1", "name": "Root", "type": "FRAME",
            "children": [{ "id": "2", "name": "Title", "type": "TEXT", "characters": "Hi" }]
        }]});
        let analysis = analyze(&value);

        assert_eq!(
            analysis.stats,
            Stats {
                total_nodes: 2,
                text_nodes: 1,
                component_instances: 0,
                navigations: 0,
            }
        );
        assert_eq!(
            analysis.texts,
            vec![TextEntry {
                id: "2".to_string(),
                name: "Title".to_string(),
                text: "Hi".to_string(),
            }]
        );
        assert_eq!(analysis.version, "unknown");
        assert_eq!(analysis.framework, "unknown");
    }

    #[test]
    fn test_sample_digest_tree() {
        let analysis = analyze(&sample());

        assert_eq!(analysis.version, "1.0");
        assert_eq!(analysis.framework, "react");
        assert_eq!(analysis.structure.len(), 1);

        let page = &analysis.structure[0];
        assert_eq!(page.name, "Page");
        assert_eq!(page.depth, 0);
        assert_eq!(page.size.as_deref(), Some("375x812"));
        assert_eq!(page.tag.as_deref(), Some("main"));
        assert_eq!(page.tokens, vec!["fill", "radius"]);
        assert_eq!(page.children.len(), 2);

        let title = &page.children[0];
        assert_eq!(title.text.as_deref(), Some("Welcome"));
        assert_eq!(title.depth, 1);
        assert!(title.size.is_none());

        let button = &page.children[1];
        assert_eq!(button.component_doc.as_deref(), Some("https://docs/button.mdx"));
        assert_eq!(button.navigate_to.as_deref(), Some("0:4"));
        assert_eq!(button.children.len(), 1);
        assert_eq!(button.children[0].depth, 2);
        assert!(button.children[0].text.is_none());
    }

    #[test]
    fn test_sample_aggregates() {
        let analysis = analyze(&sample());

        assert_eq!(analysis.stats.total_nodes, 4);
        assert_eq!(analysis.stats.text_nodes, 1);
        assert_eq!(analysis.stats.component_instances, 2);
        assert_eq!(analysis.stats.navigations, 2);
        assert_eq!(
            analysis.component_docs.iter().collect::<Vec<_>>(),
            vec!["https://docs/button.mdx", "https://docs/base.mdx"]
        );
        assert_eq!(
            analysis.navigations,
            vec![
                NavigationEntry {
                    source_id: "1:2".to_string(),
                    source_name: "Button".to_string(),
                    target_layer_id: Some("0:3".to_string()),
                },
                NavigationEntry {
                    source_id: "1:2".to_string(),
                    source_name: "Button".to_string(),
                    target_layer_id: Some("0:4".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_repeated_doc_links_are_counted_once() {
        let component = json!({
            "id": "c", "type": "INSTANCE",
            "componentInfo": { "componentSetDocumentLink": ["a", "a", "b"] }
        });
        let other = json!({
            "id": "d", "type": "INSTANCE",
            "componentInfo": { "componentSetDocumentLink": ["a", ""] }
        });
        let value = json!({ "root": { "id": "r", "children": [component, other] } });
        let analysis = analyze(&value);

        assert_eq!(
            analysis.component_docs.iter().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(analysis.stats.component_instances, 2);
        assert_eq!(
            analysis.stats.component_instances,
            analysis.component_docs.len()
        );
    }

    #[test]
    fn test_empty_document() {
        let analysis = analyze(&json!({}));

        assert!(analysis.is_empty());
        assert_eq!(analysis.stats, Stats::default());
        assert!(analysis.texts.is_empty());
        assert!(analysis.navigations.is_empty());
        assert!(analysis.component_docs.is_empty());
    }

    #[test]
    fn test_envelope_analyzes_like_inner_document() {
        let inner = sample()["dsl"].clone();
        let wrapped = sample();

        assert_eq!(analyze(&wrapped), analyze(&inner));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let value = sample();
        let first = analyze(&value);
        let second = analyze(&value);

        assert_eq!(first, second);
        assert!(first.component_docs.iter().eq(second.component_docs.iter()));
    }

    #[rstest]
    #[case::exactly_limit(100, false)]
    #[case::one_over(101, true)]
    fn test_digest_text_truncation(#[case] len: usize, #[case] truncated: bool) {
        let characters = "x".repeat(len);
        let value = json!({ "root": { "id": "t", "type": "TEXT", "characters": characters } });
        let analysis = analyze(&value);
        let text = analysis.structure[0].text.as_deref().unwrap();

        if truncated {
            assert_eq!(text, format!("{}...", "x".repeat(100)));
        } else {
            assert_eq!(text, characters);
        }
        // texts keep the full content
        assert_eq!(analysis.texts[0].text, characters);
    }

    #[test]
    fn test_non_text_node_with_characters_gets_digest_text_only() {
        let value = json!({ "root": { "id": "f", "type": "FRAME", "characters": "inline" } });
        let analysis = analyze(&value);

        assert_eq!(analysis.structure[0].text.as_deref(), Some("inline"));
        assert!(analysis.texts.is_empty());
        assert_eq!(analysis.stats.text_nodes, 0);
    }

    #[test]
    fn test_navigation_without_target() {
        let value = json!({ "root": {
            "id": "n", "name": "Link",
            "interactive": [
                { "type": "navigation", "targetLayerId": "0:9" },
                { "type": "navigation" }
            ]
        }});
        let analysis = analyze(&value);

        assert_eq!(analysis.stats.navigations, 2);
        assert_eq!(analysis.navigations[1].target_layer_id, None);
        assert_eq!(analysis.structure[0].navigate_to, None);
    }

    #[test]
    fn test_malformed_children_are_skipped() {
        let value = json!({ "nodes": [
            {
                "id": "a", "type": "FRAME",
                "children": [null, 3, "x", {}, { "id": "b", "type": "FRAME" }]
            },
            null,
            { "id": "c", "type": "TEXT", "characters": "ok", "children": "none" }
        ]});
        let analysis = analyze(&value);

        let mut a = digest("a", "FRAME", 0);
        a.children.push(digest("b", "FRAME", 1));
        let mut c = digest("c", "TEXT", 0);
        c.text = Some("ok".to_string());

        assert_eq!(analysis.structure, vec![a, c]);
        assert_eq!(analysis.stats.total_nodes, 3);
    }

    #[test]
    fn test_total_nodes_matches_reference_count() {
        let value = sample();
        let analysis = analyze(&value);

        assert_eq!(
            analysis.stats.total_nodes,
            reference_count(&value["dsl"]["root"])
        );
    }

    #[test]
    fn test_depth_cap_from_config() {
        let value = json!({ "root": {
            "id": "0", "children": [{ "id": "1", "children": [{ "id": "2" }] }]
        }});
        let config = AnalyzerConfig {
            max_depth: 1,
            limits: RenderLimits::default(),
        };
        let analysis = Summarizer::new(&config).analyze(&value);

        assert_eq!(analysis.stats.total_nodes, 2);
        assert!(analysis.structure[0].children[0].children.is_empty());
    }

    #[test]
    fn test_analyze_str_rejects_malformed_json() {
        let err = analyze_str("{ not json").unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedInput(_)));
    }

    /// A chain of `levels` FRAME nodes ending in one TEXT leaf.
    fn deep_chain(levels: usize) -> String {
        let mut json = String::from(r#"{"root":"#);
        for level in 0..levels {
            json.push_str(&format!(r#"{{"id":"{level}","type":"FRAME","children":["#));
        }
        json.push_str(r#"{"id":"leaf","name":"Leaf","type":"TEXT","characters":"Hi"}"#);
        json.push_str(&"]}".repeat(levels));
        json.push('}');
        json
    }

    #[rstest]
    #[case::past_parser_nesting_limit(100, 101, 1)]
    #[case::past_depth_cap(600, DEFAULT_MAX_DEPTH + 1, 0)]
    fn test_analyze_str_accepts_deep_documents(
        #[case] levels: usize,
        #[case] total_nodes: usize,
        #[case] text_nodes: usize,
    ) {
        let analysis = analyze_str(&deep_chain(levels)).unwrap();

        assert_eq!(analysis.stats.total_nodes, total_nodes);
        assert_eq!(analysis.stats.text_nodes, text_nodes);
    }

    #[test]
    fn test_analyze_str_accepts_non_object_json() {
        let analysis = analyze_str("[1, 2, 3]").unwrap();
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let analysis = analyze(&sample());
        let json = serde_json::to_string(&analysis).unwrap();
        let parsed: Analysis = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, analysis);
        assert!(parsed.component_docs.iter().eq(analysis.component_docs.iter()));
    }
}
