//! Tree view renderer

use crate::text::truncate_with_ellipsis;
use crate::{Analysis, NodeDigest, RenderLimits};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Placeholder for a navigation action without a target.
const MISSING_TARGET: &str = "?";

/// Renders the human-readable tree view.
pub fn render_tree(analysis: &Analysis, limits: &RenderLimits) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "DSL Analysis (v{}, {})",
        analysis.version, analysis.framework
    ));
    let stats = &analysis.stats;
    lines.push(format!(
        "Stats: {} nodes, {} texts, {} components, {} navigations",
        stats.total_nodes, stats.text_nodes, stats.component_instances, stats.navigations
    ));
    lines.push(String::new());

    if !analysis.component_docs.is_empty() {
        lines.push("Component Docs:".to_string());
        lines.extend(analysis.component_docs.iter().map(|doc| format!("  - {doc}")));
        lines.push(String::new());
    }

    lines.push("Structure:".to_string());
    push_structure(&mut lines, &analysis.structure, limits);

    if !analysis.texts.is_empty() {
        lines.push(String::new());
        lines.push("Text Contents:".to_string());
        for entry in analysis.texts.iter().take(limits.text_list_entries) {
            lines.push(format!(
                "  [{}] {}: \"{}\"",
                entry.id,
                entry.name,
                truncate_with_ellipsis(&entry.text, limits.text_list_text)
            ));
        }
        if analysis.texts.len() > limits.text_list_entries {
            lines.push(format!(
                "  ... and {} more",
                analysis.texts.len() - limits.text_list_entries
            ));
        }
    }

    if !analysis.navigations.is_empty() {
        lines.push(String::new());
        lines.push("Navigations:".to_string());
        for nav in &analysis.navigations {
            lines.push(format!(
                "  {} ({}) → {}",
                nav.source_name,
                nav.source_id,
                nav.target_layer_id.as_deref().unwrap_or(MISSING_TARGET)
            ));
        }
    }

    lines.join("\n")
}

fn push_structure(lines: &mut Vec<String>, roots: &[NodeDigest], limits: &RenderLimits) {
    let mut stack: Vec<(&NodeDigest, String, bool)> = roots
        .iter()
        .enumerate()
        .rev()
        .map(|(i, digest)| (digest, String::new(), i + 1 == roots.len()))
        .collect();

    while let Some((digest, prefix, is_last)) = stack.pop() {
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{connector}{}", node_line(digest, limits)));

        let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
        let count = digest.children.len();
        stack.extend(
            digest
                .children
                .iter()
                .enumerate()
                .rev()
                .map(|(i, child)| (child, child_prefix.clone(), i + 1 == count)),
        );
    }
}

fn node_line(digest: &NodeDigest, limits: &RenderLimits) -> String {
    let mut line = format!("[{}] {}", digest.node_type, digest.name);
    if let Some(size) = &digest.size {
        line.push_str(&format!(" ({size})"));
    }
    if let Some(text) = &digest.text {
        line.push_str(&format!(" \"{}\"", truncate_with_ellipsis(text, limits.tree_text)));
    }
    if let Some(tag) = &digest.tag {
        line.push_str(&format!(" <{tag}>"));
    }
    if let Some(target) = digest.navigate_to.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(&format!(" → {target}"));
    }
    line
}
