//! Flat path list renderer

use crate::text::truncate;
use crate::{Analysis, NodeDigest, RenderLimits};

/// Renders one line per node, in pre-order, addressed by its name path.
pub fn render_flat(analysis: &Analysis, limits: &RenderLimits) -> String {
    let mut lines = Vec::new();
    let mut stack: Vec<(&NodeDigest, String)> = analysis
        .structure
        .iter()
        .rev()
        .map(|digest| (digest, digest.name.clone()))
        .collect();

    while let Some((digest, path)) = stack.pop() {
        let mut line = format!("[{}] {}", digest.node_type, path);
        if let Some(size) = &digest.size {
            line.push_str(" | ");
            line.push_str(size);
        }
        if let Some(text) = &digest.text {
            line.push_str(&format!(" | \"{}\"", truncate(text, limits.flat_text)));
        }
        lines.push(line);

        stack.extend(digest.children.iter().rev().map(|child| {
            let child_path = if path.is_empty() {
                child.name.clone()
            } else {
                format!("{}/{}", path, child.name)
            };
            (child, child_path)
        }));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_render_flat() {
        let value = json!({ "root": {
            "id": "1", "name": "Page", "type": "FRAME",
            "layout": { "width": { "value": 375 }, "height": { "value": "auto" } },
            "children": [
                { "id": "2", "name": "Header", "type": "FRAME", "children": [
                    { "id": "3", "name": "Title", "type": "TEXT", "characters": "Hello" }
                ]},
                { "id": "4", "name": "Footer", "type": "FRAME" }
            ]
        }});
        let output = render_flat(&analyze(&value), &RenderLimits::default());

        assert_eq!(
            output,
            "[FRAME] Page | 375xauto\n\
             [FRAME] Page/Header\n\
             [TEXT] Page/Header/Title | \"Hello\"\n\
             [FRAME] Page/Footer"
        );
    }

    #[test]
    fn test_render_flat_cuts_text_without_ellipsis() {
        let value = json!({ "nodes": [
            { "id": "1", "name": "Body", "type": "TEXT", "characters": "y".repeat(70) }
        ]});
        let output = render_flat(&analyze(&value), &RenderLimits::default());

        assert_eq!(output, format!("[TEXT] Body | \"{}\"", "y".repeat(50)));
    }

    #[test]
    fn test_render_flat_unnamed_parent() {
        let value = json!({ "root": { "id": "1", "type": "FRAME", "children": [
            { "id": "2", "name": "Child", "type": "RECT" }
        ]}});
        let output = render_flat(&analyze(&value), &RenderLimits::default());

        assert_eq!(output, "[FRAME] \n[RECT] Child");
    }

    #[test]
    fn test_render_flat_empty() {
        assert_eq!(render_flat(&analyze(&json!({})), &RenderLimits::default()), "");
    }
}
