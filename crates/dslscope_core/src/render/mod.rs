//! Output renderers
//!
//! Every renderer consumes a finished [`Analysis`] and returns the rendered
//! text without a trailing newline.

mod flat;
mod json;
mod tree;

use std::fmt;
use std::str::FromStr;

use crate::{AnalyzeError, Analysis, RenderLimits};

pub use flat::render_flat;
pub use json::{render_json, to_json};
pub use tree::render_tree;

/// Output format of the `analyze` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
    Flat,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
            OutputFormat::Flat => "flat",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "flat" => Ok(OutputFormat::Flat),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Renders analyses in a chosen format.
#[derive(Debug, Clone)]
pub struct Renderer {
    limits: RenderLimits,
    pretty: bool,
}

impl Renderer {
    /// Creates a renderer with the given limits and pretty-printed JSON.
    pub fn new(limits: RenderLimits) -> Self {
        Self {
            limits,
            pretty: true,
        }
    }

    /// Selects indented (`true`) or compact JSON output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(
        &self,
        analysis: &Analysis,
        format: OutputFormat,
    ) -> Result<String, AnalyzeError> {
        match format {
            OutputFormat::Tree => Ok(render_tree(analysis, &self.limits)),
            OutputFormat::Flat => Ok(render_flat(analysis, &self.limits)),
            OutputFormat::Json => render_json(analysis, self.pretty),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::tree("tree", OutputFormat::Tree)]
    #[case::json("json", OutputFormat::Json)]
    #[case::flat("flat", OutputFormat::Flat)]
    fn test_output_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(input.parse::<OutputFormat>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_renderer_dispatches_on_format() {
        let analysis = analyze(&json!({ "root": { "id": "1", "name": "Page", "type": "FRAME" } }));
        let renderer = Renderer::default();

        let tree = renderer.render(&analysis, OutputFormat::Tree).unwrap();
        let flat = renderer.render(&analysis, OutputFormat::Flat).unwrap();
        let compact = renderer
            .clone()
            .pretty(false)
            .render(&analysis, OutputFormat::Json)
            .unwrap();

        assert!(tree.starts_with("DSL Analysis"));
        assert_eq!(flat, "[FRAME] Page");
        assert!(!compact.contains('\n'));
    }
}
