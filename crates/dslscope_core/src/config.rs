//! Analyzer configuration.

use std::fs;
use std::path::{Path, PathBuf};

use dslscope_model::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

use crate::AnalyzeError;

/// Config file names looked up by [`AnalyzerConfig::discover`].
pub const CONFIG_FILES: &[&str] = &[".dslscope.json"];

/// Configuration for the analyzer and renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AnalyzerConfig {
    /// Deepest node level that is visited; deeper subtrees are skipped.
    pub max_depth: usize,

    /// Truncation limits applied to digests and renderings.
    pub limits: RenderLimits,
}

/// Truncation limits, in characters unless noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RenderLimits {
    /// Digest `text` field.
    pub digest_text: usize,
    /// Quoted text on tree lines.
    pub tree_text: usize,
    /// Quoted text on flat lines.
    pub flat_text: usize,
    /// Entries of the tree view's text block.
    pub text_list_text: usize,
    /// Number of entries shown in the tree view's text block.
    pub text_list_entries: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            digest_text: 100,
            tree_text: 50,
            flat_text: 50,
            text_list_text: 80,
            text_list_entries: 20,
        }
    }
}

impl AnalyzerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            limits: RenderLimits::default(),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalyzeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalyzeError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AnalyzeError> {
        serde_json::from_str(json)
            .map_err(|e| AnalyzeError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_default() {
        let config = AnalyzerConfig::default();

        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.limits.digest_text, 100);
        assert_eq!(config.limits.tree_text, 50);
        assert_eq!(config.limits.flat_text, 50);
        assert_eq!(config.limits.text_list_text, 80);
        assert_eq!(config.limits.text_list_entries, 20);
    }

    #[test]
    fn test_config_from_json_partial() {
        let json = r#"{ "maxDepth": 64, "limits": { "treeText": 30 } }"#;
        let config = AnalyzerConfig::from_json(json).unwrap();

        assert_eq!(config.max_depth, 64);
        assert_eq!(config.limits.tree_text, 30);
        assert_eq!(config.limits.digest_text, 100);
    }

    #[test]
    fn test_config_empty_object_is_default() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[rstest]
    #[case::unknown_property(r#"{ "maxDeep": 3 }"#)]
    #[case::unknown_limit(r#"{ "limits": { "digest": 3 } }"#)]
    #[case::type_mismatch(r#"{ "maxDepth": "deep" }"#)]
    #[case::not_json("maxDepth = 3")]
    fn test_config_errors(#[case] json: &str) {
        let err = AnalyzerConfig::from_json(json).unwrap_err();
        assert!(
            err.to_string().contains("Invalid config"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_config_discover_and_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AnalyzerConfig::discover(dir.path()).is_none());

        let path = dir.path().join(".dslscope.json");
        fs::write(&path, r#"{ "limits": { "textListEntries": 5 } }"#).unwrap();

        let found = AnalyzerConfig::discover(dir.path()).unwrap();
        assert_eq!(found, path);

        let config = AnalyzerConfig::from_file(&found).unwrap();
        assert_eq!(config.limits.text_list_entries, 5);
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = AnalyzerConfig::from_file("/nonexistent/.dslscope.json").unwrap_err();
        assert!(matches!(err, AnalyzeError::Config(_)));
    }
}
