//! Analyzer error types.

use thiserror::Error;

/// Errors that can occur while analyzing a document.
///
/// A document without `root` or `nodes` is not an error; it analyzes to an
/// empty result.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Input is not parseable as JSON.
    #[error("Malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl AnalyzeError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
