//! JSON renderer

use serde::Serialize;

use crate::{AnalyzeError, Analysis};

/// Serializes the analysis, indented when `pretty` is set.
pub fn render_json(analysis: &Analysis, pretty: bool) -> Result<String, AnalyzeError> {
    to_json(analysis, pretty)
}

/// Serializes any extraction result the same way [`render_json`] does.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, AnalyzeError> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    output.map_err(AnalyzeError::Serialize)
}
