//! Usage rules attached to fetched responses.

use serde_json::Value;

/// Rules attached to every DSL response.
pub const DSL_RULES: [&str; 2] = [
    "token field must be generated as a variable (colors, shadows, fonts, etc.) \
     and the token field must be displayed in the comment",
    "componentDocumentLinks is a list of frontend component documentation links \
     used in the DSL layer, designed to help you understand how to use the components. \
     When it exists and is not empty, you need to fetch all component documentation content, \
     understand component usage, and generate code using the components.",
];

/// Rules attached to a meta response whose server sent none.
pub const META_RULES: [&str; 3] = [
    "Fetch the DSL of every page through the layerId of each action",
    "Parse the interactive field to discover navigation between pages",
    "Fetch target pages recursively until no further navigation remains",
];

/// Builds the DSL rules, appending `extra` when it is a JSON array.
///
/// Non-string array entries are ignored, as is any `extra` that does not
/// parse.
pub fn build_dsl_rules(extra: Option<&str>) -> Vec<String> {
    let mut rules: Vec<String> = DSL_RULES.iter().map(|rule| rule.to_string()).collect();

    if let Some(Ok(Value::Array(entries))) = extra.map(serde_json::from_str::<Value>) {
        rules.extend(
            entries
                .into_iter()
                .filter_map(|entry| entry.as_str().map(str::to_string)),
        );
    }

    rules
}

pub fn default_meta_rules() -> Vec<String> {
    META_RULES.iter().map(|rule| rule.to_string()).collect()
}
