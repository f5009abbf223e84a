//! JSON parsing for DSL documents.

use serde::Deserialize;
use serde_json::Value;

/// Parses `input` into a [`Value`] without a nesting limit.
///
/// Every node level nests two JSON levels (the node and its `children`), so
/// the parser's default limit of 128 is lifted and the parse runs on a stack
/// that grows on demand. Traversal depth is capped later by the walker.
pub fn parse_json(input: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
