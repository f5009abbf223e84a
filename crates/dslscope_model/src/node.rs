//! DesignNode definition.
//!
//! The node view used throughout dslscope.

use std::fmt;

use serde_json::{Map, Value};

/// Node type of text-bearing nodes.
pub const TEXT_TYPE: &str = "TEXT";

/// Interaction type of navigation actions.
pub const NAVIGATION_TYPE: &str = "navigation";

/// A node in the design DSL tree.
///
/// `DesignNode` borrows the JSON object it was created from. A value counts
/// as a node only when it is a non-empty object; `null`, scalars, arrays and
/// `{}` mean "no node here".
///
/// # Example
///
/// ```rust
/// use dslscope_model::DesignNode;
/// use serde_json::json;
///
/// let value = json!({ "id": "1:2", "type": "TEXT", "characters": "Hello" });
/// let node = DesignNode::from_value(&value).unwrap();
///
/// assert!(node.is_text());
/// assert_eq!(node.characters(), Some("Hello"));
/// assert_eq!(node.name(), "");
/// assert!(DesignNode::from_value(&json!(null)).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DesignNode<'a> {
    object: &'a Map<String, Value>,
}

/// A single entry of a node's `interactive` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction<'a> {
    /// Interaction type, e.g. `navigation`.
    pub kind: &'a str,
    /// Target layer of the interaction, when it names one.
    pub target_layer_id: Option<&'a str>,
}

impl Interaction<'_> {
    /// Returns true for navigation actions.
    pub fn is_navigation(&self) -> bool {
        self.kind == NAVIGATION_TYPE
    }
}

/// Width and height taken from a node's `layout`.
///
/// Displays as `WxH`; a dimension object without a `value` renders as `?`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size<'a> {
    pub width: Option<&'a Value>,
    pub height: Option<&'a Value>,
}

impl fmt::Display for Size<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dimension(f, self.width)?;
        f.write_str("x")?;
        write_dimension(f, self.height)
    }
}

fn write_dimension(f: &mut fmt::Formatter<'_>, value: Option<&Value>) -> fmt::Result {
    match value {
        Some(Value::String(s)) => f.write_str(s),
        Some(Value::Null) | None => f.write_str("?"),
        Some(other) => write!(f, "{other}"),
    }
}

impl<'a> DesignNode<'a> {
    /// Creates a view over `value` if it is a node.
    #[inline]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(object) if !object.is_empty() => Some(Self { object }),
            _ => None,
        }
    }

    /// Returns the underlying JSON object.
    #[inline]
    pub fn as_object(&self) -> &'a Map<String, Value> {
        self.object
    }

    /// Node id, or `""` when missing.
    pub fn id(&self) -> &'a str {
        str_field(self.object, "id").unwrap_or_default()
    }

    /// Layer name, or `""` when missing.
    pub fn name(&self) -> &'a str {
        str_field(self.object, "name").unwrap_or_default()
    }

    /// Node type tag, or `""` when missing.
    pub fn node_type(&self) -> &'a str {
        str_field(self.object, "type").unwrap_or_default()
    }

    /// Returns true if this is a `TEXT` node.
    pub fn is_text(&self) -> bool {
        self.node_type() == TEXT_TYPE
    }

    /// Text content, only when present and non-empty.
    pub fn characters(&self) -> Option<&'a str> {
        str_field(self.object, "characters").filter(|s| !s.is_empty())
    }

    /// Size, only when both `layout.width` and `layout.height` are present.
    pub fn size(&self) -> Option<Size<'a>> {
        let layout = object_field(self.object, "layout")?;
        let width = object_field(layout, "width")?;
        let height = object_field(layout, "height")?;
        Some(Size {
            width: width.get("value"),
            height: height.get("value"),
        })
    }

    /// The `style` object.
    pub fn style(&self) -> Option<&'a Map<String, Value>> {
        object_field(self.object, "style")
    }

    /// Style tag, only when present and non-empty.
    pub fn tag(&self) -> Option<&'a str> {
        self.style()
            .and_then(|style| str_field(style, "tag"))
            .filter(|s| !s.is_empty())
    }

    /// Keys of `style.styleTokenAlias`, in input order.
    pub fn token_aliases(self) -> impl Iterator<Item = &'a str> + 'a {
        self.style()
            .and_then(|style| object_field(style, "styleTokenAlias"))
            .into_iter()
            .flat_map(|aliases| aliases.keys().map(String::as_str))
    }

    /// Non-empty entries of `componentInfo.componentSetDocumentLink`.
    pub fn doc_links(self) -> impl Iterator<Item = &'a str> + 'a {
        object_field(self.object, "componentInfo")
            .map(|info| array_field(info, "componentSetDocumentLink"))
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .filter(|link| !link.is_empty())
    }

    /// All entries of `interactive` that are objects.
    pub fn interactions(self) -> impl Iterator<Item = Interaction<'a>> + 'a {
        array_field(self.object, "interactive")
            .iter()
            .filter_map(Value::as_object)
            .map(|action| Interaction {
                kind: str_field(action, "type").unwrap_or_default(),
                target_layer_id: str_field(action, "targetLayerId"),
            })
    }

    /// Navigation actions only.
    pub fn navigations(self) -> impl Iterator<Item = Interaction<'a>> + 'a {
        self.interactions().filter(Interaction::is_navigation)
    }

    /// Child nodes in input order. Entries that are not nodes are skipped.
    pub fn children(self) -> impl DoubleEndedIterator<Item = DesignNode<'a>> + 'a {
        array_field(self.object, "children")
            .iter()
            .filter_map(DesignNode::from_value)
    }

    /// `style.value` merged with `style.layoutStyles`; layout styles win.
    pub fn merged_styles(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        if let Some(style) = self.style() {
            for key in ["value", "layoutStyles"] {
                if let Some(entries) = object_field(style, key) {
                    merged.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
            }
        }
        merged
    }
}

pub(crate) fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

pub(crate) fn object_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Option<&'a Map<String, Value>> {
    object
        .get(key)
        .and_then(Value::as_object)
        .filter(|o| !o.is_empty())
}

pub(crate) fn array_field<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
