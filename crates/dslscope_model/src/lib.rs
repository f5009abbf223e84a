//! # dslscope_model
//!
//! Node model for design DSL documents.
//!
//! A DSL export is kept as the `serde_json::Value` it was parsed into. This
//! crate provides borrowed views over that value instead of deserializing it
//! into owned structs, so missing, `null` or wrong-shaped fields never fail a
//! parse: they simply read as absent.
//!
//! ## Architecture
//!
//! - [`DesignNode`] wraps one node object; every accessor is total
//! - [`DocumentRoot`] resolves the envelope and the root-vs-nodes shape once
//! - [`PreOrder`] walks the tree with an explicit stack and a depth cap
//!
//! ## Example
//!
//! ```rust
//! use dslscope_model::{DocumentRoot, PreOrder};
//! use serde_json::json;
//!
//! let value = json!({
//!     "dsl": {
//!         "root": {
//!             "id": "1",
//!             "name": "Page",
//!             "type": "FRAME",
//!             "children": [{ "id": "2", "name": "Title", "type": "TEXT", "characters": "Hi" }]
//!         }
//!     }
//! });
//!
//! let root = DocumentRoot::normalize(&value);
//! let names: Vec<_> = PreOrder::new(root.nodes()).map(|v| v.node.name()).collect();
//! assert_eq!(names, vec!["Page", "Title"]);
//! ```

mod node;
mod root;
pub mod walk;

pub use node::{DesignNode, Interaction, NAVIGATION_TYPE, Size, TEXT_TYPE};
pub use root::{DocumentRoot, ENVELOPE_KEY, TopLevel};
pub use walk::{DEFAULT_MAX_DEPTH, PreOrder, Visit, build_tree};
