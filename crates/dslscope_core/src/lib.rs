//! # dslscope_core
//!
//! Analysis engine for design DSL documents.
//!
//! This crate provides:
//! - The single-pass [`Summarizer`] producing an [`Analysis`]
//! - Targeted extractors for texts, navigations, component links and tokens
//! - Tree, flat and JSON renderers
//! - Configuration loading
//! - JSON parsing for arbitrarily deep documents
//!
//! ## Example
//!
//! ```rust
//! use dslscope_core::{analyze_str, render::{OutputFormat, Renderer}};
//!
//! let analysis = analyze_str(r#"{"root": {"id": "1", "name": "Page", "type": "FRAME"}}"#)?;
//! assert_eq!(analysis.stats.total_nodes, 1);
//!
//! let output = Renderer::default().render(&analysis, OutputFormat::Flat)?;
//! assert_eq!(output, "[FRAME] Page");
//! # Ok::<(), dslscope_core::AnalyzeError>(())
//! ```

mod analysis;
mod config;
mod error;
pub mod extract;
mod parse;
pub mod render;
mod summarizer;
pub mod text;

pub use analysis::{Analysis, NavigationEntry, NodeDigest, Stats, TextEntry};
pub use config::{AnalyzerConfig, CONFIG_FILES, RenderLimits};
pub use error::AnalyzeError;
pub use extract::{
    ComponentNode, TokenEntry, TokenTable, build_component_tree, extract_component_links,
    extract_navigations, extract_texts, extract_tokens,
};
pub use parse::parse_json;
pub use summarizer::{Summarizer, SummaryContext, analyze, analyze_str};
