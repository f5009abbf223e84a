//! HTTP collaborators for dslscope.
//!
//! Resolves design URLs and short links, fetches DSL documents and site
//! metadata from the design API, and downloads component documentation.
//! Every fetch returns a fully materialized value; nothing here inspects the
//! DSL beyond its documentation links.

pub mod client;
pub mod config;
mod design_url;
pub mod docs;
pub mod error;
pub mod rules;

pub use client::{
    DslClient, DslResponse, MetaAction, MetaResponse, TOKEN_HEADER, parse_meta_actions,
};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FetchConfig, normalize_endpoint};
pub use design_url::{DesignUrl, is_short_link, is_valid_design_url, parse_design_url};
pub use docs::{DocBundle, DocFetcher, DocResult};
pub use error::{ApiErrorCode, FetchError};
pub use rules::build_dsl_rules;
