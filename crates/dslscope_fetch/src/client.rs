//! Design API client.

use std::sync::OnceLock;

use dslscope_core::{extract_component_links, parse_json};
use regex::Regex;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::design_url::{DesignUrl, is_short_link, is_valid_design_url, parse_design_url};
use crate::rules::{build_dsl_rules, default_meta_rules};
use crate::{FetchConfig, FetchError};

/// Header carrying the user access token.
pub const TOKEN_HEADER: &str = "X-MG-UserAccessToken";

pub(crate) const USER_AGENT: &str = concat!("dslscope/", env!("CARGO_PKG_VERSION"));

static META_ACTION: OnceLock<Regex> = OnceLock::new();

/// A fetched DSL document with its pre-extracted documentation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DslResponse {
    pub dsl: Value,
    pub component_document_links: Vec<String>,
    pub rules: Vec<String>,
}

/// A page action listed in the meta document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaAction {
    pub title: String,
    pub layer_id: String,
}

/// Site and page metadata of a design file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Raw XML metadata.
    pub result: String,
    pub actions: Vec<MetaAction>,
    pub rules: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    rules: Option<Vec<String>>,
}

/// Client for the design API.
#[derive(Debug, Clone)]
pub struct DslClient {
    http: Client,
    no_redirect: Client,
    config: FetchConfig,
}

impl DslClient {
    /// Creates a client honoring the timeout of `config`.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;
        let no_redirect = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            http,
            no_redirect,
            config,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Resolves a short link to the full design URL it redirects to.
    ///
    /// A relative `Location` is resolved against the short link. A success
    /// status means the link already is the final URL.
    pub async fn resolve_short_link(&self, url: &str) -> Result<String, FetchError> {
        debug!("Resolving short link {}", url);
        let response = self.no_redirect.get(url).send().await?;
        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    FetchError::ShortLink(format!("HTTP {} without Location", status.as_u16()))
                })?;
            let resolved = response
                .url()
                .join(location)
                .map_err(|e| FetchError::ShortLink(format!("bad Location {location:?}: {e}")))?;
            debug!("Short link resolved to {}", resolved);
            return Ok(resolved.into());
        }

        if status.is_success() {
            return Ok(response.url().to_string());
        }

        Err(FetchError::ShortLink(format!("HTTP {}", status.as_u16())))
    }

    /// Extracts file and layer ids from a full URL or a short link.
    pub async fn extract_ids(&self, url: &str) -> Result<DesignUrl, FetchError> {
        let target = if is_short_link(url) {
            self.resolve_short_link(url).await?
        } else {
            url.to_string()
        };

        parse_design_url(&target).ok_or_else(|| {
            let reason = if is_valid_design_url(&target) {
                "missing file id or layer_id"
            } else {
                "not a design file link"
            };
            FetchError::InvalidUrl(format!("{target}: {reason}"))
        })
    }

    /// Fetches the DSL document of a layer.
    pub async fn get_dsl(&self, file_id: &str, layer_id: &str) -> Result<DslResponse, FetchError> {
        let dsl = self.get_json("/mcp/dsl", file_id, layer_id).await?;

        Ok(DslResponse {
            component_document_links: extract_component_links(&dsl),
            rules: build_dsl_rules(self.config.extra_rules()),
            dsl,
        })
    }

    /// Fetches the DSL document addressed by `url`.
    pub async fn get_dsl_from_url(&self, url: &str) -> Result<DslResponse, FetchError> {
        let ids = self.extract_ids(url).await?;
        self.get_dsl(&ids.file_id, &ids.layer_id).await
    }

    /// Fetches the site metadata of a layer.
    pub async fn get_meta(
        &self,
        file_id: &str,
        layer_id: &str,
    ) -> Result<MetaResponse, FetchError> {
        let value = self.get_json("/mcp/meta", file_id, layer_id).await?;
        let raw: RawMeta = serde_json::from_value(value)?;
        let result = raw.result.unwrap_or_default();

        Ok(MetaResponse {
            actions: parse_meta_actions(&result),
            rules: raw.rules.unwrap_or_else(default_meta_rules),
            result,
        })
    }

    async fn get_json(
        &self,
        path: &str,
        file_id: &str,
        layer_id: &str,
    ) -> Result<Value, FetchError> {
        let token = self.config.token()?;
        let base = format!("{}{}", self.config.endpoint(), path);
        let url = Url::parse_with_params(&base, &[("fileId", file_id), ("layerId", layer_id)])
            .map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;

        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(TOKEN_HEADER, token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::api(status.as_u16(), body));
        }

        Ok(parse_json(&body)?)
    }
}

/// Extracts the `<action title=".." layerId=".."/>` elements of a meta XML document.
pub fn parse_meta_actions(xml: &str) -> Vec<MetaAction> {
    let pattern = META_ACTION.get_or_init(|| {
        Regex::new(r#"<action\s+title="([^"]+)"\s+layerId="([^"]+)"\s*/>"#)
            .expect("Invalid meta action pattern")
    });

    pattern
        .captures_iter(xml)
        .map(|captures| MetaAction {
            title: captures[1].to_string(),
            layer_id: captures[2].to_string(),
        })
        .collect()
}
