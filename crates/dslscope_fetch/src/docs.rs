//! Component documentation fetcher.

use std::time::Duration;

use indexmap::{IndexMap, IndexSet};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::FetchError;
use crate::client::USER_AGENT;
use crate::config::DEFAULT_TIMEOUT;

const DOC_ACCEPT: &str = "text/markdown, text/plain, */*";

/// Outcome of fetching one documentation URL.
#[derive(Debug)]
pub struct DocResult {
    pub url: String,
    pub content: Result<String, FetchError>,
}

/// Documentation fetched for a list of URLs, in first-seen order.
#[derive(Debug, Default)]
pub struct DocBundle {
    pub results: Vec<DocResult>,
}

impl DocBundle {
    /// Successfully fetched documents keyed by URL.
    pub fn docs(&self) -> IndexMap<&str, &str> {
        self.results
            .iter()
            .filter_map(|result| match &result.content {
                Ok(content) => Some((result.url.as_str(), content.as_str())),
                Err(_) => None,
            })
            .collect()
    }

    /// Messages of every failed fetch.
    pub fn errors(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|result| result.content.as_ref().err().map(ToString::to_string))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|result| result.content.is_err())
    }

    /// JSON form: `{"docs": {url: content}, "errors": [..] | null}`.
    pub fn to_json(&self) -> Value {
        let errors = self.errors();
        let errors = if errors.is_empty() {
            Value::Null
        } else {
            json!(errors)
        };
        json!({ "docs": self.docs(), "errors": errors })
    }
}

/// Fetches component documentation over plain HTTP.
#[derive(Debug, Clone)]
pub struct DocFetcher {
    http: Client,
}

impl DocFetcher {
    /// Creates a fetcher with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetches one document, following redirects.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching documentation {}", url);
        let response = self.http.get(url).header(ACCEPT, DOC_ACCEPT).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches every distinct URL once. Failures are collected, not raised.
    pub async fn fetch_all<I, S>(&self, urls: I) -> DocBundle
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: IndexSet<String> = urls.into_iter().map(Into::into).collect();
        let mut bundle = DocBundle::default();

        for url in unique {
            let content = self.fetch(&url).await;
            if let Err(e) = &content {
                warn!("Failed to fetch {}: {}", url, e);
            }
            bundle.results.push(DocResult { url, content });
        }

        bundle
    }
}
