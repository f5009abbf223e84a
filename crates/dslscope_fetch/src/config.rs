//! Fetch configuration read from the environment.

use std::time::Duration;

use url::Url;

use crate::FetchError;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://mastergo.com";

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const TOKEN_ENV: &str = "MASTERGO_TOKEN";
pub const ENDPOINT_ENV: &str = "MASTERGO_ENDPOINT";
/// Older name of [`ENDPOINT_ENV`], still honored.
pub const API_URL_ENV: &str = "MASTERGO_API_URL";
/// JSON array of extra DSL rules.
pub const RULES_ENV: &str = "RULES";

/// Access settings for the design API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    token: Option<String>,
    endpoint: String,
    timeout: Duration,
    extra_rules: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchConfig {
    /// Creates a configuration without a token, using [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self {
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            extra_rules: None,
        }
    }

    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup(ENDPOINT_ENV)
            .or_else(|| lookup(API_URL_ENV))
            .map(|raw| normalize_endpoint(&raw))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            token: lookup(TOKEN_ENV).filter(|token| !token.is_empty()),
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            extra_rules: lookup(RULES_ENV),
        }
    }

    /// Overrides the access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|token| !token.is_empty());
        self
    }

    /// Overrides the endpoint. Anything past scheme, host and port is dropped.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = normalize_endpoint(endpoint);
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the raw extra rules (a JSON array).
    pub fn with_extra_rules(mut self, rules: impl Into<String>) -> Self {
        self.extra_rules = Some(rules.into());
        self
    }

    /// Returns the token, or [`FetchError::MissingToken`].
    pub fn token(&self) -> Result<&str, FetchError> {
        self.token.as_deref().ok_or(FetchError::MissingToken)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn extra_rules(&self) -> Option<&str> {
        self.extra_rules.as_deref()
    }
}

/// Reduces `raw` to `scheme://host[:port]`.
///
/// Falls back to [`DEFAULT_ENDPOINT`] when `raw` has no host.
pub fn normalize_endpoint(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(url) if url.host_str().is_some() => url.origin().ascii_serialization(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
