//! Error types for fetch operations.

use std::fmt;

use thiserror::Error;

/// Classification of a failed design API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    TokenInvalid,
    PermissionDenied,
    NotFound,
    Timeout,
    Unknown,
}

impl ApiErrorCode {
    /// Maps an HTTP status to an error code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorCode::TokenInvalid,
            403 => ApiErrorCode::PermissionDenied,
            404 => ApiErrorCode::NotFound,
            408 | 504 => ApiErrorCode::Timeout,
            _ => ApiErrorCode::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::TokenInvalid => "TOKEN_INVALID",
            ApiErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ApiErrorCode::NotFound => "NOT_FOUND",
            ApiErrorCode::Timeout => "TIMEOUT",
            ApiErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiErrorCode::TokenInvalid => "Token is invalid or expired",
            ApiErrorCode::PermissionDenied => "No permission to access this file",
            ApiErrorCode::NotFound => "File or layer does not exist",
            ApiErrorCode::Timeout => "Request timed out",
            ApiErrorCode::Unknown => "Unexpected API response",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            ApiErrorCode::TokenInvalid => {
                "Regenerate the token under personal settings > security settings"
            }
            ApiErrorCode::PermissionDenied => {
                "Check that the account is on a team plan and the file is in a team project"
            }
            ApiErrorCode::NotFound => "Check that the link is correct",
            ApiErrorCode::Timeout => "Check the network connection and retry later",
            ApiErrorCode::Unknown => "Retry later or contact support",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No access token was configured.
    #[error("MASTERGO_TOKEN is not set")]
    MissingToken,

    /// URL does not name a file and layer.
    #[error("Invalid design URL: {0}")]
    InvalidUrl(String),

    /// Short link could not be resolved.
    #[error("Failed to resolve short link: {0}")]
    ShortLink(String),

    /// Design API answered with an error status.
    #[error("API request failed: HTTP {status} {code}: {}", code.message())]
    Api {
        status: u16,
        code: ApiErrorCode,
        body: String,
    },

    /// Network request failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Non-API resource answered with an error status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },
}

impl FetchError {
    /// Creates an API error from a status and response body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: ApiErrorCode::from_status(status),
            body: body.into(),
        }
    }

    /// A hint on how to fix the error, when one is known.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            FetchError::MissingToken => {
                Some("Set the environment variable: export MASTERGO_TOKEN=\"your_token\"")
            }
            FetchError::InvalidUrl(_) => {
                Some("Use the format https://mastergo.com/file/{fileId}?layer_id={layerId}")
            }
            FetchError::ShortLink(_) => Some("Use the full link instead"),
            FetchError::Api { code, .. } => Some(code.suggestion()),
            FetchError::Network(_) => Some("Check the network connection and the API endpoint"),
            FetchError::InvalidJson(_) | FetchError::HttpStatus { .. } => None,
        }
    }
}
