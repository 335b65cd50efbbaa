//! Backend API client error types.

use serde::Deserialize;

/// A parsed non-2xx response body.
///
/// The backend answers errors as JSON in one of two shapes
/// (`{"error": "..."}` or `{"message": "..."}`) and occasionally as plain
/// text. All three are captured here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// The `error` field, when present.
    #[serde(default)]
    pub error: Option<String>,
    /// The `message` field, when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Raw body text, kept when neither JSON field parsed.
    #[serde(skip)]
    pub raw: Option<String>,
}

impl ApiErrorBody {
    /// Parse a response body, falling back to raw text.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(text) {
            Ok(body) if body.error.is_some() || body.message.is_some() => body,
            _ => ApiErrorBody {
                error: None,
                message: None,
                raw: if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                },
            },
        }
    }

    /// The most specific human-readable detail available.
    pub fn detail(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .or(self.raw.as_deref())
            .unwrap_or("(empty body)")
    }

    /// Whether the error text concerns the auth token (used for the
    /// forced-logout rule on 403 responses).
    pub fn mentions_token(&self) -> bool {
        self.detail().to_lowercase().contains("token")
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail())
    }
}

/// Errors from backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint path that was being called.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The backend returned a non-2xx status.
    #[error("backend {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint path that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Parsed error body.
        body: ApiErrorBody,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The endpoint path that was called.
        endpoint: String,
        /// The underlying decode error.
        source: reqwest::Error,
    },

    /// The session token was rejected (401, or 403 about the token). The
    /// stored session has been cleared; the caller must log in again.
    #[error("session expired (HTTP {status}); logged out")]
    SessionExpired {
        /// The status that triggered the forced logout.
        status: u16,
    },

    /// An authenticated endpoint was called with no stored session.
    #[error("not authenticated: no session token stored; log in first")]
    NotAuthenticated,

    /// The request was rejected client-side before any network call.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Which precondition failed.
        reason: String,
    },

    /// The configured base URL is not a usable HTTP(S) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// Description of the problem.
        reason: String,
    },
}
