//! # Client Plumbing
//!
//! [`ApiClient`] construction and the request/response helpers shared by
//! every endpoint family. Endpoint methods themselves live in the
//! per-family modules ([`auth`](crate::auth), [`escrow`](crate::escrow),
//! [`dispute`](crate::dispute), [`kyc`](crate::kyc),
//! [`admin`](crate::admin)).

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiErrorBody, ClientError};
use crate::session::SessionStore;

/// Typed client for the rekber backend API.
///
/// Cheap to clone-by-`Arc` and safe to share across tasks; all state is the
/// connection pool and the shared [`SessionStore`].
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Build a client from configuration and a shared session store.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidBaseUrl`] if the base URL does not parse as an
    /// absolute `http`/`https` URL, or if the underlying HTTP client cannot
    /// be built from the configuration.
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Result<Self, ClientError> {
        let parsed = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The configured base URL (trailing slash trimmed).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// A GET request builder for an endpoint path.
    pub(crate) fn get(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(endpoint))
    }

    /// A POST request builder for an endpoint path.
    pub(crate) fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(endpoint))
    }

    /// Attach the stored bearer token to a request.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotAuthenticated`] if no session is stored.
    pub(crate) fn authed(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }

    /// Send a request and decode the 2xx response body as `T`.
    ///
    /// `authenticated` selects the forced-logout triage: on an
    /// authenticated call, a 401 (or a 403 whose body message concerns the
    /// token) clears the session store and maps to
    /// [`ClientError::SessionExpired`]. Unauthenticated calls (login,
    /// register) never touch the session on failure.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
        authenticated: bool,
    ) -> Result<T, ClientError> {
        tracing::debug!(endpoint, "calling backend");
        let response = request.send().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Deserialization {
                    endpoint: endpoint.to_string(),
                    source: e,
                });
        }

        let text = response.text().await.unwrap_or_default();
        let body = ApiErrorBody::parse(&text);
        tracing::debug!(endpoint, status = status.as_u16(), detail = body.detail(), "backend error");

        if authenticated && forces_logout(status.as_u16(), &body) {
            tracing::warn!(endpoint, status = status.as_u16(), "token rejected; clearing session");
            self.session.clear();
            return Err(ClientError::SessionExpired {
                status: status.as_u16(),
            });
        }

        Err(ClientError::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

/// The forced-logout rule: 401 always; 403 only when the error text
/// concerns the token (a plain 403 is an authorization failure for a valid
/// session and must not log the viewer out).
fn forces_logout(status: u16, body: &ApiErrorBody) -> bool {
    status == 401 || (status == 403 && body.mentions_token())
}
