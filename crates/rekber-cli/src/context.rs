//! Shared handler context: the configured client and output mode.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;

use rekber_client::{ApiClient, ApiConfig, SessionStore};

/// Default backend when neither `--api-url` nor `REKBER_API_URL` is set
/// (the local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Everything a subcommand handler needs.
pub struct CliContext {
    /// The configured backend client.
    pub client: ApiClient,
    /// Emit raw JSON instead of human-readable lines.
    pub json: bool,
}

impl CliContext {
    /// Build the context from the global CLI options.
    pub fn new(api_url: &str, session_file: Option<PathBuf>, json: bool) -> anyhow::Result<Self> {
        let session_path = match session_file {
            Some(path) => path,
            None => default_session_path(),
        };
        tracing::debug!(api_url, session = %session_path.display(), "configuring client");

        let session = Arc::new(SessionStore::with_file(session_path));
        let client = ApiClient::new(ApiConfig::new(api_url), session)
            .with_context(|| format!("cannot configure backend client for '{api_url}'"))?;
        Ok(Self { client, json })
    }
}

/// Where the session is persisted when `--session` is not given:
/// `$REKBER_SESSION_FILE`, else `$HOME/.rekber/session.json`, else a
/// `.rekber/session.json` beside the working directory.
pub fn default_session_path() -> PathBuf {
    if let Some(path) = std::env::var_os("REKBER_SESSION_FILE") {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".rekber").join("session.json"),
        None => PathBuf::from(".rekber").join("session.json"),
    }
}
