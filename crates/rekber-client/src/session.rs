//! # Session Store
//!
//! The singleton holding the viewer's bearer token and user id. One
//! instance is shared by every client call; the CLI persists it to a JSON
//! file so a login survives across invocations (the browser build kept the
//! same two keys in localStorage).
//!
//! Persistence is best-effort: a missing or corrupt file reads as
//! logged-out, and a failed write is logged and swallowed. Losing a
//! session costs the user a login, not an API call.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use rekber_core::UserId;

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued at login.
    #[serde(rename = "auth_token")]
    pub token: String,
    /// The authenticated user's id.
    #[serde(rename = "auth_user_id")]
    pub user_id: UserId,
}

/// Thread-safe store for the current session, with optional file
/// persistence.
#[derive(Debug)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    file: Option<PathBuf>,
}

impl SessionStore {
    /// An in-memory store with no persistence (tests, one-shot scripts).
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            file: None,
        }
    }

    /// A store backed by a JSON file. Loads the existing session if the
    /// file is present and well-formed; anything else reads as logged-out.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = load_session(&path);
        Self {
            current: RwLock::new(current),
            file: Some(path),
        }
    }

    /// Store a new session, replacing any previous one, and persist it.
    pub fn store(&self, token: impl Into<String>, user_id: UserId) {
        let session = Session {
            token: token.into(),
            user_id,
        };
        *self.current.write() = Some(session.clone());
        if let Some(path) = &self.file {
            persist_session(path, &session);
        }
    }

    /// The current bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// The current user id, if logged in.
    pub fn user_id(&self) -> Option<UserId> {
        self.current.read().as_ref().map(|s| s.user_id.clone())
    }

    /// Whether a session is stored.
    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Drop the session and remove the backing file. Idempotent.
    pub fn clear(&self) {
        *self.current.write() = None;
        if let Some(path) = &self.file {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), "failed to remove session file: {e}");
                }
            }
        }
    }
}

fn load_session(path: &Path) -> Option<Session> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read session file: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring corrupt session file: {e}");
            None
        }
    }
}

fn persist_session(path: &Path, session: &Session) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %path.display(), "failed to create session dir: {e}");
                return;
            }
        }
    }
    match serde_json::to_string_pretty(session) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                tracing::warn!(path = %path.display(), "failed to write session file: {e}");
            }
        }
        Err(e) => {
            tracing::warn!("failed to serialize session: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn in_memory_starts_logged_out() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user_id().is_none());
    }

    #[test]
    fn store_then_read_back() {
        let store = SessionStore::in_memory();
        store.store("tok-abc", user("u-1"));
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-abc"));
        assert_eq!(store.user_id().unwrap().as_str(), "u-1");
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.store("tok", user("u-1"));
        store.clear();
        assert!(!store.is_authenticated());
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn store_replaces_previous_session() {
        let store = SessionStore::in_memory();
        store.store("tok-old", user("u-1"));
        store.store("tok-new", user("u-2"));
        assert_eq!(store.token().as_deref(), Some("tok-new"));
        assert_eq!(store.user_id().unwrap().as_str(), "u-2");
    }

    #[test]
    fn session_serializes_with_storage_keys() {
        let session = Session {
            token: "tok".to_string(),
            user_id: user("u-1"),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("auth_token"));
        assert!(json.contains("auth_user_id"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::with_file(&path);
        assert!(!store.is_authenticated());
        store.store("tok-persisted", user("u-9"));
        assert!(path.exists());

        let reloaded = SessionStore::with_file(&path);
        assert_eq!(reloaded.token().as_deref(), Some("tok-persisted"));
        assert_eq!(reloaded.user_id().unwrap().as_str(), "u-9");
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::with_file(&path);
        store.store("tok", user("u-1"));
        assert!(path.exists());
        store.clear();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SessionStore::with_file(&path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn missing_parent_directories_created_on_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("session.json");
        let store = SessionStore::with_file(&path);
        store.store("tok", user("u-1"));
        assert!(path.exists());
    }
}
