//! # rekber-client
//!
//! Typed async HTTP client for the rekber backend API. The backend owns all
//! business logic (escrow state transitions, payment settlement, dispute
//! adjudication, KYC review); this crate merely calls it over HTTP and
//! maps its responses into the `rekber-escrow` domain types.
//!
//! ## Behavior contract
//!
//! - Bearer authentication: the token persisted by [`SessionStore`] is
//!   attached to every authenticated request.
//! - Each operation is a single request-response exchange. Nothing is
//!   retried automatically; transient failures surface as
//!   [`ClientError::Http`] for the caller to handle.
//! - A failed call never mutates client-side state. The one exception is
//!   deliberate: a `401` (or a `403` whose message concerns the token)
//!   clears the session under the forced-logout rule and surfaces as
//!   [`ClientError::SessionExpired`].
//! - After a mutating escrow call, re-fetch the escrow for its
//!   authoritative status; the client never fabricates one.

pub mod admin;
pub mod auth;
pub mod client;
pub mod config;
pub mod dispute;
pub mod error;
pub mod escrow;
pub mod kyc;
pub mod session;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiErrorBody, ClientError};
pub use session::{Session, SessionStore};
