//! # Authentication Endpoints
//!
//! Login and registration. Both are unauthenticated calls that, on
//! success, persist the returned bearer token and user id into the shared
//! session store; every other endpoint family then authenticates from it.

use serde::{Deserialize, Serialize};

use rekber_core::{Role, User, UserId};

use crate::client::ApiClient;
use crate::error::ClientError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

/// The backend's auth response: a user record with the issued token inline.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The authenticated account id.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: Role,
    /// Issued bearer token.
    pub token: String,
}

impl AuthResponse {
    /// The account as a domain [`User`].
    pub fn user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

impl ApiClient {
    /// `POST /auth/login`: authenticate and persist the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let endpoint = "/auth/login";
        let request = self.post(endpoint).json(&LoginRequest { email, password });
        let auth: AuthResponse = self.execute(request, endpoint, false).await?;
        self.session().store(auth.token.clone(), auth.id.clone());
        tracing::info!(user = %auth.id, role = %auth.role, "logged in");
        Ok(auth.user())
    }

    /// `POST /auth/register`: create an account and persist the session.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidRequest`] for roles that cannot self-register
    /// (admin accounts are provisioned server-side).
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, ClientError> {
        if !role.self_registerable() {
            return Err(ClientError::InvalidRequest {
                reason: format!("role '{role}' cannot self-register"),
            });
        }
        let endpoint = "/auth/register";
        let request = self.post(endpoint).json(&RegisterRequest {
            email,
            password,
            role,
        });
        let auth: AuthResponse = self.execute(request, endpoint, false).await?;
        self.session().store(auth.token.clone(), auth.id.clone());
        tracing::info!(user = %auth.id, role = %auth.role, "registered");
        Ok(auth.user())
    }

    /// Drop the stored session. Purely local: the backend keeps no
    /// server-side session to invalidate.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("logged out");
    }
}
