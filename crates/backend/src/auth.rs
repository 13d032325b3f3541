//! Authentication port and the hosted implementation.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::HostedClient;
use crate::error::BackendError;
use crate::jwt::validate_access_token;

/// Identity attached to a valid session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens returned by a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    pub user: SessionUser,
}

/// Email/password authentication owned by the hosted service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;

    /// Resolve the user behind `access_token`, or `None` when the token is
    /// not a live session.
    async fn get_session(&self, access_token: &str) -> Result<Option<SessionUser>, BackendError>;
}

/// [`AuthProvider`] backed by the hosted service's auth endpoints.
pub struct HostedAuth {
    client: HostedClient,
    jwt_secret: String,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl HostedAuth {
    /// `client` should be the public handle.
    pub fn new(client: HostedClient, jwt_secret: String) -> Self {
        Self { client, jwt_secret }
    }
}

#[async_trait]
impl AuthProvider for HostedAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        HostedClient::parse_response(response).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .request_as(Method::POST, "/auth/v1/logout", access_token)
            .send()
            .await?;

        HostedClient::check_status(response).await
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<SessionUser>, BackendError> {
        // Signature and expiry are checked locally so junk never leaves the process.
        if let Err(e) = validate_access_token(access_token, &self.jwt_secret) {
            tracing::debug!(error = %e, "Rejected access token");
            return Ok(None);
        }

        // A well-formed token may still belong to a revoked session.
        let response = self
            .client
            .request_as(Method::GET, "/auth/v1/user", access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!(status = status.as_u16(), "Session no longer live");
            return Ok(None);
        }

        let user: SessionUser = HostedClient::parse_response(response).await?;
        Ok(Some(user))
    }
}
