//! HTTP handle for the hosted service's REST endpoints.
//!
//! A [`HostedClient`] carries exactly one credential. Callers ask for a
//! request builder and never touch the key: the client attaches the
//! `apikey` header and a bearer token itself.

use reqwest::{Method, RequestBuilder};

use crate::config::BackendConfig;
use crate::error::BackendError;

/// Which key a handle authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Anonymous key: sign-in and other browser-equivalent calls.
    Public,
    /// Service-role key: server-side administrative calls.
    Privileged,
}

/// Configured handle to the hosted service.
#[derive(Clone)]
pub struct HostedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    credential: Credential,
}

impl HostedClient {
    /// Handle using the anonymous key.
    pub fn public(config: &BackendConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config, Credential::Public)
    }

    /// Handle using the service-role key.
    pub fn privileged(config: &BackendConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config, Credential::Privileged)
    }

    /// Build a handle reusing an existing [`reqwest::Client`] so both
    /// handles share one connection pool.
    pub fn with_client(http: reqwest::Client, config: &BackendConfig, credential: Credential) -> Self {
        let api_key = match credential {
            Credential::Public => config.anon_key.clone(),
            Credential::Privileged => config.service_role_key.clone(),
        };
        Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key,
            credential,
        }
    }

    pub fn credential(&self) -> Credential {
        self.credential
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path (`path` starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request authenticated with this handle's own key.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Request made on behalf of a signed-in user.
    pub fn request_as(&self, method: Method, path: &str, access_token: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
    }

    // ---- response helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`BackendError::Api`] carrying
    /// the service's message on failure.
    pub async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body, status.as_u16()),
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    pub async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    pub async fn check_status(response: reqwest::Response) -> Result<(), BackendError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error body.
///
/// The service reports errors as JSON under one of several keys depending on
/// the endpoint; plain-text bodies are returned trimmed.
pub fn extract_error_message(body: &str, status: u16) -> String {
    const KEYS: &[&str] = &["msg", "message", "error_description", "error"];

    if let Ok(serde_json::Value::Object(obj)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in KEYS {
            if let Some(serde_json::Value::String(msg)) = obj.get(*key) {
                if !msg.trim().is_empty() {
                    return msg.clone();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Backend service returned status {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig {
            url: "https://svc.example/".into(),
            anon_key: "anon".into(),
            service_role_key: "service".into(),
            jwt_secret: "secret".into(),
            bucket: "website-images".into(),
        }
    }

    #[test]
    fn handles_pick_their_key() {
        let public = HostedClient::public(&config());
        let privileged = HostedClient::privileged(&config());
        assert_eq!(public.credential(), Credential::Public);
        assert_eq!(public.api_key, "anon");
        assert_eq!(privileged.credential(), Credential::Privileged);
        assert_eq!(privileged.api_key, "service");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = HostedClient::public(&config());
        assert_eq!(client.base_url(), "https://svc.example");
        assert_eq!(
            client.url("/auth/v1/logout"),
            "https://svc.example/auth/v1/logout"
        );
    }

    #[test]
    fn message_from_known_json_keys() {
        assert_eq!(
            extract_error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#, 400),
            "Invalid login credentials"
        );
        assert_eq!(
            extract_error_message(r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#, 409),
            "The resource already exists"
        );
        assert_eq!(
            extract_error_message(r#"{"msg":"Token expired"}"#, 401),
            "Token expired"
        );
    }

    #[test]
    fn message_falls_back_to_body_or_status() {
        assert_eq!(extract_error_message("  bad gateway \n", 502), "bad gateway");
        assert_eq!(
            extract_error_message("", 503),
            "Backend service returned status 503"
        );
        assert_eq!(extract_error_message(r#"{"code":1}"#, 500), r#"{"code":1}"#);
    }
}
