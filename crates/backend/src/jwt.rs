//! Access-token validation.
//!
//! The hosted auth service issues HS256-signed JWTs. The server verifies
//! them locally with the service's signing secret instead of calling the
//! service on every request. [`issue_access_token`] produces tokens with the
//! same shape for the in-process fakes and tests.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims the server reads from an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Subject -- the auth service's user id.
    pub sub: String,
    /// Email address the user signed in with.
    #[serde(default)]
    pub email: Option<String>,
    /// Role granted by the service (e.g. `"authenticated"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Validate and decode an access token, returning its [`AccessClaims`].
///
/// Validates the signature and expiration. The audience claim is not
/// checked.
pub fn validate_access_token(
    token: &str,
    secret: &str,
) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let token_data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Sign an access token for `user_id` valid for `ttl_secs` seconds.
pub fn issue_access_token(
    user_id: &str,
    email: Option<&str>,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        role: Some("authenticated".to_string()),
        exp: now + ttl_secs,
        iat: Some(now),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
