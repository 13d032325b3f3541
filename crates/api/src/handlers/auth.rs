//! Handlers for the `/api/admin/auth` resource (login, logout, session).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use thinklab_backend::{BackendError, SessionUser};
use thinklab_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::session::{expired_session_cookie, session_cookie, RequireSession};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in user info returned by login and session.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user: SessionUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/auth/login
///
/// Sign in with email + password. On success the access token is stored in
/// the session cookie; the token itself is not returned in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<SessionInfo>>)> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    let session = state
        .auth
        .sign_in(email, &input.password)
        .await
        .map_err(|e| match e {
            // Credential rejections come back as 4xx; show the service's message.
            BackendError::Api { status, message } if (400..500).contains(&status) => {
                AppError::Core(CoreError::Unauthorized(message))
            }
            other => AppError::Backend(other),
        })?;

    tracing::info!(user_id = %session.user.id, "Admin signed in");

    let cookie = session_cookie(session.access_token, state.config.session_cookie_secure);
    Ok((
        jar.add(cookie),
        Json(DataResponse {
            data: SessionInfo { user: session.user },
        }),
    ))
}

/// POST /api/admin/auth/logout
///
/// Revoke the session with the auth service and clear the cookie. A failure
/// from the service is logged; the cookie is cleared regardless.
pub async fn logout(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    jar: CookieJar,
) -> (CookieJar, StatusCode) {
    if let Err(e) = state.auth.sign_out(&session.access_token).await {
        tracing::warn!(user_id = %session.user.id, error = %e, "Sign-out failed at auth service");
    } else {
        tracing::info!(user_id = %session.user.id, "Admin signed out");
    }

    (jar.remove(expired_session_cookie()), StatusCode::NO_CONTENT)
}

/// GET /api/admin/auth/session
pub async fn session(
    RequireSession(session): RequireSession,
) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse {
        data: SessionInfo { user: session.user },
    })
}
