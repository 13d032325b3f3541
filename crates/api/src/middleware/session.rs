//! Session resolution for admin requests.
//!
//! The access token issued at sign-in travels in the `tl_session` cookie
//! (browser) or an `Authorization: Bearer` header (API clients). Each
//! request resolves it against the auth provider and hands the result to
//! the handler as an explicit [`AdminSession`]; nothing is cached between
//! requests.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use thinklab_backend::SessionUser;
use thinklab_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the access token.
pub const SESSION_COOKIE: &str = "tl_session";

/// Where unauthenticated page requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// A resolved admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: SessionUser,
    pub access_token: String,
}

/// Pull the access token from the session cookie, falling back to a bearer
/// header.
pub fn access_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Resolve the request's session. `Ok(None)` means "not signed in".
async fn resolve(parts: &Parts, state: &AppState) -> Result<Option<AdminSession>, AppError> {
    let Some(token) = access_token(parts) else {
        return Ok(None);
    };

    let user = state.auth.get_session(&token).await?;
    Ok(user.map(|user| AdminSession {
        user,
        access_token: token,
    }))
}

/// Session cookie set at sign-in.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Cookie matching [`session_cookie`]'s path, for removal.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

// ---------------------------------------------------------------------------
// API gate
// ---------------------------------------------------------------------------

/// Requires a valid session for an admin API call.
///
/// ```ignore
/// async fn my_handler(RequireSession(session): RequireSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %session.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireSession(pub AdminSession);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await?.map(RequireSession).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Sign in to access the admin area".into(),
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Page gate
// ---------------------------------------------------------------------------

/// Requires a valid session to render an admin page.
///
/// Without one the request is answered with `303 See Other` to
/// [`LOGIN_PATH`] before the handler runs. A failing auth provider is
/// treated the same as a missing session.
#[derive(Debug, Clone)]
pub struct PageSession(pub AdminSession);

impl FromRequestParts<AppState> for PageSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve(parts, state).await {
            Ok(Some(session)) => Ok(PageSession(session)),
            Ok(None) => Err(Redirect::to(LOGIN_PATH)),
            Err(e) => {
                tracing::warn!(error = %e, path = %parts.uri.path(), "Session lookup failed");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}
