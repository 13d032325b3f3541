pub mod admin;
pub mod health;
pub mod pages;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /images                         public read (GET, ?section=)
///
/// /admin/auth/login               sign in (POST)
/// /admin/auth/logout              sign out (POST, session)
/// /admin/auth/session             current session (GET, session)
///
/// /admin/dashboard                dashboard summary (GET, session)
///
/// /admin/images                   list (?search, section), upload (multipart)
/// /admin/images/{id}              get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
