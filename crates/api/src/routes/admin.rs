//! Route definitions for the admin API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, dashboard, images};
use crate::state::AppState;

/// Routes mounted at `/api/admin`.
///
/// ```text
/// POST   /auth/login     -> login
/// POST   /auth/logout    -> logout
/// GET    /auth/session   -> session
/// GET    /dashboard      -> summary
/// GET    /images         -> list
/// POST   /images         -> create
/// GET    /images/{id}    -> get_by_id
/// PATCH  /images/{id}    -> update
/// DELETE /images/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session))
        .route("/dashboard", get(dashboard::summary))
        .route("/images", get(images::list).post(images::create))
        .route(
            "/images/{id}",
            get(images::get_by_id)
                .patch(images::update)
                .delete(images::delete),
        )
}
