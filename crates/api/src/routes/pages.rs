//! Route definitions for HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET /                  marketing page
/// GET /admin             -> /admin/dashboard
/// GET /admin/login       login page
/// GET /admin/dashboard   dashboard (session, else -> /admin/login)
/// GET /admin/images      image management (session, else -> /admin/login)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/admin", get(pages::admin_index))
        .route("/admin/login", get(pages::login))
        .route("/admin/dashboard", get(pages::dashboard))
        .route("/admin/images", get(pages::images))
}
