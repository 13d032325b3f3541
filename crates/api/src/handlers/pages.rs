//! HTML page handlers.

use axum::response::{Html, Redirect};

use crate::middleware::session::PageSession;
use crate::pages;

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(pages::HOME_HTML)
}

/// GET /admin
pub async fn admin_index() -> Redirect {
    Redirect::to("/admin/dashboard")
}

/// GET /admin/login
pub async fn login() -> Html<&'static str> {
    Html(pages::LOGIN_HTML)
}

/// GET /admin/dashboard
pub async fn dashboard(PageSession(_session): PageSession) -> Html<&'static str> {
    Html(pages::DASHBOARD_HTML)
}

/// GET /admin/images
pub async fn images(PageSession(_session): PageSession) -> Html<String> {
    Html(pages::images_page())
}
