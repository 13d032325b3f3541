//! Admin dashboard summary.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::session::RequireSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// One card on the dashboard.
#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    /// Badge count, shown only for cards that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Whether `href` is served by this server.
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub image_count: i64,
    pub menu: Vec<MenuItem>,
}

/// The dashboard cards. Only image management is served; the others link to
/// pages that do not exist yet.
pub fn menu(image_count: i64) -> Vec<MenuItem> {
    vec![
        MenuItem {
            title: "Manage Images",
            description: "Upload, edit, and organize website images",
            href: "/admin/images",
            count: Some(image_count),
            available: true,
        },
        MenuItem {
            title: "Website Sections",
            description: "Configure website sections and content",
            href: "/admin/sections",
            count: None,
            available: false,
        },
        MenuItem {
            title: "User Management",
            description: "Manage admin users and permissions",
            href: "/admin/users",
            count: None,
            available: false,
        },
        MenuItem {
            title: "Settings",
            description: "Configure website settings and preferences",
            href: "/admin/settings",
            count: None,
            available: false,
        },
    ]
}

/// GET /api/admin/dashboard
pub async fn summary(
    State(state): State<AppState>,
    RequireSession(_session): RequireSession,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let image_count = state.images.count().await?;
    Ok(Json(DataResponse {
        data: DashboardSummary {
            image_count,
            menu: menu(image_count),
        },
    }))
}
