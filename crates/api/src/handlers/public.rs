//! Public read API consumed by the marketing page.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PublicImagesQuery {
    pub section: Option<String>,
}

/// GET /api/images?section=
///
/// Active images ordered by display order, optionally limited to one
/// section. Responds `{ "images": [...] }`, or `{ "error": message }` with
/// status 500 when the row store fails.
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<PublicImagesQuery>,
) -> Response {
    let section = query
        .section
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match state.images.list_active(section).await {
        Ok(images) => Json(json!({ "images": images })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, section = ?section, "Public image listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
