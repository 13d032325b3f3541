//! Handlers for `/api/admin/images`.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use thinklab_core::gallery::{GalleryFilter, GalleryFilterParams};
use thinklab_core::types::DbId;
use thinklab_db::models::website_image::{UpdateWebsiteImage, WebsiteImage};

use crate::error::{AppError, AppResult};
use crate::middleware::session::RequireSession;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflows::gallery::{self, GalleryView};
use crate::workflows::upload::{self, UploadFile, UploadInput, UploadOutcome};

/// GET /api/admin/images?search=&section=
///
/// The full list is fetched on every call and both predicates are applied
/// together, so the result never depends on which input changed last.
pub async fn list(
    State(state): State<AppState>,
    RequireSession(_session): RequireSession,
    Query(params): Query<GalleryFilterParams>,
) -> AppResult<Json<DataResponse<GalleryView>>> {
    let filter = GalleryFilter::from(params);
    let view = gallery::load(state.images.as_ref(), &filter).await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/admin/images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireSession(_session): RequireSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WebsiteImage>>> {
    let image = gallery::preview(state.images.as_ref(), id).await?;
    Ok(Json(DataResponse { data: image }))
}

/// POST /api/admin/images
///
/// Accepts a multipart form with `file` and `section` (required) and
/// optional `title`, `description`, `alt_text` and `display_order` fields.
pub async fn create(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadOutcome>>)> {
    let mut input = UploadInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                input.file = Some(UploadFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "section" | "title" | "description" | "alt_text" | "display_order" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let slot = match name.as_str() {
                    "section" => &mut input.section,
                    "title" => &mut input.title,
                    "description" => &mut input.description,
                    "alt_text" => &mut input.alt_text,
                    _ => &mut input.display_order,
                };
                *slot = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    tracing::debug!(user_id = %session.user.id, "Processing image upload");
    let outcome =
        upload::upload_image(state.storage.as_ref(), state.images.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// PATCH /api/admin/images/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireSession(_session): RequireSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWebsiteImage>,
) -> AppResult<Json<DataResponse<WebsiteImage>>> {
    let image = gallery::update(state.images.as_ref(), id, input).await?;
    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/admin/images/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireSession(_session): RequireSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    gallery::delete(state.images.as_ref(), state.storage.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
