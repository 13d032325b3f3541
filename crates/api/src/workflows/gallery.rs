//! Admin gallery: filtered listing, preview, edit and delete.

use serde::Serialize;
use thinklab_backend::{ImageStore, ObjectStorage};
use thinklab_core::error::CoreError;
use thinklab_core::gallery::{filter_images, GalleryFilter};
use thinklab_core::sections::{distinct_sections, section_options};
use thinklab_core::types::DbId;
use thinklab_core::upload::{storage_path_from_url, validate_section, MSG_MISSING_TITLE};
use thinklab_db::models::website_image::{UpdateWebsiteImage, WebsiteImage};

use crate::error::{AppError, AppResult};

const ENTITY: &str = "WebsiteImage";

/// What the gallery tab renders.
#[derive(Debug, Serialize)]
pub struct GalleryView {
    /// Rows passing the current filter, in admin order.
    pub images: Vec<WebsiteImage>,
    /// Size of the unfiltered list.
    pub total: usize,
    /// Sections present in the unfiltered list (filter dropdown).
    pub sections: Vec<String>,
    /// Sections offered by the upload form.
    pub section_options: Vec<String>,
}

/// Fetch the full list and apply `filter` to it.
///
/// The metadata always describes the unfiltered list so the dropdowns do not
/// shrink as the user narrows the view.
pub async fn load(images: &dyn ImageStore, filter: &GalleryFilter) -> AppResult<GalleryView> {
    let all = images.list_all().await?;
    let sections = distinct_sections(all.iter().map(|i| i.section.as_str()));
    let options = section_options(&sections);

    Ok(GalleryView {
        images: filter_images(&all, filter),
        total: all.len(),
        sections,
        section_options: options,
    })
}

/// One record for the preview dialog.
pub async fn preview(images: &dyn ImageStore, id: DbId) -> AppResult<WebsiteImage> {
    images
        .find(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

/// Delete an image: object first, then row.
///
/// Nothing is rolled back. A storage failure leaves the row in place; a row
/// failure after the object is gone leaves a row pointing at nothing. Both
/// surface to the caller.
pub async fn delete(
    images: &dyn ImageStore,
    storage: &dyn ObjectStorage,
    id: DbId,
) -> AppResult<()> {
    let image = preview(images, id).await?;

    match storage_path_from_url(&image.image_url) {
        Some(path) => {
            storage.remove(std::slice::from_ref(&path)).await?;
            tracing::debug!(image_id = %id, path = %path, "Image object removed");
        }
        None => {
            tracing::warn!(image_id = %id, url = %image.image_url, "No storage path in image URL; skipping object removal");
        }
    }

    if !images.delete(id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(image_id = %id, section = %image.section, "Image deleted");
    Ok(())
}

/// Edit the mutable fields of a record.
pub async fn update(
    images: &dyn ImageStore,
    id: DbId,
    mut input: UpdateWebsiteImage,
) -> AppResult<WebsiteImage> {
    normalize_update(&mut input)?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let image = images
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(image_id = %id, section = %image.section, "Image updated");
    Ok(image)
}

/// Trim text fields and reject blanks where a value is required.
fn normalize_update(input: &mut UpdateWebsiteImage) -> Result<(), CoreError> {
    if let Some(title) = input.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Validation(MSG_MISSING_TITLE.into()));
        }
    }
    if let Some(section) = input.section.as_mut() {
        validate_section(section)?;
        *section = section.trim().to_string();
    }
    if let Some(alt_text) = input.alt_text.as_mut() {
        *alt_text = alt_text.trim().to_string();
        if alt_text.is_empty() {
            return Err(CoreError::Validation("Alt text cannot be empty".into()));
        }
    }
    if let Some(description) = input.description.as_mut() {
        *description = description.trim().to_string();
    }
    Ok(())
}
