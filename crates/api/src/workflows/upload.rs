//! Image upload: store the object, then record its row.

use serde::Serialize;
use thinklab_backend::{ImageStore, ObjectStorage};
use thinklab_core::error::CoreError;
use thinklab_core::upload::{
    generate_storage_path, title_from_file_name, validate_upload, MSG_MISSING_TITLE, MSG_UPLOADED,
};
use thinklab_db::models::website_image::{CreateWebsiteImage, WebsiteImage};

use crate::error::{AppError, AppResult};

/// Fallback content type when the browser sends none.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The uploaded file part.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Raw form input, as collected from the multipart body.
#[derive(Debug, Clone, Default)]
pub struct UploadInput {
    pub file: Option<UploadFile>,
    pub section: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub alt_text: Option<String>,
    pub display_order: Option<String>,
}

/// Result of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub image: WebsiteImage,
    pub message: &'static str,
}

/// Trim and drop blank values.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the optional display order. Blank means 0.
fn parse_display_order(raw: Option<&str>) -> Result<i32, CoreError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(0),
        Some(s) => s
            .parse()
            .map_err(|_| CoreError::Validation("Display order must be a whole number".into())),
    }
}

/// Run the upload workflow.
///
/// Validation happens before any external call. When the row insert fails
/// after the object was stored, the object is removed again (best effort)
/// and the insert error is returned.
pub async fn upload_image(
    storage: &dyn ObjectStorage,
    images: &dyn ImageStore,
    input: UploadInput,
) -> AppResult<UploadOutcome> {
    // A file input left empty still submits a nameless, empty part.
    let file = input
        .file
        .filter(|f| !(f.file_name.is_empty() && f.bytes.is_empty()));
    validate_upload(file.is_some(), input.section.as_deref())?;

    let (Some(file), Some(section)) = (file, non_blank(input.section)) else {
        return Err(AppError::InternalError("upload input changed after validation".into()));
    };

    let title = non_blank(input.title)
        .or_else(|| non_blank(Some(title_from_file_name(&file.file_name))))
        .ok_or_else(|| CoreError::Validation(MSG_MISSING_TITLE.into()))?;
    let display_order = parse_display_order(input.display_order.as_deref())?;
    let alt_text = non_blank(input.alt_text).unwrap_or_else(|| title.clone());
    let description = non_blank(input.description);

    let path = generate_storage_path(&section, &file.file_name);
    let content_type = file
        .content_type
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    storage.upload(&path, file.bytes, &content_type).await?;
    tracing::debug!(path = %path, section = %section, "Image object stored");

    let image_url = storage.public_url(&path);
    let row = CreateWebsiteImage {
        title,
        description,
        section,
        image_url,
        alt_text,
        display_order,
        is_active: true,
    };

    match images.insert(&row).await {
        Ok(image) => {
            tracing::info!(image_id = %image.id, section = %image.section, path = %path, "Image uploaded");
            Ok(UploadOutcome {
                image,
                message: MSG_UPLOADED,
            })
        }
        Err(insert_err) => {
            if let Err(remove_err) = storage.remove(std::slice::from_ref(&path)).await {
                tracing::warn!(
                    path = %path,
                    error = %remove_err,
                    "Failed to remove orphaned object after row insert failure",
                );
            } else {
                tracing::warn!(path = %path, "Removed object after row insert failure");
            }
            Err(insert_err.into())
        }
    }
}
