//! Website image model and DTOs.
//!
//! One row per image shown on the site. `section` groups images by the page
//! area they belong to; `display_order` sorts them within the public read
//! path; `is_active` hides a row from public reads without deleting it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thinklab_core::gallery::GalleryEntry;
use thinklab_core::types::{DbId, Timestamp};

/// A row from the `website_images` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct WebsiteImage {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub section: String,
    pub image_url: String,
    pub alt_text: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new image row. Defaults are resolved by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebsiteImage {
    pub title: String,
    pub description: Option<String>,
    pub section: String,
    pub image_url: String,
    pub alt_text: String,
    pub display_order: i32,
    pub is_active: bool,
}

/// DTO for updating an image row. Only non-`None` fields are applied;
/// `image_url` is fixed at upload time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWebsiteImage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub section: Option<String>,
    pub alt_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateWebsiteImage {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.section.is_none()
            && self.alt_text.is_none()
            && self.display_order.is_none()
            && self.is_active.is_none()
    }
}

impl GalleryEntry for WebsiteImage {
    fn section(&self) -> &str {
        &self.section
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn alt_text(&self) -> &str {
        &self.alt_text
    }
}
