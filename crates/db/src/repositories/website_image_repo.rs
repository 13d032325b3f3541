//! Repository for the `website_images` table.

use sqlx::PgPool;
use thinklab_core::types::DbId;

use crate::models::website_image::{CreateWebsiteImage, UpdateWebsiteImage, WebsiteImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, section, image_url, alt_text, \
                       display_order, is_active, created_at, updated_at";

/// Provides CRUD operations for website images.
pub struct WebsiteImageRepo;

impl WebsiteImageRepo {
    /// Insert a new image row, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWebsiteImage,
    ) -> Result<WebsiteImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO website_images \
                (title, description, section, image_url, alt_text, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebsiteImage>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.section)
            .bind(&input.image_url)
            .bind(&input.alt_text)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an image by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WebsiteImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM website_images WHERE id = $1");
        sqlx::query_as::<_, WebsiteImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every image regardless of the active flag.
    ///
    /// Ordered by section, then display order, then creation time.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<WebsiteImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM website_images \
             ORDER BY section, display_order, created_at"
        );
        sqlx::query_as::<_, WebsiteImage>(&query)
            .fetch_all(pool)
            .await
    }

    /// List active images, optionally restricted to one section.
    ///
    /// Ordered by display order ascending; ties keep creation order.
    pub async fn list_active(
        pool: &PgPool,
        section: Option<&str>,
    ) -> Result<Vec<WebsiteImage>, sqlx::Error> {
        match section {
            Some(section) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM website_images \
                     WHERE is_active = true AND section = $1 \
                     ORDER BY display_order, created_at"
                );
                sqlx::query_as::<_, WebsiteImage>(&query)
                    .bind(section)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM website_images \
                     WHERE is_active = true \
                     ORDER BY display_order, created_at"
                );
                sqlx::query_as::<_, WebsiteImage>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Total number of image rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM website_images")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update an image. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWebsiteImage,
    ) -> Result<Option<WebsiteImage>, sqlx::Error> {
        let query = format!(
            "UPDATE website_images SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                section = COALESCE($4, section), \
                alt_text = COALESCE($5, alt_text), \
                display_order = COALESCE($6, display_order), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebsiteImage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.section)
            .bind(&input.alt_text)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an image row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM website_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
