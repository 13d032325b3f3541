//! Row store port for `website_images`.

use async_trait::async_trait;
use thinklab_core::types::DbId;
use thinklab_db::models::website_image::{CreateWebsiteImage, UpdateWebsiteImage, WebsiteImage};
use thinklab_db::repositories::WebsiteImageRepo;
use thinklab_db::DbPool;

use crate::error::BackendError;

/// Persistence for image rows.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Every row, ordered by section, display order, then creation time.
    async fn list_all(&self) -> Result<Vec<WebsiteImage>, BackendError>;

    /// Active rows, optionally limited to one section, ordered by display
    /// order then creation time.
    async fn list_active(&self, section: Option<&str>) -> Result<Vec<WebsiteImage>, BackendError>;

    async fn find(&self, id: DbId) -> Result<Option<WebsiteImage>, BackendError>;

    async fn insert(&self, input: &CreateWebsiteImage) -> Result<WebsiteImage, BackendError>;

    /// Apply a partial update. `None` when the row does not exist.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateWebsiteImage,
    ) -> Result<Option<WebsiteImage>, BackendError>;

    /// Delete a row. `true` when a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, BackendError>;

    async fn count(&self) -> Result<i64, BackendError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), BackendError>;
}

/// [`ImageStore`] over the PostgreSQL pool.
pub struct PgImageStore {
    pool: DbPool,
}

impl PgImageStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for PgImageStore {
    async fn list_all(&self) -> Result<Vec<WebsiteImage>, BackendError> {
        Ok(WebsiteImageRepo::list_all(&self.pool).await?)
    }

    async fn list_active(&self, section: Option<&str>) -> Result<Vec<WebsiteImage>, BackendError> {
        Ok(WebsiteImageRepo::list_active(&self.pool, section).await?)
    }

    async fn find(&self, id: DbId) -> Result<Option<WebsiteImage>, BackendError> {
        Ok(WebsiteImageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, input: &CreateWebsiteImage) -> Result<WebsiteImage, BackendError> {
        Ok(WebsiteImageRepo::create(&self.pool, input).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateWebsiteImage,
    ) -> Result<Option<WebsiteImage>, BackendError> {
        Ok(WebsiteImageRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, BackendError> {
        Ok(WebsiteImageRepo::delete(&self.pool, id).await?)
    }

    async fn count(&self) -> Result<i64, BackendError> {
        Ok(WebsiteImageRepo::count(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), BackendError> {
        Ok(thinklab_db::health_check(&self.pool).await?)
    }
}
