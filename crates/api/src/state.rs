use std::sync::Arc;

use thinklab_backend::{AuthProvider, BackendHandles, ImageStore, ObjectStorage};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`. Handlers depend on the
/// capability traits, never on a concrete backend.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sign-in, sign-out and session lookup.
    pub auth: Arc<dyn AuthProvider>,
    /// Image object storage.
    pub storage: Arc<dyn ObjectStorage>,
    /// `website_images` row store.
    pub images: Arc<dyn ImageStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, backend: BackendHandles) -> Self {
        Self {
            config: Arc::new(config),
            auth: backend.auth,
            storage: backend.storage,
            images: backend.images,
        }
    }
}
