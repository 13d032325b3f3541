//! Client for the hosted backend service.
//!
//! The site delegates three capabilities to an external service:
//!
//! - [`auth`] -- email/password sign-in, sign-out and session lookup.
//! - [`storage`] -- object upload/removal and public URL issuance.
//! - [`images`] -- the `website_images` row store.
//!
//! Each capability is a trait so handlers depend on the port, not on the
//! transport. [`BackendHandles::hosted`] wires the production
//! implementations; the `memory` module (feature `test-utils`) provides
//! in-process fakes.

use std::sync::Arc;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod jwt;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use auth::{AuthProvider, HostedAuth, Session, SessionUser};
pub use client::{Credential, HostedClient};
pub use config::BackendConfig;
pub use error::BackendError;
pub use images::{ImageStore, PgImageStore};
pub use storage::{HostedStorage, ObjectStorage};

/// The three capability handles the application works with.
#[derive(Clone)]
pub struct BackendHandles {
    pub auth: Arc<dyn AuthProvider>,
    pub storage: Arc<dyn ObjectStorage>,
    pub images: Arc<dyn ImageStore>,
}

impl BackendHandles {
    /// Production wiring.
    ///
    /// Authentication goes through the public (anonymous-key) handle; object
    /// storage uses the privileged handle and is only ever called from
    /// server-side handlers; rows go through the database pool.
    pub fn hosted(config: &BackendConfig, pool: thinklab_db::DbPool) -> Self {
        let http = reqwest::Client::new();
        let public = HostedClient::with_client(http.clone(), config, Credential::Public);
        let privileged = HostedClient::with_client(http, config, Credential::Privileged);

        Self {
            auth: Arc::new(HostedAuth::new(public, config.jwt_secret.clone())),
            storage: Arc::new(HostedStorage::new(privileged, config.bucket.clone())),
            images: Arc::new(PgImageStore::new(pool)),
        }
    }
}
