//! In-process fakes for the three backend capabilities.
//!
//! Each fake records how often it was called and can be told to fail, so
//! tests can drive the partial-failure paths of the upload and delete
//! workflows without a network or database.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use thinklab_core::types::DbId;
use thinklab_db::models::website_image::{CreateWebsiteImage, UpdateWebsiteImage, WebsiteImage};

use crate::auth::{AuthProvider, Session, SessionUser};
use crate::error::BackendError;
use crate::images::ImageStore;
use crate::jwt::{issue_access_token, validate_access_token};
use crate::storage::{public_object_url, ObjectStorage};
use crate::BackendHandles;

/// Base URL the fake storage issues public URLs under.
pub const MEMORY_STORAGE_URL: &str = "http://storage.test";

/// Bucket name the fake storage uses.
pub const MEMORY_BUCKET: &str = "website-images";

/// Signing secret of [`MemoryAuth`] tokens.
pub const MEMORY_JWT_SECRET: &str = "memory-auth-secret";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn injected(what: &str) -> BackendError {
    BackendError::Unavailable(format!("{what} failed (injected)"))
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

struct Account {
    id: String,
    password: String,
}

/// [`AuthProvider`] with a fixed set of accounts.
///
/// Tokens are real HS256 JWTs signed with [`MEMORY_JWT_SECRET`]; signing out
/// revokes the token.
#[derive(Default)]
pub struct MemoryAuth {
    accounts: Mutex<HashMap<String, Account>>,
    revoked: Mutex<HashSet<String>>,
    pub sign_in_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub fail_sign_out: AtomicBool,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and return its user id.
    pub fn add_account(&self, email: &str, password: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        lock(&self.accounts).insert(
            email.to_string(),
            Account {
                id: id.clone(),
                password: password.to_string(),
            },
        );
        id
    }

    /// Sign in and return the access token, bypassing the call counter.
    pub fn token_for(&self, email: &str) -> Option<String> {
        let accounts = lock(&self.accounts);
        let account = accounts.get(email)?;
        issue_access_token(&account.id, Some(email), MEMORY_JWT_SECRET, 3600).ok()
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        lock(&self.revoked).contains(token)
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);

        let user_id = {
            let accounts = lock(&self.accounts);
            match accounts.get(email) {
                Some(account) if account.password == password => account.id.clone(),
                _ => {
                    return Err(BackendError::Api {
                        status: 400,
                        message: "Invalid login credentials".into(),
                    })
                }
            }
        };

        let access_token = issue_access_token(&user_id, Some(email), MEMORY_JWT_SECRET, 3600)
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        Ok(Session {
            access_token,
            refresh_token: None,
            expires_in: 3600,
            user: SessionUser {
                id: user_id,
                email: Some(email.to_string()),
            },
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(injected("sign-out"));
        }
        lock(&self.revoked).insert(access_token.to_string());
        Ok(())
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<SessionUser>, BackendError> {
        if self.is_revoked(access_token) {
            return Ok(None);
        }
        Ok(validate_access_token(access_token, MEMORY_JWT_SECRET)
            .ok()
            .map(|claims| SessionUser {
                id: claims.sub,
                email: claims.email,
            }))
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// A stored object.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// [`ObjectStorage`] over a map of path to bytes.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    removed: Mutex<Vec<String>>,
    pub upload_calls: AtomicUsize,
    pub remove_calls: AtomicUsize,
    pub fail_upload: AtomicBool,
    pub fail_remove: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        lock(&self.objects).contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<StoredObject> {
        lock(&self.objects).get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = lock(&self.objects).keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Every path passed to `remove`, in call order.
    pub fn removed(&self) -> Vec<String> {
        lock(&self.removed).clone()
    }

    /// Place an object directly, bypassing counters and fault flags.
    pub fn seed(&self, path: &str, bytes: &[u8]) {
        lock(&self.objects).insert(
            path.to_string(),
            StoredObject {
                bytes: bytes.to_vec(),
                content_type: "application/octet-stream".into(),
            },
        );
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BackendError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(injected("upload"));
        }

        let mut objects = lock(&self.objects);
        if objects.contains_key(path) {
            return Err(BackendError::Api {
                status: 409,
                message: "The resource already exists".into(),
            });
        }
        objects.insert(
            path.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn remove(&self, paths: &[String]) -> Result<(), BackendError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(injected("remove"));
        }

        let mut objects = lock(&self.objects);
        let mut removed = lock(&self.removed);
        for path in paths {
            objects.remove(path);
            removed.push(path.clone());
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        public_object_url(MEMORY_STORAGE_URL, MEMORY_BUCKET, path)
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// [`ImageStore`] over a vector of rows.
#[derive(Default)]
pub struct MemoryImageStore {
    rows: Mutex<Vec<WebsiteImage>>,
    /// Reads through the trait: list, find, count and ping.
    pub read_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_insert: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, bypassing counters and fault flags.
    pub fn seed(&self, input: CreateWebsiteImage) -> WebsiteImage {
        let row = Self::build_row(&input);
        lock(&self.rows).push(row.clone());
        row
    }

    pub fn rows(&self) -> Vec<WebsiteImage> {
        lock(&self.rows).clone()
    }

    fn build_row(input: &CreateWebsiteImage) -> WebsiteImage {
        let now = chrono::Utc::now();
        WebsiteImage {
            id: uuid::Uuid::new_v4(),
            title: input.title.clone(),
            description: input.description.clone(),
            section: input.section.clone(),
            image_url: input.image_url.clone(),
            alt_text: input.alt_text.clone(),
            display_order: input.display_order,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn check_reads(&self) -> Result<(), BackendError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected("read"));
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn list_all(&self) -> Result<Vec<WebsiteImage>, BackendError> {
        self.check_reads()?;
        // Stable sort keeps insertion order for equal timestamps.
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            a.section
                .cmp(&b.section)
                .then(a.display_order.cmp(&b.display_order))
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(rows)
    }

    async fn list_active(&self, section: Option<&str>) -> Result<Vec<WebsiteImage>, BackendError> {
        self.check_reads()?;
        let mut rows: Vec<WebsiteImage> = self
            .rows()
            .into_iter()
            .filter(|row| row.is_active)
            .filter(|row| section.is_none_or(|s| row.section == s))
            .collect();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(rows)
    }

    async fn find(&self, id: DbId) -> Result<Option<WebsiteImage>, BackendError> {
        self.check_reads()?;
        Ok(lock(&self.rows).iter().find(|row| row.id == id).cloned())
    }

    async fn insert(&self, input: &CreateWebsiteImage) -> Result<WebsiteImage, BackendError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(injected("insert"));
        }
        Ok(self.seed(input.clone()))
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateWebsiteImage,
    ) -> Result<Option<WebsiteImage>, BackendError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(injected("update"));
        }

        let mut rows = lock(&self.rows);
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            row.title = title.clone();
        }
        if let Some(description) = &input.description {
            row.description = Some(description.clone());
        }
        if let Some(section) = &input.section {
            row.section = section.clone();
        }
        if let Some(alt_text) = &input.alt_text {
            row.alt_text = alt_text.clone();
        }
        if let Some(display_order) = input.display_order {
            row.display_order = display_order;
        }
        if let Some(is_active) = input.is_active {
            row.is_active = is_active;
        }
        row.updated_at = chrono::Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, BackendError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(injected("delete"));
        }

        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> Result<i64, BackendError> {
        self.check_reads()?;
        Ok(lock(&self.rows).len() as i64)
    }

    async fn ping(&self) -> Result<(), BackendError> {
        self.check_reads()
    }
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

/// Concrete fakes alongside the type-erased [`BackendHandles`] built from
/// them, so tests can both inject and inspect.
#[derive(Clone)]
pub struct MemoryBackend {
    pub auth: Arc<MemoryAuth>,
    pub storage: Arc<MemoryStorage>,
    pub images: Arc<MemoryImageStore>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            auth: Arc::new(MemoryAuth::new()),
            storage: Arc::new(MemoryStorage::new()),
            images: Arc::new(MemoryImageStore::new()),
        }
    }

    pub fn handles(&self) -> BackendHandles {
        BackendHandles {
            auth: self.auth.clone(),
            storage: self.storage.clone(),
            images: self.images.clone(),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}
