//! Object storage port and the hosted implementation.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::client::HostedClient;
use crate::error::BackendError;

/// Binary object storage keyed by path.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` at `path`. Fails if an object already exists there.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), BackendError>;

    /// Remove the objects at `paths`. Missing objects are not an error.
    async fn remove(&self, paths: &[String]) -> Result<(), BackendError>;

    /// Public URL resolving to the object at `path`.
    fn public_url(&self, path: &str) -> String;
}

/// [`ObjectStorage`] backed by the hosted service's storage endpoints.
pub struct HostedStorage {
    client: HostedClient,
    bucket: String,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

impl HostedStorage {
    /// `client` should be the privileged handle.
    pub fn new(client: HostedClient, bucket: String) -> Self {
        Self { client, bucket }
    }
}

/// Percent-encode each `/`-separated segment of a storage path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Public URL layout: `{base}/storage/v1/object/public/{bucket}/{path}`.
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(bucket),
        encode_path(path)
    )
}

#[async_trait]
impl ObjectStorage for HostedStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BackendError> {
        let endpoint = format!(
            "/storage/v1/object/{}/{}",
            urlencoding::encode(&self.bucket),
            encode_path(path)
        );
        let response = self
            .client
            .request(Method::POST, &endpoint)
            .header("content-type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        HostedClient::check_status(response).await
    }

    async fn remove(&self, paths: &[String]) -> Result<(), BackendError> {
        let endpoint = format!("/storage/v1/object/{}", urlencoding::encode(&self.bucket));
        let response = self
            .client
            .request(Method::DELETE, &endpoint)
            .json(&RemoveRequest { prefixes: paths })
            .send()
            .await?;

        HostedClient::check_status(response).await
    }

    fn public_url(&self, path: &str) -> String {
        public_object_url(self.client.base_url(), &self.bucket, path)
    }
}
