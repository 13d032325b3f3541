/// Errors from the hosted backend service or the row store.
///
/// `Display` is the message shown to the admin user, so service-reported
/// messages are passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A row store query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The capability is not reachable (used by in-process fakes).
    #[error("{0}")]
    Unavailable(String),
}

impl BackendError {
    /// HTTP status reported by the service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
