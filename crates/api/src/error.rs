use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thinklab_backend::BackendError;
use thinklab_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`BackendError`] for failures
/// reported by the hosted service or row store. Implements [`IntoResponse`]
/// to produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `thinklab_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the hosted backend or the row store.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Backend errors ---
            AppError::Backend(err) => classify_backend_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a backend error into an HTTP status, error code, and message.
///
/// - Service-reported failures surface their message verbatim as 502.
/// - Row store failures surface the database message as 502; the admin
///   sees which step of a workflow failed.
/// - Transport failures map to 502 with the detail logged, not returned.
fn classify_backend_error(err: &BackendError) -> (StatusCode, &'static str, String) {
    match err {
        BackendError::Api { status, message } => {
            tracing::warn!(status, error = %message, "Backend service error");
            (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", message.clone())
        }
        BackendError::Request(e) => {
            tracing::error!(error = %e, "Backend request failed");
            (
                StatusCode::BAD_GATEWAY,
                "BACKEND_ERROR",
                "The backend service could not be reached".to_string(),
            )
        }
        BackendError::Unavailable(msg) => {
            tracing::error!(error = %msg, "Backend unavailable");
            (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", msg.clone())
        }
        BackendError::Database(e) => {
            tracing::error!(error = %e, "Database error");
            (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_is_400_with_message() {
        let (status, body) = render(CoreError::Validation("Please select a section for this image".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please select a section for this image");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn service_message_surfaces_verbatim() {
        let err = BackendError::Api {
            status: 409,
            message: "The resource already exists".into(),
        };
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "The resource already exists");
    }

    #[tokio::test]
    async fn row_store_message_surfaces_verbatim() {
        let err = BackendError::Database(sqlx::Error::Protocol(
            "duplicate key value violates unique constraint".into(),
        ));
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "BACKEND_ERROR");
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("duplicate key value violates unique constraint"),
            "{body}"
        );
    }

    #[tokio::test]
    async fn internal_detail_is_hidden() {
        let (status, body) = render(AppError::InternalError("secret detail".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn not_found_names_entity() {
        let id = uuid::Uuid::nil();
        let (status, body) = render(
            CoreError::NotFound {
                entity: "WebsiteImage",
                id,
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], format!("WebsiteImage with id {id} not found"));
    }
}
