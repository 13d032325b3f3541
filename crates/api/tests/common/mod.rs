#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use thinklab_api::config::ServerConfig;
use thinklab_api::router::build_app_router;
use thinklab_api::state::AppState;
use thinklab_backend::memory::MemoryBackend;
use thinklab_backend::BackendConfig;
use thinklab_db::models::website_image::{CreateWebsiteImage, WebsiteImage};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@thinklab.test";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const BOUNDARY: &str = "thinklab-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The backend section is never contacted.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        session_cookie_secure: false,
        backend: BackendConfig {
            url: "http://backend.invalid".into(),
            anon_key: "anon".into(),
            service_role_key: "service".into(),
            jwt_secret: "unused".into(),
            bucket: "website-images".into(),
        },
    }
}

/// In-memory backend with one admin account.
pub fn test_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    backend.auth.add_account(ADMIN_EMAIL, ADMIN_PASSWORD);
    backend
}

/// Build the full application router over the given fakes.
///
/// Uses the same [`build_app_router`] as production, so tests exercise the
/// real middleware stack.
pub fn build_test_app(backend: &MemoryBackend) -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), backend.handles());
    build_app_router(state, &config)
}

/// Session cookie header value for the admin account.
pub fn admin_cookie(backend: &MemoryBackend) -> String {
    let token = backend
        .auth
        .token_for(ADMIN_EMAIL)
        .expect("admin account should exist");
    format!("tl_session={token}")
}

pub fn seed_image(
    backend: &MemoryBackend,
    section: &str,
    title: &str,
    display_order: i32,
    is_active: bool,
) -> WebsiteImage {
    use thinklab_backend::ObjectStorage;

    let path = format!("{section}/{}.jpg", title.to_lowercase().replace(' ', "-"));
    backend.storage.seed(&path, b"jpeg");
    backend.images.seed(CreateWebsiteImage {
        title: title.into(),
        description: None,
        section: section.into(),
        image_url: backend.storage.public_url(&path),
        alt_text: title.into(),
        display_order,
        is_active,
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send_with_cookie(
    app: Router,
    method: Method,
    uri: &str,
    cookie: &str,
    json: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("cookie", cookie);
    let body = match json {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    send(app, builder.body(body).unwrap()).await
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

/// One part of a multipart form.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    cookie: Option<&str>,
    parts: &[Part<'_>],
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    send(app, builder.body(Body::from(multipart_body(parts))).unwrap()).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("response body should be UTF-8")
}
