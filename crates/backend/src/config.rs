use std::fmt;

/// Default storage bucket for site images.
pub const DEFAULT_BUCKET: &str = "website-images";

/// Connection settings for the hosted backend service.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the service, e.g. `https://abc.example.co`.
    pub url: String,
    /// Public (anonymous) API key.
    pub anon_key: String,
    /// Privileged (service-role) API key. Server-side use only.
    pub service_role_key: String,
    /// Secret the service signs access tokens with (HS256).
    pub jwt_secret: String,
    /// Object storage bucket holding site images.
    pub bucket: String,
}

impl BackendConfig {
    /// Load backend settings from environment variables.
    ///
    /// | Env Var                    | Required | Default          |
    /// |----------------------------|----------|------------------|
    /// | `BACKEND_URL`              | **yes**  | --               |
    /// | `BACKEND_ANON_KEY`         | **yes**  | --               |
    /// | `BACKEND_SERVICE_ROLE_KEY` | **yes**  | --               |
    /// | `BACKEND_JWT_SECRET`       | **yes**  | --               |
    /// | `STORAGE_BUCKET`           | no       | `website-images` |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is unset or empty.
    pub fn from_env() -> Self {
        Self {
            url: required("BACKEND_URL").trim_end_matches('/').to_string(),
            anon_key: required("BACKEND_ANON_KEY"),
            service_role_key: required("BACKEND_SERVICE_ROLE_KEY"),
            jwt_secret: required("BACKEND_JWT_SECRET"),
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.into()),
        }
    }
}

fn required(name: &str) -> String {
    let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("service_role_key", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let config = BackendConfig {
            url: "https://svc.example".into(),
            anon_key: "anon-123".into(),
            service_role_key: "service-456".into(),
            jwt_secret: "jwt-789".into(),
            bucket: DEFAULT_BUCKET.into(),
        };
        let out = format!("{config:?}");
        assert!(out.contains("https://svc.example"));
        assert!(!out.contains("anon-123"));
        assert!(!out.contains("service-456"));
        assert!(!out.contains("jwt-789"));
    }
}
