//! Shared response envelope types for API handlers.
//!
//! Admin API responses use a `{ "data": ... }` envelope. The public read
//! endpoint keeps its own `{ "images" }` / `{ "error" }` shape.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
