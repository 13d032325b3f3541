use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public read routes, mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/images", get(public::list_images))
}
