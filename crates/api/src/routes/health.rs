use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, health};
use crate::state::AppState;

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
