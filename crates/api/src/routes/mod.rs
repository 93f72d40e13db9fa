//! Route handlers.

pub mod cats;
pub mod health;
pub mod metrics;

use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Serialize;

/// GET /: plain-text greeting.
pub async fn root() -> &'static str {
    "Hello World"
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFound {
    pub error: bool,
    pub message: String,
    pub code: &'static str,
    pub status_code: u16,
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!(%method, %uri, "unmatched route");
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            error: true,
            message: format!("Route not found: {method} {}", uri.path()),
            code: "NOT_FOUND",
            status_code: StatusCode::NOT_FOUND.as_u16(),
        }),
    )
}
