//! Health, liveness and readiness endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::shutdown::ShutdownState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct LiveResponse {
    pub uptime: u64,
}

/// GET /health: returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /live: seconds since the server started.
pub async fn live(State(state): State<Arc<ShutdownState>>) -> Json<LiveResponse> {
    let uptime = state.uptime().as_secs_f64().round() as u64;
    Json(LiveResponse { uptime })
}

/// GET /ready: 200 while accepting traffic, 500 before start-up completes
/// and once shutdown has begun.
pub async fn ready(State(state): State<Arc<ShutdownState>>) -> (StatusCode, Json<HealthResponse>) {
    if state.is_ready() {
        (StatusCode::OK, Json(HealthResponse { status: "ready" }))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse {
                status: "not ready",
            }),
        )
    }
}
