//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub websites: usize,
    pub simulation_running: bool,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — reports catalog size and simulator state.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let websites = state.catalog.read().await.websites.len();
    let simulation_running = state.simulations.is_running().await;

    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        websites,
        simulation_running,
    })
}
