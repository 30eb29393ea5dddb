//! Global monitoring switch shown in the header.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::models::website::MonitoringStatus;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MonitoringState {
    pub status: MonitoringStatus,
}

/// GET /api/v1/monitoring — current switch position.
pub async fn status(State(state): State<AppState>) -> Json<ApiResponse<MonitoringState>> {
    let status = state.catalog.read().await.monitoring;
    ApiResponse::success(MonitoringState { status })
}

/// POST /api/v1/monitoring/toggle — pause or resume price tampering detection.
pub async fn toggle(State(state): State<AppState>) -> Json<ApiResponse<MonitoringState>> {
    let status = state.catalog.write().await.toggle_monitoring();
    ApiResponse::success(MonitoringState { status })
}
