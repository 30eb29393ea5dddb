//! Vulnerability report routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::vulnerability::{VulnerabilityFilters, VulnerabilityReport};
use crate::AppState;

/// GET /api/v1/vulnerabilities — list reports, most severe first.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<VulnerabilityFilters>,
) -> Json<ApiResponse<Vec<VulnerabilityReport>>> {
    let mut reports = state.catalog.read().await.vulnerabilities(&filters);
    reports.sort_by(|a, b| b.severity.cmp(&a.severity));
    ApiResponse::success(reports)
}

/// GET /api/v1/vulnerabilities/:id — get a report with reproduction steps.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VulnerabilityReport>>, AppError> {
    let catalog = state.catalog.read().await;
    let report = catalog.vulnerability(&id)?.clone();
    Ok(ApiResponse::success(report))
}
