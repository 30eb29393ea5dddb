//! Price alert routes: listing and triage actions.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::alert::{AlertFilters, PriceAlert};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::alert_lifecycle::{self, TransitionResult};
use crate::AppState;

/// GET /api/v1/alerts — list alerts with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<AlertFilters>,
) -> Json<ApiResponse<PagedResult<PriceAlert>>> {
    let catalog = state.catalog.read().await;
    ApiResponse::success(alert_lifecycle::list(&catalog, &filters, &pagination))
}

/// POST /api/v1/alerts/:id/review — mark an alert as reviewing.
pub async fn review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TransitionResult>>, AppError> {
    let mut catalog = state.catalog.write().await;
    let result = alert_lifecycle::mark_reviewing(&mut catalog, &id)?;
    Ok(ApiResponse::success(result))
}

/// POST /api/v1/alerts/:id/dismiss — dismiss an alert as resolved.
pub async fn dismiss(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TransitionResult>>, AppError> {
    let mut catalog = state.catalog.write().await;
    let result = alert_lifecycle::dismiss(&mut catalog, &id)?;
    Ok(ApiResponse::success(result))
}
