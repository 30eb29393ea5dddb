//! Dashboard routes: aggregated statistics for the overview page.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::services::dashboard::{self, StatsSummary};
use crate::AppState;

/// GET /api/v1/dashboard/stats — aggregated dashboard statistics.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StatsSummary>>, AppError> {
    let latest = state.simulations.latest().await;
    let catalog = state.catalog.read().await;
    let stats = dashboard::get_stats(&catalog, latest.as_ref());
    Ok(ApiResponse::success(stats))
}
