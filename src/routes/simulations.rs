//! Attack simulator routes.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::models::simulation::{SimulationRequest, SimulationResult};
use crate::AppState;

/// POST /api/v1/simulations — run a simulation and return its result.
///
/// Responds after the configured artificial delay. A second request while
/// one is pending gets 409.
pub async fn run(
    State(state): State<AppState>,
    Json(body): Json<SimulationRequest>,
) -> Result<Json<ApiResponse<SimulationResult>>, AppError> {
    let result = state.simulations.run(body).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/v1/simulations/latest — most recent run, or null.
pub async fn latest(State(state): State<AppState>) -> Json<ApiResponse<Option<SimulationResult>>> {
    ApiResponse::success(state.simulations.latest().await)
}

/// GET /api/v1/simulations/history — recorded runs, newest first.
pub async fn history(State(state): State<AppState>) -> Json<ApiResponse<Vec<SimulationResult>>> {
    let mut runs = state.catalog.read().await.simulation_history.clone();
    if let Some(latest) = state.simulations.latest().await {
        runs.push(latest);
    }
    runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ApiResponse::success(runs)
}
