//! Website routes: the monitoring table and the "add website" form.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::errors::{ApiResponse, AppError};
use crate::models::website::{CreateWebsite, DetectNameRequest, DetectedName, Website};
use crate::services::site_name;
use crate::AppState;

/// GET /api/v1/websites — list monitored websites.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Website>>> {
    let catalog = state.catalog.read().await;
    ApiResponse::success(catalog.websites.clone())
}

/// POST /api/v1/websites — start monitoring a website.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateWebsite>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.add_website(&body, Utc::now())?;
    Ok(ApiResponse::success(website))
}

/// POST /api/v1/websites/detect-name — suggest a display name for a URL.
pub async fn detect_name(
    Json(body): Json<DetectNameRequest>,
) -> Result<Json<ApiResponse<DetectedName>>, AppError> {
    if body.url.trim().is_empty() {
        return Err(AppError::Validation("Please enter a URL first".to_string()));
    }
    let name = site_name::detect(&body.url)?;
    Ok(ApiResponse::success(DetectedName { name }))
}

/// GET /api/v1/websites/:id — get a website.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let catalog = state.catalog.read().await;
    let website = catalog.website(&id)?.clone();
    Ok(ApiResponse::success(website))
}

/// DELETE /api/v1/websites/:id — stop monitoring and remove a website.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.remove_website(&id)?;
    Ok(ApiResponse::success(website))
}

/// POST /api/v1/websites/:id/restore — undo a removal.
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.restore_website(&id)?;
    Ok(ApiResponse::success(website))
}

/// POST /api/v1/websites/:id/scan — trigger an immediate scan.
pub async fn scan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.scan_website(&id, Utc::now())?;
    Ok(ApiResponse::success(website))
}

/// POST /api/v1/websites/:id/pause — pause monitoring.
pub async fn pause(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.pause_website(&id)?;
    Ok(ApiResponse::success(website))
}

/// POST /api/v1/websites/:id/resume — resume monitoring.
pub async fn resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let website = state.catalog.write().await.resume_website(&id)?;
    Ok(ApiResponse::success(website))
}
