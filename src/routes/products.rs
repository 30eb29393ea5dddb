//! Product routes, including the price history chart series.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::product::{PriceHistorySeries, Product};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub website_id: Option<String>,
}

/// GET /api/v1/products — list tracked products.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<ProductFilters>,
) -> Json<ApiResponse<Vec<Product>>> {
    let catalog = state.catalog.read().await;
    ApiResponse::success(catalog.products(filters.website_id.as_deref()))
}

/// GET /api/v1/products/:id — get a product.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let catalog = state.catalog.read().await;
    let product = catalog.product(&id)?.clone();
    Ok(ApiResponse::success(product))
}

/// GET /api/v1/products/:id/price-history — chart series for a product.
pub async fn price_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PriceHistorySeries>>, AppError> {
    let series = state.catalog.read().await.price_history(&id)?;
    Ok(ApiResponse::success(series))
}
