//! Tracked product and its price history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub website_id: String,
    pub name: String,
    pub current_price: f64,
    pub original_price: f64,
    pub discount_percentage: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
    pub price_history: Vec<PricePoint>,
    pub image_url: String,
    pub url: String,
}

/// One point of the price history chart with its axis label.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    pub label: String,
}

/// Chart series for a single product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistorySeries {
    pub product_id: String,
    pub product_name: String,
    pub currency: String,
    pub points: Vec<ChartPoint>,
    pub lowest_price: Option<f64>,
    pub highest_price: Option<f64>,
}
