//! Price-drop alerts raised against tracked products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    New,
    Reviewing,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub website_name: String,
    pub previous_price: f64,
    pub current_price: f64,
    pub change_percentage: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub severity: AlertSeverity,
    pub image_url: String,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertFilters {
    pub status: Option<AlertStatus>,
    pub severity: Option<AlertSeverity>,
}

impl AlertFilters {
    pub fn matches(&self, alert: &PriceAlert) -> bool {
        self.status.map_or(true, |s| alert.status == s)
            && self.severity.map_or(true, |s| alert.severity == s)
    }
}
