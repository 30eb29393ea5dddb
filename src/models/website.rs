//! Monitored website model and the global monitoring switch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    Active,
    Paused,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanFrequency {
    #[default]
    Hourly,
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringStatus {
    Active,
    Paused,
}

impl MonitoringStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused => Self::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub url: String,
    pub name: String,
    pub last_scanned: DateTime<Utc>,
    pub status: WebsiteStatus,
    pub product_count: u32,
    #[serde(default)]
    pub scan_frequency: ScanFrequency,
}

/// Body of the "add website to monitor" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsite {
    #[validate(url(message = "url must be an absolute URL"))]
    pub url: String,
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub scan_frequency: ScanFrequency,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectNameRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectedName {
    pub name: String,
}
