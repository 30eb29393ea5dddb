//! Vulnerability reports describing confirmed price tampering vectors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttackVector {
    ApiManipulation,
    ParameterTampering,
    CouponStacking,
    HiddenFieldModification,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilitySeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VulnerabilityStatus {
    Open,
    InProgress,
    Resolved,
    FalsePositive,
}

impl VulnerabilityStatus {
    /// Whether the report still needs attention.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityReport {
    pub id: String,
    pub website_id: String,
    pub website_name: String,
    pub attack_vector: AttackVector,
    pub description: String,
    pub severity: VulnerabilitySeverity,
    pub status: VulnerabilityStatus,
    pub date_discovered: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_resolved: Option<DateTime<Utc>>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityFilters {
    pub severity: Option<VulnerabilitySeverity>,
    pub status: Option<VulnerabilityStatus>,
    pub website_id: Option<String>,
}

impl VulnerabilityFilters {
    pub fn matches(&self, report: &VulnerabilityReport) -> bool {
        self.severity.map_or(true, |s| report.severity == s)
            && self.status.map_or(true, |s| report.status == s)
            && self
                .website_id
                .as_deref()
                .map_or(true, |id| report.website_id == id)
    }
}
