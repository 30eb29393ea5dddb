//! Dashboard statistics aggregation for the overview cards.

use serde::Serialize;

use crate::models::alert::AlertStatus;
use crate::models::simulation::SimulationResult;
use crate::models::vulnerability::{VulnerabilitySeverity, VulnerabilityStatus};
use crate::models::website::MonitoringStatus;
use crate::services::catalog::Catalog;

/// Aggregated statistics for the main overview page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_websites: u32,
    pub total_products: u32,
    /// Alerts not yet resolved.
    pub active_price_alerts: u32,
    /// Unresolved critical vulnerability reports.
    pub critical_vulnerabilities: u32,
    pub successful_attacks: u32,
    pub total_attacks: u32,
    /// Whole-number percentage of successful simulations.
    pub attack_success_rate: u32,
    pub new_alerts: u32,
    pub open_vulnerabilities: u32,
    pub monitoring_status: MonitoringStatus,
}

/// Compute the overview from the catalog and the latest simulator result.
pub fn get_stats(catalog: &Catalog, latest: Option<&SimulationResult>) -> StatsSummary {
    let runs = || catalog.simulation_history.iter().chain(latest);
    let total_attacks = runs().count() as u32;
    let successful_attacks = runs().filter(|r| r.success).count() as u32;

    StatsSummary {
        total_websites: catalog.websites.len() as u32,
        total_products: catalog.websites.iter().map(|w| w.product_count).sum(),
        active_price_alerts: count(catalog.alerts.iter(), |a| a.status != AlertStatus::Resolved),
        critical_vulnerabilities: count(catalog.vulnerabilities.iter(), |v| {
            v.severity == VulnerabilitySeverity::Critical && v.status.is_unresolved()
        }),
        successful_attacks,
        total_attacks,
        attack_success_rate: success_rate(successful_attacks, total_attacks),
        new_alerts: count(catalog.alerts.iter(), |a| a.status == AlertStatus::New),
        open_vulnerabilities: count(catalog.vulnerabilities.iter(), |v| {
            v.status == VulnerabilityStatus::Open
        }),
        monitoring_status: catalog.monitoring,
    }
}

fn count<T>(items: impl Iterator<Item = T>, pred: impl Fn(&T) -> bool) -> u32 {
    items.filter(|item| pred(item)).count() as u32
}

fn success_rate(successes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((successes as f64 / total as f64) * 100.0).round() as u32
}
