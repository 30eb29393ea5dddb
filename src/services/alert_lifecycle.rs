//! Price alert triage: listing and status transitions.
//!
//! Alerts move `new -> reviewing -> resolved`; dismissing skips straight to
//! `resolved`. Resolved alerts are terminal.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::alert::{AlertFilters, AlertStatus, PriceAlert};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::catalog::Catalog;

/// Result of a successful transition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResult {
    pub alert_id: String,
    pub previous_status: AlertStatus,
    pub new_status: AlertStatus,
}

/// Check whether a status transition is valid per the triage graph.
pub fn is_valid_transition(from: &AlertStatus, to: &AlertStatus) -> bool {
    matches!(
        (from, to),
        (AlertStatus::New, AlertStatus::Reviewing)
            | (AlertStatus::New, AlertStatus::Resolved)
            | (AlertStatus::Reviewing, AlertStatus::Resolved)
    )
}

/// List alerts matching the filters, newest first.
pub fn list(
    catalog: &Catalog,
    filters: &AlertFilters,
    pagination: &Pagination,
) -> PagedResult<PriceAlert> {
    let mut matching: Vec<PriceAlert> = catalog
        .alerts
        .iter()
        .filter(|a| filters.matches(a))
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    PagedResult::paginate(matching, pagination)
}

/// Move an alert to `to`, enforcing the triage graph.
pub fn transition(
    catalog: &mut Catalog,
    alert_id: &str,
    to: AlertStatus,
) -> Result<TransitionResult, AppError> {
    let alert = catalog
        .alerts
        .iter_mut()
        .find(|a| a.id == alert_id)
        .ok_or_else(|| AppError::NotFound(format!("Alert {alert_id} not found")))?;

    let previous = alert.status;
    if !is_valid_transition(&previous, &to) {
        return Err(AppError::InvalidTransition(format!(
            "Cannot transition alert from {previous:?} to {to:?}"
        )));
    }
    alert.status = to;

    tracing::info!(
        alert_id = %alert.id,
        product = %alert.product_name,
        from = ?previous,
        to = ?to,
        "Alert status changed"
    );

    Ok(TransitionResult {
        alert_id: alert.id.clone(),
        previous_status: previous,
        new_status: to,
    })
}

/// Mark an alert as under review.
pub fn mark_reviewing(catalog: &mut Catalog, alert_id: &str) -> Result<TransitionResult, AppError> {
    transition(catalog, alert_id, AlertStatus::Reviewing)
}

/// Dismiss an alert, marking it resolved.
pub fn dismiss(catalog: &mut Catalog, alert_id: &str) -> Result<TransitionResult, AppError> {
    transition(catalog, alert_id, AlertStatus::Resolved)
}
