//! In-memory catalog of monitored websites, products and reports.
//!
//! The catalog lives for the lifetime of the process. Mutations (adding or
//! pausing a website, triaging alerts) only change this copy.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::models::alert::PriceAlert;
use crate::models::product::{ChartPoint, PriceHistorySeries, Product};
use crate::models::simulation::SimulationResult;
use crate::models::vulnerability::{VulnerabilityFilters, VulnerabilityReport};
use crate::models::website::{CreateWebsite, MonitoringStatus, Website, WebsiteStatus};
use crate::services::sample_data;

/// Catalog shared between handlers.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub websites: Vec<Website>,
    pub products: Vec<Product>,
    pub alerts: Vec<PriceAlert>,
    pub vulnerabilities: Vec<VulnerabilityReport>,
    pub simulation_history: Vec<SimulationResult>,
    pub monitoring: MonitoringStatus,
    /// Removed websites kept for undo, most recent last.
    pub removed_websites: Vec<Website>,
}

impl Catalog {
    /// Demo dataset with timestamps relative to `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            websites: sample_data::websites(now),
            products: sample_data::products(now),
            alerts: sample_data::alerts(now),
            vulnerabilities: sample_data::vulnerabilities(now),
            simulation_history: sample_data::simulation_history(now),
            monitoring: MonitoringStatus::Active,
            removed_websites: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }

    // -- Websites --

    pub fn website(&self, id: &str) -> Result<&Website, AppError> {
        self.websites
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Website {id} not found")))
    }

    fn website_mut(&mut self, id: &str) -> Result<&mut Website, AppError> {
        self.websites
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Website {id} not found")))
    }

    /// Add a website to the monitoring list.
    pub fn add_website(
        &mut self,
        input: &CreateWebsite,
        now: DateTime<Utc>,
    ) -> Result<Website, AppError> {
        input
            .validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let url = input.url.trim().trim_end_matches('/');
        if self
            .websites
            .iter()
            .any(|w| w.url.trim_end_matches('/').eq_ignore_ascii_case(url))
        {
            return Err(AppError::Conflict(format!("{url} is already monitored")));
        }

        let website = Website {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            name: input.name.trim().to_string(),
            last_scanned: now,
            status: WebsiteStatus::Active,
            product_count: 0,
            scan_frequency: input.scan_frequency,
        };
        tracing::info!(id = %website.id, name = %website.name, "Website added");
        self.websites.push(website.clone());
        Ok(website)
    }

    /// Stamp a manual scan.
    pub fn scan_website(&mut self, id: &str, now: DateTime<Utc>) -> Result<Website, AppError> {
        let website = self.website_mut(id)?;
        website.last_scanned = now;
        tracing::info!(id = %website.id, name = %website.name, "Scan started");
        Ok(website.clone())
    }

    pub fn pause_website(&mut self, id: &str) -> Result<Website, AppError> {
        let website = self.website_mut(id)?;
        if website.status != WebsiteStatus::Active {
            return Err(AppError::InvalidTransition(format!(
                "Cannot pause website in {:?} state",
                website.status
            )));
        }
        website.status = WebsiteStatus::Paused;
        tracing::info!(id = %website.id, "Monitoring paused for website");
        Ok(website.clone())
    }

    /// Resume a paused or failing website.
    pub fn resume_website(&mut self, id: &str) -> Result<Website, AppError> {
        let website = self.website_mut(id)?;
        if website.status == WebsiteStatus::Active {
            return Err(AppError::InvalidTransition(
                "Website is already active".to_string(),
            ));
        }
        website.status = WebsiteStatus::Active;
        tracing::info!(id = %website.id, "Monitoring resumed for website");
        Ok(website.clone())
    }

    /// Remove a website. Its products are hidden until it is restored.
    pub fn remove_website(&mut self, id: &str) -> Result<Website, AppError> {
        let index = self
            .websites
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Website {id} not found")))?;
        let removed = self.websites.remove(index);
        tracing::warn!(id = %removed.id, name = %removed.name, "Website removed");
        self.removed_websites.push(removed.clone());
        Ok(removed)
    }

    /// Undo a removal, putting the website back unchanged.
    pub fn restore_website(&mut self, id: &str) -> Result<Website, AppError> {
        let index = self
            .removed_websites
            .iter()
            .rposition(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No removed website {id}")))?;

        let url = self.removed_websites[index].url.trim_end_matches('/');
        if self
            .websites
            .iter()
            .any(|w| w.url.trim_end_matches('/').eq_ignore_ascii_case(url))
        {
            return Err(AppError::Conflict(format!("{url} is already monitored")));
        }

        let website = self.removed_websites.remove(index);
        tracing::info!(id = %website.id, name = %website.name, "Website restored");
        self.websites.push(website.clone());
        Ok(website)
    }

    fn is_monitored(&self, website_id: &str) -> bool {
        self.websites.iter().any(|w| w.id == website_id)
    }

    // -- Products --

    pub fn products(&self, website_id: Option<&str>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| self.is_monitored(&p.website_id))
            .filter(|p| website_id.map_or(true, |id| p.website_id == id))
            .cloned()
            .collect()
    }

    pub fn product(&self, id: &str) -> Result<&Product, AppError> {
        self.products
            .iter()
            .find(|p| p.id == id && self.is_monitored(&p.website_id))
            .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))
    }

    /// Chart series for a product, oldest point first.
    pub fn price_history(&self, id: &str) -> Result<PriceHistorySeries, AppError> {
        let product = self.product(id)?;

        let mut points: Vec<ChartPoint> = product
            .price_history
            .iter()
            .map(|p| ChartPoint {
                date: p.date,
                price: p.price,
                label: p.date.format("%b %-d").to_string(),
            })
            .collect();
        points.sort_by_key(|p| p.date);

        let prices = points.iter().map(|p| p.price);
        let lowest_price = prices.clone().reduce(f64::min);
        let highest_price = prices.reduce(f64::max);

        Ok(PriceHistorySeries {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            currency: product.currency.clone(),
            points,
            lowest_price,
            highest_price,
        })
    }

    // -- Vulnerability reports --

    pub fn vulnerabilities(&self, filters: &VulnerabilityFilters) -> Vec<VulnerabilityReport> {
        self.vulnerabilities
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect()
    }

    pub fn vulnerability(&self, id: &str) -> Result<&VulnerabilityReport, AppError> {
        self.vulnerabilities
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Vulnerability report {id} not found")))
    }

    // -- Monitoring switch --

    pub fn toggle_monitoring(&mut self) -> MonitoringStatus {
        self.monitoring = self.monitoring.toggled();
        tracing::info!(status = ?self.monitoring, "Price tampering monitoring toggled");
        self.monitoring
    }
}

/// Flatten validator errors into one message, sorted by field.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vulnerability::VulnerabilitySeverity;
    use crate::models::website::ScanFrequency;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::sample(now())
    }

    fn new_site(url: &str, name: &str) -> CreateWebsite {
        CreateWebsite {
            url: url.to_string(),
            name: name.to_string(),
            scan_frequency: ScanFrequency::Daily,
        }
    }

    #[test]
    fn sample_has_dashboard_dataset() {
        let c = catalog();
        assert_eq!(c.websites.len(), 4);
        assert_eq!(c.products.len(), 3);
        assert_eq!(c.alerts.len(), 3);
        assert_eq!(c.vulnerabilities.len(), 3);
        assert_eq!(c.simulation_history.len(), 3);
        assert_eq!(c.monitoring, MonitoringStatus::Active);
        assert_eq!(c.website("w1").unwrap().last_scanned, now() - chrono::Duration::minutes(30));
    }

    #[test]
    fn add_website_starts_active_and_empty() {
        let mut c = catalog();
        let site = c
            .add_website(&new_site("https://new-shop.example.com/", "New Shop"), now())
            .unwrap();
        assert_eq!(site.status, WebsiteStatus::Active);
        assert_eq!(site.product_count, 0);
        assert_eq!(site.url, "https://new-shop.example.com");
        assert_eq!(site.scan_frequency, ScanFrequency::Daily);
        assert_eq!(c.websites.len(), 5);
    }

    #[test]
    fn add_website_rejects_missing_fields() {
        let mut c = catalog();
        let err = c.add_website(&new_site("", ""), now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(c.websites.len(), 4);
    }

    #[test]
    fn add_website_rejects_duplicate_url() {
        let mut c = catalog();
        let err = c
            .add_website(&new_site("https://electronics-store.example.com/", "Dup"), now())
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn pause_only_from_active() {
        let mut c = catalog();
        assert_eq!(c.pause_website("w1").unwrap().status, WebsiteStatus::Paused);
        assert!(matches!(
            c.pause_website("w1").unwrap_err(),
            AppError::InvalidTransition(_)
        ));
        assert!(matches!(
            c.pause_website("w4").unwrap_err(),
            AppError::InvalidTransition(_)
        ));
    }

    #[test]
    fn resume_from_paused_or_error() {
        let mut c = catalog();
        assert_eq!(c.resume_website("w3").unwrap().status, WebsiteStatus::Active);
        assert_eq!(c.resume_website("w4").unwrap().status, WebsiteStatus::Active);
        assert!(c.resume_website("w1").is_err());
    }

    #[test]
    fn scan_stamps_last_scanned() {
        let mut c = catalog();
        let later = now() + chrono::Duration::minutes(5);
        assert_eq!(c.scan_website("w2", later).unwrap().last_scanned, later);
    }

    #[test]
    fn remove_unknown_website_is_not_found() {
        let mut c = catalog();
        assert!(c.remove_website("w9").unwrap_err().is_not_found());
        assert_eq!(c.remove_website("w2").unwrap().name, "Fashion Boutique");
        assert!(c.website("w2").is_err());
    }

    #[test]
    fn removed_website_hides_products_until_restored() {
        let mut c = catalog();
        c.remove_website("w1").unwrap();
        assert_eq!(c.products(None).len(), 1);
        assert!(c.product("p1").unwrap_err().is_not_found());

        let restored = c.restore_website("w1").unwrap();
        assert_eq!(restored.name, "ElectroTech");
        assert_eq!(restored.status, WebsiteStatus::Active);
        assert_eq!(c.products(None).len(), 3);
        assert!(c.product("p1").is_ok());
        assert!(c.restore_website("w1").unwrap_err().is_not_found());
    }

    #[test]
    fn restore_conflicts_with_readded_url() {
        let mut c = catalog();
        c.remove_website("w2").unwrap();
        c.add_website(
            &new_site("https://fashion-boutique.example.com", "Boutique Again"),
            now(),
        )
        .unwrap();
        assert!(matches!(
            c.restore_website("w2").unwrap_err(),
            AppError::Conflict(_)
        ));
    }

    #[test]
    fn products_filter_by_website() {
        let c = catalog();
        assert_eq!(c.products(Some("w1")).len(), 2);
        assert_eq!(c.products(Some("w4")).len(), 0);
        assert_eq!(c.products(None).len(), 3);
    }

    #[test]
    fn price_history_labels_and_bounds() {
        let c = catalog();
        let series = c.price_history("p1").unwrap();
        assert_eq!(series.points.len(), 5);
        assert_eq!(series.points[0].label, "Oct 12");
        assert_eq!(series.points[0].price, 799.99);
        assert_eq!(series.lowest_price, Some(499.99));
        assert_eq!(series.highest_price, Some(799.99));
    }

    #[test]
    fn vulnerabilities_filter_by_severity() {
        let c = catalog();
        let filters = VulnerabilityFilters {
            severity: Some(VulnerabilitySeverity::Critical),
            ..Default::default()
        };
        let found = c.vulnerabilities(&filters);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "v1");
    }

    #[test]
    fn monitoring_toggle_round_trips() {
        let mut c = catalog();
        assert_eq!(c.toggle_monitoring(), MonitoringStatus::Paused);
        assert_eq!(c.toggle_monitoring(), MonitoringStatus::Active);
    }
}
