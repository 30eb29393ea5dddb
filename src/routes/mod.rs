//! Route definitions for the Tamper Hunter API.

pub mod alerts;
pub mod dashboard;
pub mod health;
pub mod monitoring;
pub mod products;
pub mod simulations;
pub mod vulnerabilities;
pub mod websites;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Request bodies are small JSON forms.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                frontend_url = %state.config.frontend_url,
                "Invalid FRONTEND_URL, allowing any origin"
            );
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET, Method::POST, Method::DELETE])
    .allow_headers(Any);

    let website_routes = Router::new()
        .route("/websites", get(websites::list).post(websites::create))
        .route("/websites/detect-name", post(websites::detect_name))
        .route(
            "/websites/{id}",
            get(websites::get_by_id).delete(websites::remove),
        )
        .route("/websites/{id}/scan", post(websites::scan))
        .route("/websites/{id}/pause", post(websites::pause))
        .route("/websites/{id}/resume", post(websites::resume))
        .route("/websites/{id}/restore", post(websites::restore));

    let product_routes = Router::new()
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get_by_id))
        .route("/products/{id}/price-history", get(products::price_history));

    let report_routes = Router::new()
        .route("/alerts", get(alerts::list))
        .route("/alerts/{id}/review", post(alerts::review))
        .route("/alerts/{id}/dismiss", post(alerts::dismiss))
        .route("/vulnerabilities", get(vulnerabilities::list))
        .route("/vulnerabilities/{id}", get(vulnerabilities::get_by_id));

    let simulation_routes = Router::new()
        .route("/simulations", post(simulations::run))
        .route("/simulations/latest", get(simulations::latest))
        .route("/simulations/history", get(simulations::history));

    let dashboard_routes = Router::new()
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/monitoring", get(monitoring::status))
        .route("/monitoring/toggle", post(monitoring::toggle));

    let api = website_routes
        .merge(product_routes)
        .merge(report_routes)
        .merge(simulation_routes)
        .merge(dashboard_routes);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
