pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use chrono::Utc;

use services::catalog::{Catalog, SharedCatalog};
use services::simulator::SimulationService;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub catalog: SharedCatalog,
    pub simulations: SimulationService,
}

impl AppState {
    /// State backed by the demo catalog and an entropy-seeded simulator.
    pub fn new(config: config::AppConfig) -> Self {
        let simulations = SimulationService::from_config(&config);
        Self::with_simulator(config, simulations)
    }

    pub fn with_simulator(config: config::AppConfig, simulations: SimulationService) -> Self {
        Self {
            config,
            catalog: Catalog::sample(Utc::now()).shared(),
            simulations,
        }
    }
}
