//! Business logic services.

pub mod alert_lifecycle;
pub mod attack_simulation;
pub mod catalog;
pub mod dashboard;
pub mod sample_data;
pub mod simulator;
pub mod site_name;
