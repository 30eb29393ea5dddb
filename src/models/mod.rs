//! Domain models and DTOs for the dashboard API.

pub mod alert;
pub mod pagination;
pub mod product;
pub mod simulation;
pub mod vulnerability;
pub mod website;
