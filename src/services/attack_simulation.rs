//! Attack outcome evaluation for the price tampering simulator.
//!
//! A run "succeeds" when at least one manipulated parameter has a name
//! containing `price` or `total` (case-sensitive substring match). That is
//! the mock checkout server failing to reject a tampered amount. Every other
//! manipulated request is answered with a 403 tampering rejection.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::simulation::{Parameter, ResponsePayload, SimulationRequest, SimulationResult};

/// Parameter name fragments the mock server fails to validate.
const VULNERABLE_FIELDS: [&str; 2] = ["price", "total"];

/// Field whose value is echoed back as the charged amount.
const TOTAL_FIELD: &str = "total";

/// Exclusive upper bound for generated order numbers.
const ORDER_NUMBER_RANGE: u32 = 10_000;

/// Length of generated result identifiers.
const RESULT_ID_LEN: usize = 6;

/// Errors raised before or while a simulation runs.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("No parameters marked for manipulation")]
    NoManipulationSelected,

    #[error("A simulation is already running")]
    AlreadyRunning,

    #[error("Simulation was cancelled")]
    Cancelled,

    #[error("Failed to encode response payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Simulation task failed: {0}")]
    Task(String),
}

/// Source of the random identifiers stamped on a result.
pub trait IdGenerator: Send {
    /// Opaque identifier for the result record.
    fn result_id(&mut self) -> String;

    /// Number used in the fabricated `ORD-<n>` order id, below 10000.
    fn order_number(&mut self) -> u32;
}

/// Default generator backed by a seedable RNG.
#[derive(Debug)]
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn result_id(&mut self) -> String {
        (0..RESULT_ID_LEN)
            .map(|_| {
                let idx: u8 = self.rng.gen_range(0..36);
                if idx < 10 {
                    (b'0' + idx) as char
                } else {
                    (b'a' + idx - 10) as char
                }
            })
            .collect()
    }

    fn order_number(&mut self) -> u32 {
        self.rng.gen_range(0..ORDER_NUMBER_RANGE)
    }
}

/// True if any parameter is flagged as manipulated.
pub fn has_manipulated(parameters: &[Parameter]) -> bool {
    parameters.iter().any(|p| p.manipulated)
}

/// The success rule: a manipulated price- or total-named field got through.
pub fn is_tampering_success(parameters: &[Parameter]) -> bool {
    parameters.iter().any(|p| {
        p.manipulated && VULNERABLE_FIELDS.iter().any(|field| p.name.contains(field))
    })
}

/// Value of the first parameter whose name contains `total`, else `"0"`.
///
/// The manipulated flag is not considered here.
pub fn total_charged(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .find(|p| p.name.contains(TOTAL_FIELD))
        .map(|p| p.value.clone())
        .unwrap_or_else(|| "0".to_string())
}

/// Evaluate a simulation request into a result record.
///
/// Rejects with [`SimulationError::NoManipulationSelected`] before touching
/// `ids` when nothing is flagged as manipulated.
pub fn evaluate(
    request: &SimulationRequest,
    website_id: &str,
    ids: &mut dyn IdGenerator,
    now: DateTime<Utc>,
) -> Result<SimulationResult, SimulationError> {
    if !has_manipulated(&request.parameters) {
        return Err(SimulationError::NoManipulationSelected);
    }

    let id = ids.result_id();
    let success = is_tampering_success(&request.parameters);

    let payload = if success {
        ResponsePayload::Success {
            order_id: format!("ORD-{}", ids.order_number()),
            total_charged: total_charged(&request.parameters),
        }
    } else {
        ResponsePayload::rejected()
    };

    Ok(SimulationResult {
        id,
        website_id: website_id.to_string(),
        target_endpoint: request.target_endpoint.clone(),
        method: request.method,
        parameters: request.parameters.clone(),
        success,
        response_code: payload.response_code(),
        response_data: payload.to_json_pretty()?,
        timestamp: now,
    })
}
