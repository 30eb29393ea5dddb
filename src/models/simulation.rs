//! Attack simulation request/result models and the typed response payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One request field and whether the simulated attacker altered it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub manipulated: bool,
}

impl Parameter {
    pub fn new(name: &str, value: &str, manipulated: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            manipulated,
        }
    }
}

/// Input for a single simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Falls back to the configured default website when absent.
    pub website_id: Option<String>,
    pub target_endpoint: String,
    pub method: HttpMethod,
    pub parameters: Vec<Parameter>,
}

/// Body the mock server "returns" for a simulated request.
///
/// Serialized with `status` as the tag, so the two shapes are:
/// `{"status":"success","order_id":..,"total_charged":..}` and
/// `{"status":"error","message":..}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponsePayload {
    Success {
        order_id: String,
        total_charged: String,
    },
    Error {
        message: String,
    },
}

impl ResponsePayload {
    pub const TAMPERING_DETECTED: &'static str =
        "Server-side validation failed. Tampering detected.";

    pub fn rejected() -> Self {
        Self::Error {
            message: Self::TAMPERING_DETECTED.to_string(),
        }
    }

    /// HTTP status the mock server answers with for this payload.
    pub fn response_code(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Error { .. } => 403,
        }
    }

    /// Pretty JSON with two-space indentation, as shown in the result panel.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Synthetic record describing the outcome of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub id: String,
    pub website_id: String,
    pub target_endpoint: String,
    pub method: HttpMethod,
    pub parameters: Vec<Parameter>,
    pub success: bool,
    pub response_code: u16,
    pub response_data: String,
    pub timestamp: DateTime<Utc>,
}

impl SimulationResult {
    /// Decode `response_data` back into its typed form.
    pub fn payload(&self) -> Result<ResponsePayload, serde_json::Error> {
        serde_json::from_str(&self.response_data)
    }

    /// Parameters the attacker altered, in request order.
    pub fn manipulated_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.manipulated)
    }
}
