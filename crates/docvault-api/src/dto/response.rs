//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Success envelope: `{"response": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    pub response: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(response: T) -> Self {
        Self { response }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Result of `POST /api/docs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// The uploaded JSON payload, `null` when none was sent.
    pub json: serde_json::Value,
    /// Stored document name.
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    pub version: String,
    /// Reachability per backing component.
    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub components: std::collections::BTreeMap<String, String>,
}
