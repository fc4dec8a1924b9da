//! Health check handler.

use std::collections::BTreeMap;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use docvault_core::timeout::with_timeout;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

const CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let mut components = BTreeMap::new();
    let mut healthy = true;

    for check in &state.health_checks {
        let reachable = match with_timeout(CHECK_TIMEOUT, check.component(), check.check()).await {
            Ok(ok) => ok,
            Err(e) => {
                warn!(component = check.component(), error = %e, "Health check failed");
                false
            }
        };
        healthy &= reachable;
        components.insert(
            check.component().to_string(),
            if reachable { "up" } else { "down" }.to_string(),
        );
    }

    let (status, label) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            components,
        })),
    )
}
