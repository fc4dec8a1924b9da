//! Whole-request deadline.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::error_response;

/// Abort requests running longer than `limit` with `408` in the usual error body.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(%path, limit_ms = limit.as_millis() as u64, "Request timed out");
            error_response(StatusCode::REQUEST_TIMEOUT, "request timed out")
        }
    }
}
