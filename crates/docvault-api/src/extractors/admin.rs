//! `AdminToken` extractor: checks the administrator bearer credential.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the admin credential.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

/// The token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("No authorization header found"))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization header format"))
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).inspect_err(|e| {
            warn!(path = %parts.uri.path(), reason = %e.0.message, "Admin authorization failed");
        })?;

        if !state.admin.is_admin(token) {
            warn!(path = %parts.uri.path(), "Admin authorization failed: wrong token");
            return Err(ApiError::unauthorized("Invalid admin token"));
        }

        Ok(AdminToken)
    }
}
