//! Registration and login handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{ApiResponse, RegisterResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{AdminToken, JsonBody};
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    _admin: AdminToken,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>, ApiError> {
    let login = state.auth_service.register(&req.login, &req.pswd).await?;

    Ok(Json(ApiResponse::ok(RegisterResponse { login })))
}

/// POST /api/auth
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let token = state.auth_service.login(&req.login, &req.pswd).await?;

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}
