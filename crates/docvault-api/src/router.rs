//! Route definitions for the DocVault HTTP API.
//!
//! All routes are mounted under `/api`. Each route group carries its own
//! body limit; the multipart limit applies while the body is streamed.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let limits = &state.config.upload;

    let api_routes = Router::new()
        .merge(auth_routes().layer(DefaultBodyLimit::max(limits.max_json_body_bytes)))
        .merge(docs_routes().layer(DefaultBodyLimit::max(limits.max_upload_bytes)))
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            timeout,
            middleware::timeout::request_timeout,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration (admin only) and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/auth", post(handlers::auth::login))
}

fn docs_routes() -> Router<AppState> {
    Router::new().route("/docs", post(handlers::docs::upload))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
