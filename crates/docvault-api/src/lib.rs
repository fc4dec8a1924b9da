//! # docvault-api
//!
//! HTTP API layer for DocVault built on Axum.
//!
//! Provides the `/api` endpoints, the admin bearer extractor, middleware
//! (CORS, request logging), DTOs, and mapping of domain errors to the
//! uniform error body.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
