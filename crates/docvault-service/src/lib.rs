//! # docvault-service
//!
//! Workflow layer for DocVault. Each service orchestrates the credential
//! primitives from `docvault-auth` and the store traits from `docvault-core`.
//!
//! Services follow constructor injection: every store is provided at
//! construction time as an `Arc<dyn Trait>`, so tests can swap in fakes.

pub mod auth;
pub mod document;

pub use auth::AuthService;
pub use document::{UploadOutcome, UploadRequest, UploadService, UploadedFile};
