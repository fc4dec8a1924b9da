//! Core traits defined in `docvault-core` and implemented by other crates.

pub mod cache;
pub mod health;
pub mod store;

pub use cache::CacheProvider;
pub use health::HealthCheck;
pub use store::{CredentialStore, DocumentCache, DocumentStore, TokenStore};
