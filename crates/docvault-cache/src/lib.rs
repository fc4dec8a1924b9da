//! # docvault-cache
//!
//! Key-value backends for DocVault and the two stores built on them:
//!
//! - the token store (`sha256(token) -> login`, expiring after the token TTL)
//! - the document cache (`doc:<id>` metadata, `docs:<login>:*` listings)
//!
//! Each store lives in its own namespace, a separate Redis database or a
//! separate in-memory map, selected at runtime based on configuration.

pub mod document;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;
pub mod token;

pub use document::CacheDocumentCache;
pub use provider::CacheManager;
pub use token::CacheTokenStore;
