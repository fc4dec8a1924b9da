//! Key-value backend trait shared by the token store and the document cache.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// A key-value backend with per-entry expiry (Redis or in-memory).
///
/// Values are plain strings. Implementations apply their own key prefix.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete all keys matching a glob pattern (e.g. `"docs:alice:*"`).
    /// Returns the number of keys removed.
    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
