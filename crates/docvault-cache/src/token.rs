//! Token store over a cache provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use docvault_core::result::AppResult;
use docvault_core::timeout::with_timeout;
use docvault_core::traits::{CacheProvider, TokenStore};

/// Stores `token hash -> login` with the token TTL.
///
/// Keys are the hex lookup hash itself; the raw token never reaches the store.
#[derive(Debug, Clone)]
pub struct CacheTokenStore {
    provider: Arc<dyn CacheProvider>,
    timeout: Duration,
}

impl CacheTokenStore {
    pub fn new(provider: Arc<dyn CacheProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

#[async_trait]
impl TokenStore for CacheTokenStore {
    async fn save_token(&self, login: &str, token_hash: &str, ttl: Duration) -> AppResult<()> {
        with_timeout(
            self.timeout,
            "save token",
            self.provider.set(token_hash, login, ttl),
        )
        .await?;

        debug!(login = %login, ttl_seconds = ttl.as_secs(), "Token saved");
        Ok(())
    }

    async fn resolve_login(&self, token_hash: &str) -> AppResult<Option<String>> {
        with_timeout(self.timeout, "resolve token", self.provider.get(token_hash)).await
    }
}
