//! Best-effort document cache over a cache provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use docvault_core::result::AppResult;
use docvault_core::timeout::with_timeout;
use docvault_core::traits::{CacheProvider, DocumentCache};
use docvault_core::types::Document;

use crate::keys;

/// Writes `doc:<id>` entries and drops `docs:<login>:*` listings.
#[derive(Debug, Clone)]
pub struct CacheDocumentCache {
    provider: Arc<dyn CacheProvider>,
    ttl: Duration,
    timeout: Duration,
}

impl CacheDocumentCache {
    pub fn new(provider: Arc<dyn CacheProvider>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            provider,
            ttl,
            timeout,
        }
    }
}

#[async_trait]
impl DocumentCache for CacheDocumentCache {
    async fn cache_document(&self, document: &Document) -> AppResult<()> {
        let payload = serde_json::to_string(document)?;
        let key = keys::document(document.id);

        with_timeout(
            self.timeout,
            "cache document",
            self.provider.set(&key, &payload, self.ttl),
        )
        .await?;

        info!(document_id = %document.id, "Document cached");
        Ok(())
    }

    async fn invalidate_listings(&self, login: &str) -> AppResult<u64> {
        let pattern = keys::listings_pattern(login);
        let removed = with_timeout(
            self.timeout,
            "invalidate listings",
            self.provider.delete_pattern(&pattern),
        )
        .await?;

        info!(login = %login, removed, "Document listings invalidated");
        Ok(removed)
    }
}
