//! Construction of the token and document namespaces from configuration.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use docvault_core::config::cache::CacheConfig;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::HealthCheck;
use docvault_core::traits::cache::CacheProvider;

use crate::document::CacheDocumentCache;
use crate::token::CacheTokenStore;

/// Holds one provider per namespace.
///
/// The provider type is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct CacheManager {
    tokens: Arc<dyn CacheProvider>,
    documents: Arc<dyn CacheProvider>,
}

impl CacheManager {
    /// Connect both namespaces.
    pub async fn new(config: &CacheConfig) -> AppResult<Self> {
        let (tokens, documents): (Arc<dyn CacheProvider>, Arc<dyn CacheProvider>) =
            match config.provider.as_str() {
                #[cfg(feature = "redis-backend")]
                "redis" => {
                    info!("Initializing Redis token store and document cache");
                    let prefix = &config.redis.key_prefix;
                    let tokens =
                        crate::redis::RedisClient::connect(&config.redis.token_url, prefix).await?;
                    let documents =
                        crate::redis::RedisClient::connect(&config.redis.cache_url, prefix).await?;
                    (
                        Arc::new(crate::redis::RedisCacheProvider::new(tokens)),
                        Arc::new(crate::redis::RedisCacheProvider::new(documents)),
                    )
                }
                #[cfg(feature = "memory")]
                "memory" => {
                    info!("Initializing in-memory token store and document cache");
                    let capacity = config.memory.max_capacity;
                    (
                        Arc::new(crate::memory::MemoryCacheProvider::new(capacity)),
                        Arc::new(crate::memory::MemoryCacheProvider::new(capacity)),
                    )
                }
                other => {
                    return Err(AppError::configuration(format!(
                        "Unknown cache provider: '{other}'. Supported: memory, redis"
                    )));
                }
            };

        Ok(Self { tokens, documents })
    }

    /// Build a manager from existing providers.
    pub fn from_providers(
        tokens: Arc<dyn CacheProvider>,
        documents: Arc<dyn CacheProvider>,
    ) -> Self {
        Self { tokens, documents }
    }

    pub fn token_store(&self, config: &CacheConfig) -> CacheTokenStore {
        CacheTokenStore::new(Arc::clone(&self.tokens), config.timeout())
    }

    pub fn document_cache(&self, config: &CacheConfig) -> CacheDocumentCache {
        CacheDocumentCache::new(
            Arc::clone(&self.documents),
            config.document_ttl(),
            config.timeout(),
        )
    }

    /// Check that both namespaces are reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        let tokens = self.tokens.health_check().await?;
        let documents = self.documents.health_check().await?;
        Ok(tokens && documents)
    }
}

#[async_trait]
impl HealthCheck for CacheManager {
    fn component(&self) -> &'static str {
        "cache"
    }

    async fn check(&self) -> AppResult<bool> {
        self.health_check().await
    }
}
