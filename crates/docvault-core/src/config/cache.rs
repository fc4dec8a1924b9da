//! Token store and document cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level cache configuration.
///
/// Two logical namespaces live behind this section: the token store
/// (`token hash -> login`) and the document cache (`doc:<id>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache provider type: `"redis"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Per-operation timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
    /// Lifetime of an issued token in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Lifetime of a cached document in seconds.
    #[serde(default = "default_document_ttl")]
    pub document_ttl_seconds: u64,
    /// Redis-specific configuration.
    #[serde(default)]
    pub redis: RedisCacheConfig,
    /// In-memory configuration.
    #[serde(default)]
    pub memory: MemoryCacheConfig,
}

impl CacheConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }

    pub fn document_ttl(&self) -> Duration {
        Duration::from_secs(self.document_ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            timeout_ms: default_timeout(),
            token_ttl_seconds: default_token_ttl(),
            document_ttl_seconds: default_document_ttl(),
            redis: RedisCacheConfig::default(),
            memory: MemoryCacheConfig::default(),
        }
    }
}

/// Redis backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    /// Connection URL of the token database.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Connection URL of the document cache database.
    #[serde(default = "default_cache_url")]
    pub cache_url: String,
    /// Key prefix applied to every key (empty by default).
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            cache_url: default_cache_url(),
            key_prefix: String::new(),
        }
    }
}

/// In-memory backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries per namespace.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_provider() -> String {
    "redis".to_string()
}

fn default_timeout() -> u64 {
    1000
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_document_ttl() -> u64 {
    600
}

fn default_token_url() -> String {
    "redis://localhost:6379/0".to_string()
}

fn default_cache_url() -> String {
    "redis://localhost:6379/1".to_string()
}

fn default_max_capacity() -> u64 {
    10000
}
