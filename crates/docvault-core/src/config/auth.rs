//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Admin credential, token issuance, and password hashing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer credential required by `POST /api/register`.
    #[serde(default)]
    pub admin_token: String,
    /// Number of random bytes in an issued token.
    #[serde(default = "default_token_length")]
    pub token_length_bytes: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_token: String::new(),
            token_length_bytes: default_token_length(),
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

/// Smallest token length accepted at startup.
pub const MIN_TOKEN_LENGTH_BYTES: usize = 16;

fn default_token_length() -> usize {
    32
}

fn default_hash_memory() -> u32 {
    19456
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
