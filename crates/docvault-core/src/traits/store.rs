//! Narrow capability traits for each persistence role.
//!
//! Workflows depend on these instead of concrete Postgres/Redis types so
//! that tests can inject in-memory implementations.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::Document;

/// Persistence of login to password hash.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Insert a new user.
    ///
    /// Fails with [`ErrorKind::Conflict`](crate::ErrorKind::Conflict) when the
    /// login is already taken.
    async fn create_user(&self, login: &str, password_hash: &str) -> AppResult<()>;

    /// Fetch the stored password hash, `None` when the login is unknown.
    async fn find_password_hash(&self, login: &str) -> AppResult<Option<String>>;
}

/// Mapping of token lookup hash to login, with expiry.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    async fn save_token(&self, login: &str, token_hash: &str, ttl: Duration) -> AppResult<()>;

    /// Resolve the owner of a token hash, `None` when unknown or expired.
    ///
    /// A timeout is reported as
    /// [`ErrorKind::ServiceUnavailable`](crate::ErrorKind::ServiceUnavailable),
    /// never as `None`.
    async fn resolve_login(&self, token_hash: &str) -> AppResult<Option<String>>;
}

/// Authoritative document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persist the document together with its grant rows atomically.
    async fn save_document(&self, document: &Document) -> AppResult<()>;
}

/// Best-effort document cache.
#[async_trait]
pub trait DocumentCache: Send + Sync + 'static {
    /// Cache the document metadata under `doc:<id>`.
    async fn cache_document(&self, document: &Document) -> AppResult<()>;

    /// Drop every cached listing of `login` (`docs:<login>:*`).
    async fn invalidate_listings(&self, login: &str) -> AppResult<u64>;
}
