//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docvault_auth::{AdminGuard, PasswordHasher, TokenIssuer};
use docvault_core::config::AppConfig;
use docvault_core::result::AppResult;
use docvault_core::traits::{CredentialStore, DocumentCache, DocumentStore, HealthCheck, TokenStore};
use docvault_service::{AuthService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Admin credential check for `/api/register`
    pub admin: AdminGuard,
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Document upload
    pub upload_service: Arc<UploadService>,
    /// Backing services reported by `/api/health`
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("admin", &self.admin)
            .field("health_checks", &self.health_checks.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        auth_service: Arc<AuthService>,
        upload_service: Arc<UploadService>,
    ) -> Self {
        let admin = AdminGuard::new(config.auth.admin_token.clone());
        Self {
            config,
            admin,
            auth_service,
            upload_service,
            health_checks: Vec::new(),
        }
    }

    /// Wire both workflows over the given stores.
    pub fn from_stores(
        config: Arc<AppConfig>,
        users: Arc<dyn CredentialStore>,
        tokens: Arc<dyn TokenStore>,
        documents: Arc<dyn DocumentStore>,
        cache: Arc<dyn DocumentCache>,
    ) -> AppResult<Self> {
        let auth_service = AuthService::new(
            users,
            Arc::clone(&tokens),
            PasswordHasher::new(&config.auth)?,
            TokenIssuer::new(&config.auth),
            config.cache.token_ttl(),
        );
        let upload_service = UploadService::new(tokens, documents, cache);

        Ok(Self::new(config, Arc::new(auth_service), Arc::new(upload_service)))
    }

    /// Report `check` in `/api/health`.
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
