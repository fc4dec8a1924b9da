//! Registration and login workflows.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use docvault_auth::password::{CredentialPolicy, PasswordHasher};
use docvault_auth::token::{TokenIssuer, derive_lookup_hash};
use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::{CredentialStore, TokenStore};

/// Response text for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "invalid login or password";

/// Orchestrates credential policy, user persistence and token issuance.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn CredentialStore>,
    tokens: Arc<dyn TokenStore>,
    policy: CredentialPolicy,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    token_ttl: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        tokens: Arc<dyn TokenStore>,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            policy: CredentialPolicy::new(),
            hasher,
            issuer,
            token_ttl,
        }
    }

    /// Register a new user and return its login.
    ///
    /// 1. Validate login shape
    /// 2. Validate password strength
    /// 3. Hash the password
    /// 4. Persist; a taken login is a conflict
    pub async fn register(&self, login: &str, password: &str) -> AppResult<String> {
        // Step 1 + 2: Policy
        self.policy.validate_login(login).inspect_err(|e| {
            warn!(reason = %e, "Registration rejected: login policy");
        })?;
        self.policy.validate_password(password).inspect_err(|e| {
            warn!(login = %login, reason = %e, "Registration rejected: password policy");
        })?;

        // Step 3: Hash off the async executor
        let hasher = self.hasher.clone();
        let plaintext = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hasher.hash_password(&plaintext))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Hashing task failed", e))??;

        // Step 4: Persist
        match self.users.create_user(login, &hash).await {
            Ok(()) => {
                info!(login = %login, "User registered");
                Ok(login.to_string())
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                warn!(login = %login, "Registration rejected: duplicate login");
                Err(AppError::conflict("login already exists"))
            }
            Err(e) => {
                error!(login = %login, error = %e, "Failed to persist user");
                Err(e)
            }
        }
    }

    /// Check credentials and issue a fresh token.
    ///
    /// The raw token is returned once; only its lookup hash is stored.
    pub async fn login(&self, login: &str, password: &str) -> AppResult<String> {
        // Step 1: Fetch the stored hash
        let Some(stored_hash) = self.users.find_password_hash(login).await? else {
            warn!(login = %login, "Login rejected: unknown login");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        // Step 2: Verify off the async executor
        let hasher = self.hasher.clone();
        let plaintext = password.to_string();
        let valid =
            tokio::task::spawn_blocking(move || hasher.verify_password(&stored_hash, &plaintext))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Verification task failed", e)
                })?;

        if !valid {
            warn!(login = %login, "Login rejected: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        // Step 3: Issue and store
        let token = self.issuer.issue()?;
        let token_hash = derive_lookup_hash(&token);
        self.tokens
            .save_token(login, &token_hash, self.token_ttl)
            .await
            .inspect_err(|e| error!(login = %login, error = %e, "Failed to store token"))?;

        info!(login = %login, "Token issued");
        Ok(token)
    }
}
