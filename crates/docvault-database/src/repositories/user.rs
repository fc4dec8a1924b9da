//! User repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::timeout::with_timeout;
use docvault_core::traits::CredentialStore;

use crate::connection::DatabasePool;

/// Repository for the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
    timeout: Duration,
}

impl UserRepository {
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
            timeout: db.query_timeout(),
        }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn create_user(&self, login: &str, password_hash: &str) -> AppResult<()> {
        let insert = async {
            let result = sqlx::query("INSERT INTO users (login, password_hash) VALUES ($1, $2)")
                .bind(login)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                        warn!(login = %login, "Duplicate login on insert");
                        AppError::conflict("user already exists")
                    }
                    _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
                })?;

            if result.rows_affected() == 0 {
                return Err(AppError::database("Failed to create user: no rows affected"));
            }
            Ok(())
        };

        with_timeout(self.timeout, "create user", insert).await?;

        info!(login = %login, "User created");
        Ok(())
    }

    async fn find_password_hash(&self, login: &str) -> AppResult<Option<String>> {
        let select = async {
            sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE login = $1")
                .bind(login)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to fetch password hash", e)
                })
        };

        with_timeout(self.timeout, "find password hash", select).await
    }
}
