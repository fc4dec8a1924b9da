//! Embedded schema migrations for the users, documents and grants tables.

use sqlx::PgPool;
use tracing::{error, info};

use docvault_core::error::{AppError, ErrorKind};

/// Tables the stores write to.
pub const REQUIRED_TABLES: [&str; 3] = ["users", "documents", "documents_grants"];

/// Apply pending migrations, then confirm the store tables are present.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(available = migrator.iter().count(), "Applying DocVault schema migrations");

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Schema migration failed", e)
    })?;

    let present: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = ANY($1)",
    )
    .bind(&REQUIRED_TABLES[..])
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Schema check failed", e))?;

    let missing = missing_tables(&present);
    if !missing.is_empty() {
        error!(?missing, "Schema is missing store tables after migration");
        return Err(AppError::database(format!(
            "missing tables after migration: {}",
            missing.join(", ")
        )));
    }

    info!(tables = ?REQUIRED_TABLES, "DocVault schema ready");
    Ok(())
}

/// Required tables not found in `present`.
pub fn missing_tables(present: &[String]) -> Vec<&'static str> {
    REQUIRED_TABLES
        .into_iter()
        .filter(|table| !present.iter().any(|p| p == table))
        .collect()
}
