//! Document repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::timeout::with_timeout;
use docvault_core::traits::DocumentStore;
use docvault_core::types::Document;

use crate::connection::DatabasePool;

/// Repository for the `documents` and `documents_grants` tables.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
    timeout: Duration,
}

impl DocumentRepository {
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
            timeout: db.query_timeout(),
        }
    }

    async fn insert_with_grants(&self, document: &Document) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "INSERT INTO documents (id, login, name, mime, is_file, is_public, content, json, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(document.id)
        .bind(&document.login)
        .bind(&document.name)
        .bind(&document.mime)
        .bind(document.is_file)
        .bind(document.is_public)
        .bind(document.content.as_deref())
        .bind(document.json.as_deref())
        .bind(document.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert document", e))?;

        for grantee in &document.grant {
            sqlx::query("INSERT INTO documents_grants (doc_id, grantee_login) VALUES ($1, $2)")
                .bind(document.id)
                .bind(grantee)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to insert document grant", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit document", e)
        })
    }
}

#[async_trait]
impl DocumentStore for DocumentRepository {
    async fn save_document(&self, document: &Document) -> AppResult<()> {
        // The transaction rolls back when dropped, including on timeout.
        with_timeout(self.timeout, "save document", self.insert_with_grants(document)).await?;

        info!(
            document_id = %document.id,
            login = %document.login,
            grants = document.grant.len(),
            "Document saved"
        );
        Ok(())
    }
}
