//! Document upload workflow.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, warn};

use docvault_auth::token::derive_lookup_hash;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::{DocumentCache, DocumentStore, TokenStore};
use docvault_core::types::{Document, DocumentId, DocumentMeta};

/// A file part received with an upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, if any.
    pub file_name: Option<String>,
    pub content: Bytes,
}

/// The form fields of an upload, as received.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// Raw `meta` field.
    pub meta: Option<String>,
    /// Raw `json` field, stored verbatim.
    pub json: Option<Bytes>,
    pub file: Option<UploadedFile>,
}

/// What the caller gets back after a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub id: DocumentId,
    /// Stored document name.
    pub name: String,
    /// The JSON payload echoed back, `null` when absent.
    pub json: serde_json::Value,
}

/// Stores uploaded documents for the owner of a bearer token.
#[derive(Clone)]
pub struct UploadService {
    tokens: Arc<dyn TokenStore>,
    documents: Arc<dyn DocumentStore>,
    cache: Arc<dyn DocumentCache>,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish_non_exhaustive()
    }
}

impl UploadService {
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        documents: Arc<dyn DocumentStore>,
        cache: Arc<dyn DocumentCache>,
    ) -> Self {
        Self {
            tokens,
            documents,
            cache,
        }
    }

    /// Validate, authorize and persist one upload.
    ///
    /// Cache population runs in a detached task after the commit and
    /// cannot fail the upload.
    pub async fn upload(&self, request: UploadRequest) -> AppResult<UploadOutcome> {
        // Step 1: Metadata
        let raw_meta = request
            .meta
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::validation("meta required"))?;

        let meta: DocumentMeta = serde_json::from_str(&raw_meta).map_err(|e| {
            warn!(error = %e, "Upload rejected: invalid meta json");
            AppError::validation("invalid meta json")
        })?;

        if !meta.is_identifiable() {
            return Err(AppError::validation("name required"));
        }

        // Step 2: Resolve the owner from the token
        let login = self
            .tokens
            .resolve_login(&derive_lookup_hash(&meta.token))
            .await?
            .ok_or_else(|| {
                warn!("Upload rejected: unknown or expired token");
                AppError::authentication("invalid token")
            })?;

        // Step 3: Build the record; the grant rule is applied here
        let mut document = Document::from_meta(&login, &meta);
        document.json = request.json.filter(|j| !j.is_empty());

        // Step 4: Attach the file
        if meta.file {
            let file = request
                .file
                .filter(|f| !f.content.is_empty())
                .ok_or_else(|| AppError::validation("file is required"))?;

            if document.name.is_empty() {
                document.name = file.file_name.as_deref().map(base_name).unwrap_or_default();
            }
            document.content = Some(file.content);
        }

        // Step 5: Persist document and grants
        self.documents.save_document(&document).await.map_err(|e| {
            error!(document_id = %document.id, login = %login, error = %e, "Failed to save document");
            e
        })?;

        info!(
            document_id = %document.id,
            login = %login,
            is_file = document.is_file,
            is_public = document.is_public,
            "Document uploaded"
        );

        let outcome = UploadOutcome {
            id: document.id,
            name: document.name.clone(),
            json: document.json_echo(),
        };

        // Step 6: Best-effort cache refresh
        document.content = None;
        self.refresh_cache(document);

        Ok(outcome)
    }

    fn refresh_cache(&self, document: Document) {
        let cache = Arc::clone(&self.cache);
        tokio::spawn(async move {
            if let Err(e) = cache.cache_document(&document).await {
                warn!(document_id = %document.id, error = %e, "Failed to cache document");
            }
            if let Err(e) = cache.invalidate_listings(&document.login).await {
                warn!(login = %document.login, error = %e, "Failed to invalidate document listings");
            }
        });
    }
}

/// Last path component of a client-supplied file name.
fn base_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}
