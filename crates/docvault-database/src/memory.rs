//! In-process store implementations for development and tests.
//!
//! They honour the same contracts as the Postgres repositories: a duplicate
//! login is a conflict and a document is stored together with its grants.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::{CredentialStore, DocumentStore};
use docvault_core::types::{Document, DocumentId};

/// Users keyed by login.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, String>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, login: &str) -> bool {
        self.users.contains_key(login)
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn create_user(&self, login: &str, password_hash: &str) -> AppResult<()> {
        match self.users.entry(login.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict("login already exists")),
            Entry::Vacant(slot) => {
                slot.insert(password_hash.to_string());
                Ok(())
            }
        }
    }

    async fn find_password_hash(&self, login: &str) -> AppResult<Option<String>> {
        Ok(self.users.get(login).map(|hash| hash.value().clone()))
    }
}

/// Documents keyed by id.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<DocumentId, Document>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        self.documents.get(id).map(|doc| doc.value().clone())
    }

    /// Documents owned by `login`, oldest first.
    pub fn owned_by(&self, login: &str) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .documents
            .iter()
            .filter(|doc| doc.login == login)
            .map(|doc| doc.value().clone())
            .collect();
        docs.sort_by_key(|doc| doc.created_at);
        docs
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save_document(&self, document: &Document) -> AppResult<()> {
        match self.documents.entry(document.id) {
            Entry::Occupied(_) => Err(AppError::database(format!(
                "Document {} already exists",
                document.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(document.clone());
                Ok(())
            }
        }
    }
}
