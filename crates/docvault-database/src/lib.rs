//! # docvault-database
//!
//! PostgreSQL connection management and the relational implementations of
//! [`CredentialStore`](docvault_core::traits::CredentialStore) and
//! [`DocumentStore`](docvault_core::traits::DocumentStore), plus in-memory
//! counterparts used in development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::{MemoryDocumentStore, MemoryUserStore};
pub use repositories::{DocumentRepository, UserRepository};
