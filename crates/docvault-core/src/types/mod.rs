//! Domain types shared across crates.

pub mod document;
pub mod id;

pub use document::{Document, DocumentMeta};
pub use id::DocumentId;
