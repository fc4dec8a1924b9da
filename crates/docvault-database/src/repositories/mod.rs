//! Relational store implementations.

pub mod document;
pub mod user;

pub use document::DocumentRepository;
pub use user::UserRepository;
