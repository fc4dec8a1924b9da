//! # docvault-core
//!
//! Core crate for DocVault. Contains the store capability traits,
//! configuration schemas, the document model, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod timeout;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
