//! Credential policy and password hashing.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::{CredentialError, CredentialPolicy};
