//! # docvault-auth
//!
//! Pure credential and token primitives for DocVault. Nothing in this crate
//! performs I/O.
//!
//! ## Modules
//!
//! - `password`: login/password policy and Argon2id hashing
//! - `token`: opaque token generation, lookup hashing, constant-time comparison
//! - `admin`: the static administrator credential check

pub mod admin;
pub mod password;
pub mod token;

pub use admin::AdminGuard;
pub use password::{CredentialError, CredentialPolicy, PasswordHasher};
pub use token::{TokenIssuer, constant_time_eq, derive_lookup_hash, generate_token};
