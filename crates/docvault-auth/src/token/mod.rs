//! Opaque bearer tokens.
//!
//! A token is `n` random bytes encoded as URL-safe base64 without padding.
//! Only its hex SHA-256 digest is ever stored.

pub mod digest;
pub mod generator;

pub use digest::{constant_time_eq, derive_lookup_hash};
pub use generator::{TokenIssuer, generate_token};
