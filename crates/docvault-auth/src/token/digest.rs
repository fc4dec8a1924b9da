//! Lookup hashing and timing-safe comparison.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hex-encoded SHA-256 of the token; used as the token store key.
pub fn derive_lookup_hash(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Compare two secrets without short-circuiting on the first differing byte.
///
/// Inputs of different length compare unequal; only the length is leaked.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hash_is_hex_sha256() {
        assert_eq!(
            derive_lookup_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(derive_lookup_hash("token").len(), 64);
    }

    #[test]
    fn test_lookup_hash_distinguishes_tokens() {
        assert_eq!(derive_lookup_hash("tokenA"), derive_lookup_hash("tokenA"));
        assert_ne!(derive_lookup_hash("tokenA"), derive_lookup_hash("tokenB"));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abcd"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(constant_time_eq("", ""));
    }
}
