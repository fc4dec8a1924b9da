//! Random token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

use docvault_core::config::auth::AuthConfig;
use docvault_core::error::{AppError, ErrorKind};

/// Draw `length_bytes` from the OS CSPRNG and encode them.
pub fn generate_token(length_bytes: usize) -> Result<String, AppError> {
    let mut buf = vec![0u8; length_bytes];
    OsRng.try_fill_bytes(&mut buf).map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Random source failure", e)
    })?;

    Ok(URL_SAFE_NO_PAD.encode(&buf))
}

/// Issues tokens of the configured length.
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    length_bytes: usize,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_length(config.token_length_bytes)
    }

    pub fn with_length(length_bytes: usize) -> Self {
        Self { length_bytes }
    }

    pub fn issue(&self) -> Result<String, AppError> {
        generate_token(self.length_bytes)
    }
}
