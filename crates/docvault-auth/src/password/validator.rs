//! Shape rules for logins and passwords.

use thiserror::Error;

use docvault_core::error::AppError;

/// Minimum length of a login, in bytes.
pub const MIN_LOGIN_LENGTH: usize = 8;

/// Minimum length of a password, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A credential that violates the policy. Only the first violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("login must be at least 8 characters long")]
    ShortLogin,
    #[error("login must contain only latin letters and digits")]
    InvalidLogin,
    #[error("password must be at least 8 characters long")]
    ShortPassword,
    #[error("password must contain at least one uppercase letter")]
    MissingUpper,
    #[error("password must contain at least one lowercase letter")]
    MissingLower,
    #[error("password must contain at least one digit")]
    MissingDigit,
    #[error("password must contain at least one special character")]
    MissingSpecial,
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Validates login and password shape before registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPolicy;

impl CredentialPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Check length first, then the `[A-Za-z0-9]` alphabet.
    pub fn validate_login(&self, login: &str) -> Result<(), CredentialError> {
        if login.len() < MIN_LOGIN_LENGTH {
            return Err(CredentialError::ShortLogin);
        }

        if !login.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CredentialError::InvalidLogin);
        }

        Ok(())
    }

    /// Check length, then require upper, lower, digit and special in that order.
    pub fn validate_password(&self, password: &str) -> Result<(), CredentialError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(CredentialError::ShortPassword);
        }

        let (mut upper, mut lower, mut digit, mut special) = (false, false, false, false);
        for c in password.chars() {
            match c {
                'A'..='Z' => upper = true,
                'a'..='z' => lower = true,
                '0'..='9' => digit = true,
                _ => special = true,
            }
        }

        if !upper {
            Err(CredentialError::MissingUpper)
        } else if !lower {
            Err(CredentialError::MissingLower)
        } else if !digit {
            Err(CredentialError::MissingDigit)
        } else if !special {
            Err(CredentialError::MissingSpecial)
        } else {
            Ok(())
        }
    }
}
