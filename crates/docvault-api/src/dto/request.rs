//! Request DTOs.

use serde::Deserialize;

/// Body of `POST /api/register` and `POST /api/auth`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsRequest {
    pub login: String,
    pub pswd: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}
