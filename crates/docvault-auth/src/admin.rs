//! Static administrator credential.

use crate::token::constant_time_eq;

/// Holds the admin bearer credential required to register users.
#[derive(Clone)]
pub struct AdminGuard {
    token: String,
}

impl std::fmt::Debug for AdminGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGuard").finish_non_exhaustive()
    }
}

impl AdminGuard {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Whether `presented` is the admin credential. An unset credential
    /// admits nobody.
    pub fn is_admin(&self, presented: &str) -> bool {
        !self.token.is_empty() && constant_time_eq(presented, &self.token)
    }
}
