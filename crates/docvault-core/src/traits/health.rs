//! Readiness checks for backing services.

use async_trait::async_trait;

use crate::result::AppResult;

/// A backing service that can report whether it is reachable.
#[async_trait]
pub trait HealthCheck: Send + Sync + 'static {
    /// Short component name used in the health report.
    fn component(&self) -> &'static str;

    /// `Ok(true)` when the component answered.
    async fn check(&self) -> AppResult<bool>;
}
