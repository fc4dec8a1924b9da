//! Per-operation deadlines for calls to external stores.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;
use crate::result::AppResult;

/// Run `fut` with a deadline.
///
/// An elapsed deadline becomes a
/// [`ErrorKind::ServiceUnavailable`](crate::ErrorKind::ServiceUnavailable)
/// error naming `operation`; the future is dropped, which cancels it.
pub async fn with_timeout<T, F>(limit: Duration, operation: &str, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::service_unavailable(format!(
            "{operation} timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
