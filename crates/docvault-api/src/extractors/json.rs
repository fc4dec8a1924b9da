//! JSON body extractor with the uniform error body on rejection.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// Like [`axum::Json`], but malformed, oversized, or unexpected bodies are
/// rejected with `400 invalid request body`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(path = %path, reason = %rejection.body_text(), "Invalid request body");
                Err(ApiError::bad_request("invalid request body"))
            }
        }
    }
}
