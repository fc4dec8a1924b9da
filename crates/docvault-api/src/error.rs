//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use docvault_core::error::{AppError, ErrorKind};

/// Text returned for every failure that is not the client's fault.
pub const INTERNAL_ERROR_TEXT: &str = "internal server error";

/// Standard API error envelope: `{"error":{"code":..,"text":..}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    pub text: String,
}

/// Error type returned by every handler and extractor.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(AppError::validation(message))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::authentication(message))
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Cache
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        let text = if err.kind.is_client_error() {
            err.message
        } else {
            tracing::error!(kind = %err.kind, error = %err, source = ?err.source, "Request failed");
            INTERNAL_ERROR_TEXT.to_string()
        };

        error_response(status, text)
    }
}

/// The error envelope with an explicit status, for failures raised outside
/// the handlers.
pub fn error_response(status: StatusCode, text: impl Into<String>) -> Response {
    let body = ApiErrorResponse {
        error: ErrorBody {
            code: status.as_u16(),
            text: text.into(),
        },
    };

    (status, Json(body)).into_response()
}
