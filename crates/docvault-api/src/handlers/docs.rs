//! Document upload handler.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use tracing::warn;

use docvault_service::{UploadRequest, UploadedFile};

use crate::dto::response::{ApiResponse, UploadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/docs: multipart `meta`, optional `json`, and `file` parts.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        warn!(reason = %e.body_text(), "Upload rejected: not a multipart body");
        invalid_form()
    })?;

    let request = read_form(&mut multipart).await.map_err(|e| {
        warn!(status = %e.status(), reason = %e.body_text(), "Upload rejected: invalid form data");
        invalid_form()
    })?;

    let outcome = state.upload_service.upload(request).await?;

    Ok(Json(ApiResponse::ok(UploadResponse {
        json: outcome.json,
        file: outcome.name,
    })))
}

/// Collect the known parts; unknown parts are drained and ignored.
async fn read_form(multipart: &mut Multipart) -> Result<UploadRequest, MultipartError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "meta" => request.meta = Some(field.text().await?),
            "json" => request.json = Some(field.bytes().await?),
            "file" => {
                let file_name = field.file_name().map(String::from);
                let content = field.bytes().await?;
                request.file = Some(UploadedFile { file_name, content });
            }
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok(request)
}

fn invalid_form() -> ApiError {
    ApiError::bad_request("invalid form data")
}
