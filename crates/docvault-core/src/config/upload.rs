//! Request body limits.

use serde::{Deserialize, Serialize};

/// Body size caps for the JSON and multipart endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Cap for `POST /api/register` and `POST /api/auth` bodies.
    #[serde(default = "default_max_json_body")]
    pub max_json_body_bytes: usize,
    /// Cap for `POST /api/docs` multipart bodies.
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_json_body_bytes: default_max_json_body(),
            max_upload_bytes: default_max_upload(),
        }
    }
}

fn default_max_json_body() -> usize {
    1 << 20
}

fn default_max_upload() -> usize {
    50 << 20
}
