//! Document upload.

pub mod upload;

pub use upload::{UploadOutcome, UploadRequest, UploadService, UploadedFile};
