//! Application error type and its HTTP representation.
//!
//! Every handler returns [`AppError`] on failure. Domain errors
//! ([`DatasetError`], [`ChartError`]) are converted at the service boundary,
//! tagged with the upload they came from where that applies.
//!
//! # Response Body
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Malformed JSON",
//!     "details": { "upload": "file1", "line": 1, "column": 2 }
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::chart::ChartError;
use crate::domain::entities::DatasetError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    PayloadTooLarge { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn payload_too_large(message: impl Into<String>, details: Value) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts a dataset error raised while reading the upload named `upload`.
    pub fn from_dataset(upload: &str, err: DatasetError) -> Self {
        match err {
            DatasetError::InvalidJson(e) => AppError::bad_request(
                "Malformed JSON",
                json!({ "upload": upload, "line": e.line(), "column": e.column(), "reason": e.to_string() }),
            ),
            DatasetError::MissingType { index } => AppError::bad_request(
                "Resource record is missing its type",
                json!({ "upload": upload, "index": index }),
            ),
            DatasetError::ResourcesNotArray => AppError::bad_request(
                "The resources field must be an array",
                json!({ "upload": upload }),
            ),
            DatasetError::UnexpectedShape { expected, found } => AppError::bad_request(
                "Unexpected dataset shape",
                json!({ "upload": upload, "expected": expected.as_str(), "found": found.as_str() }),
            ),
        }
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::internal("Chart rendering failed", json!({ "reason": err.to_string() }))
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large("Upload is too large", json!({}))
        } else {
            AppError::bad_request("Invalid multipart upload", json!({ "reason": err.body_text() }))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::PayloadTooLarge { message, details } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
