//! Multipart extraction of the two dataset uploads.

use axum::body::Bytes;
use axum::extract::Multipart;
use serde_json::json;

use crate::application::services::ComparisonReport;
use crate::application::services::comparison_service::{FIRST_UPLOAD, SECOND_UPLOAD};
use crate::error::AppError;
use crate::state::AppState;

/// The raw contents of `file1` and `file2`.
#[derive(Debug, Clone)]
pub struct UploadPair {
    pub first: Bytes,
    pub second: Bytes,
}

impl UploadPair {
    /// Reads both upload fields from a multipart body.
    ///
    /// Unknown fields are drained and ignored. When a field name repeats, the
    /// last occurrence wins.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if either field is missing or the body is not
    ///   valid multipart
    /// - [`AppError::PayloadTooLarge`] if the body exceeds the configured limit
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut first = None;
        let mut second = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            let data = field.bytes().await?;

            match name.as_deref() {
                Some(FIRST_UPLOAD) => first = Some(data),
                Some(SECOND_UPLOAD) => second = Some(data),
                other => tracing::debug!("Ignoring multipart field {:?}", other),
            }
        }

        match (first, second) {
            (Some(first), Some(second)) => Ok(Self { first, second }),
            (first, second) => {
                let mut missing = Vec::new();
                if first.is_none() {
                    missing.push(FIRST_UPLOAD);
                }
                if second.is_none() {
                    missing.push(SECOND_UPLOAD);
                }

                Err(AppError::bad_request(
                    "Both files must be uploaded",
                    json!({ "missing": missing }),
                ))
            }
        }
    }
}

/// Reads both uploads and runs the comparison on the blocking thread pool.
///
/// Shared by the HTML and JSON endpoints.
///
/// # Errors
///
/// Propagates upload errors from [`UploadPair::from_multipart`] and
/// comparison errors from [`crate::application::services::ComparisonService::compare`].
/// Returns [`AppError::Internal`] if the blocking task panics.
pub async fn compare_uploads(
    state: &AppState,
    multipart: Multipart,
) -> Result<ComparisonReport, AppError> {
    let uploads = UploadPair::from_multipart(multipart).await?;
    tracing::debug!(
        first_bytes = uploads.first.len(),
        second_bytes = uploads.second.len(),
        "Received uploads"
    );

    let service = state.comparison_service.clone();
    let result =
        tokio::task::spawn_blocking(move || service.compare(&uploads.first, &uploads.second))
            .await
            .map_err(|e| {
                AppError::internal("Comparison task failed", json!({ "reason": e.to_string() }))
            })?;

    if let Err(ref err) = result {
        tracing::warn!("Rejected upload: {}", err);
    }

    result
}
