//! Handler for the JSON comparison endpoint.

use axum::{Json, extract::Multipart, extract::State};

use crate::api::dto::compare::CompareResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::upload::compare_uploads;

/// Compares two uploaded resource inventories.
///
/// # Endpoint
///
/// `POST /api/compare`
///
/// # Request Body
///
/// `multipart/form-data` with two file fields:
///
/// - `file1` - list-form or object-form JSON
/// - `file2` - list-form or object-form JSON
///
/// # Response
///
/// ```json
/// {
///   "labels": ["azurerm_subnet"],
///   "first": [{ "type": "azurerm_subnet", "label": "subnet", "count": 2 }],
///   "second": [{ "type": "azurerm_subnet", "label": "subnet", "count": 5 }],
///   "first_only": [{ "type": "azurerm_subnet", "label": "subnet", "count": 2 }],
///   "summary": "azurerm_subnet: 2\n",
///   "charts": {
///     "first": { "mime_type": "image/svg+xml", "data": "PHN2Zy..." },
///     "second": { "mime_type": "image/svg+xml", "data": "PHN2Zy..." }
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: missing field, malformed JSON, missing `type` in an
///   object-form record, or a shape rejected by strict mode
/// - 413 Payload Too Large: body exceeds `MAX_UPLOAD_BYTES`
/// - 500 Internal Server Error: chart rendering failed
pub async fn compare_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CompareResponse>, AppError> {
    let report = compare_uploads(&state, multipart).await?;

    tracing::info!("Compared uploads: {} resource types", report.labels.len());

    Ok(Json(report.into()))
}
