//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, result_handler};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET /` - Upload form
/// - `POST /` - Comparison result page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler).post(result_handler))
}
