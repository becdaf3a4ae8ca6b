//! API route configuration.

use crate::api::handlers::compare_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /compare` - Compare two multipart uploads and return counts and charts
pub fn routes() -> Router<AppState> {
    Router::new().route("/compare", post(compare_handler))
}
