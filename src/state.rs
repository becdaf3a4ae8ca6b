//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ComparisonService;
use crate::infrastructure::charts::SvgBarChartRenderer;

/// Services shared by all requests.
///
/// Cloned per request by axum; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub comparison_service: Arc<ComparisonService<SvgBarChartRenderer>>,
}

impl AppState {
    pub fn new(comparison_service: Arc<ComparisonService<SvgBarChartRenderer>>) -> Self {
        Self { comparison_service }
    }
}
