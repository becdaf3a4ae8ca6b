//! Comparison result page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Multipart, State};

use crate::application::services::ComparisonReport;
use crate::domain::display_label::display_label;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::upload::compare_uploads;

/// One row of the first upload's count table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub resource_type: String,
    pub label: String,
    pub count: u64,
}

/// Template for the comparison result page.
///
/// Renders `templates/result.html` with:
/// - Both charts as `data:` URIs
/// - The first upload's counts, limited to types it contains
/// - The plain-text summary of those counts
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub graph1: String,
    pub graph2: String,
    pub resource_counts1: Vec<CountRow>,
    pub summary: String,
}

impl From<ComparisonReport> for ResultTemplate {
    fn from(report: ComparisonReport) -> Self {
        let resource_counts1 = report
            .first_only
            .iter()
            .map(|(resource_type, count)| CountRow {
                resource_type: resource_type.to_string(),
                label: display_label(resource_type).to_string(),
                count,
            })
            .collect();

        Self {
            graph1: report.first_chart.data_uri(),
            graph2: report.second_chart.data_uri(),
            resource_counts1,
            summary: report.summary,
        }
    }
}

/// Compares the uploaded files and renders the result page.
///
/// # Endpoint
///
/// `POST /`
///
/// # Errors
///
/// Upload and comparison failures are returned as JSON [`AppError`]
/// responses; see [`crate::api::handlers::compare_handler`].
pub async fn result_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ResultTemplate, AppError> {
    let report = compare_uploads(&state, multipart).await?;
    Ok(report.into())
}
