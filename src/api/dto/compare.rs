//! DTOs for the comparison endpoint.

use serde::Serialize;

use crate::application::services::ComparisonReport;
use crate::domain::chart::EncodedChart;
use crate::domain::display_label::display_label;
use crate::domain::entities::ResourceCount;

/// One resource type and its count.
#[derive(Debug, Serialize)]
pub struct CountEntry {
    /// Raw resource-type identifier.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Short display name used on chart axes.
    pub label: String,
    pub count: u64,
}

/// Base64-encoded chart image.
#[derive(Debug, Serialize)]
pub struct ChartPayload {
    pub mime_type: &'static str,
    pub data: String,
}

/// Charts for both uploads.
#[derive(Debug, Serialize)]
pub struct ChartPair {
    pub first: ChartPayload,
    pub second: ChartPayload,
}

/// Response for `POST /api/compare`.
///
/// Count arrays follow `labels` order.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub labels: Vec<String>,
    pub first: Vec<CountEntry>,
    pub second: Vec<CountEntry>,
    pub first_only: Vec<CountEntry>,
    pub summary: String,
    pub charts: ChartPair,
}

fn entries(counts: &ResourceCount) -> Vec<CountEntry> {
    counts
        .iter()
        .map(|(resource_type, count)| CountEntry {
            resource_type: resource_type.to_string(),
            label: display_label(resource_type).to_string(),
            count,
        })
        .collect()
}

impl From<EncodedChart> for ChartPayload {
    fn from(chart: EncodedChart) -> Self {
        Self {
            mime_type: chart.mime_type,
            data: chart.data,
        }
    }
}

impl From<ComparisonReport> for CompareResponse {
    fn from(report: ComparisonReport) -> Self {
        Self {
            first: entries(&report.first),
            second: entries(&report.second),
            first_only: entries(&report.first_only),
            labels: report.labels,
            summary: report.summary,
            charts: ChartPair {
                first: report.first_chart.into(),
                second: report.second_chart.into(),
            },
        }
    }
}
