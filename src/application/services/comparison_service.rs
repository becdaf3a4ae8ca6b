//! Side-by-side comparison of two resource inventories.

use std::sync::Arc;

use crate::domain::chart::{ChartRenderer, EncodedChart};
use crate::domain::entities::{AllLabels, DatasetShape, RawDataset, ResourceCount};
use crate::domain::summary::summary_text;
use crate::error::AppError;

/// Form field name of the first upload.
pub const FIRST_UPLOAD: &str = "file1";
/// Form field name of the second upload.
pub const SECOND_UPLOAD: &str = "file2";

/// Which shapes each upload may have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Each upload's shape is detected independently.
    #[default]
    Detect,
    /// The first upload must be object-form and the second list-form.
    Strict,
}

/// Everything a result page or API response needs for one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Sorted union of both uploads' resource types.
    pub labels: Vec<String>,
    /// First upload's counts, zero-filled over `labels`.
    pub first: ResourceCount,
    /// Second upload's counts, zero-filled over `labels`.
    pub second: ResourceCount,
    /// First upload's counts restricted to the types it actually contains.
    pub first_only: ResourceCount,
    /// Text listing of `first_only`.
    pub summary: String,
    pub first_chart: EncodedChart,
    pub second_chart: EncodedChart,
}

/// Service that turns two raw uploads into a [`ComparisonReport`].
///
/// Stateless apart from the renderer and shape policy, so a single instance
/// is shared by all requests.
pub struct ComparisonService<R: ChartRenderer> {
    renderer: Arc<R>,
    shape_policy: ShapePolicy,
}

impl<R: ChartRenderer> ComparisonService<R> {
    /// Creates a new comparison service.
    pub fn new(renderer: Arc<R>, shape_policy: ShapePolicy) -> Self {
        Self {
            renderer,
            shape_policy,
        }
    }

    pub fn shape_policy(&self) -> ShapePolicy {
        self.shape_policy
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Compares two uploaded JSON documents.
    ///
    /// # Flow
    ///
    /// 1. Parse both uploads and detect their shapes
    /// 2. Enforce [`ShapePolicy::Strict`] if configured
    /// 3. Count each upload with the strategy for its shape
    /// 4. Merge the types named in both uploads and zero-fill both counts
    /// 5. Render one chart per upload with display labels applied
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an upload is not valid JSON, has a
    /// record without `type` in object form, or violates the shape policy.
    /// Returns [`AppError::Internal`] if chart rendering fails.
    pub fn compare(&self, first: &[u8], second: &[u8]) -> Result<ComparisonReport, AppError> {
        let first_dataset = self.read(FIRST_UPLOAD, first, DatasetShape::Object)?;
        let second_dataset = self.read(SECOND_UPLOAD, second, DatasetShape::List)?;

        let first_counts = first_dataset
            .count()
            .map_err(|e| AppError::from_dataset(FIRST_UPLOAD, e))?;
        let second_counts = second_dataset
            .count()
            .map_err(|e| AppError::from_dataset(SECOND_UPLOAD, e))?;

        let first_labels = first_dataset.labels();
        let all_labels = AllLabels::union(&first_labels, &second_dataset.labels());

        let first_aligned = first_counts.aligned_to(&all_labels);
        let second_aligned = second_counts.aligned_to(&all_labels);
        let first_only = first_aligned.restricted_to(&first_labels);

        tracing::debug!(
            first_shape = %first_dataset.shape(),
            second_shape = %second_dataset.shape(),
            labels = all_labels.len(),
            "Aligned resource counts"
        );

        let first_chart = self.renderer.render(&first_aligned, true)?;
        let second_chart = self.renderer.render(&second_aligned, true)?;

        Ok(ComparisonReport {
            labels: all_labels.into_vec(),
            summary: summary_text(&first_only),
            first: first_aligned,
            second: second_aligned,
            first_only,
            first_chart,
            second_chart,
        })
    }

    fn read(
        &self,
        upload: &str,
        bytes: &[u8],
        strict_shape: DatasetShape,
    ) -> Result<RawDataset, AppError> {
        let dataset =
            RawDataset::from_slice(bytes).map_err(|e| AppError::from_dataset(upload, e))?;

        if self.shape_policy == ShapePolicy::Strict {
            dataset
                .expect_shape(strict_shape)
                .map_err(|e| AppError::from_dataset(upload, e))?;
        }

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartError, MockChartRenderer};
    use serde_json::json;

    fn chart(tag: &str) -> EncodedChart {
        EncodedChart::svg(tag)
    }

    fn renderer_returning_ok(times: usize) -> MockChartRenderer {
        let mut mock = MockChartRenderer::new();
        mock.expect_render()
            .times(times)
            .returning(|counts, _| Ok(chart(&counts.len().to_string())));
        mock
    }

    fn service(
        mock: MockChartRenderer,
        policy: ShapePolicy,
    ) -> ComparisonService<MockChartRenderer> {
        ComparisonService::new(Arc::new(mock), policy)
    }

    fn entries(counts: &ResourceCount) -> Vec<(&str, u64)> {
        counts.iter().collect()
    }

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_compare_same_type_in_both_uploads() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!({
            "resources": [{ "type": "azurerm_subnet" }, { "type": "azurerm_subnet" }]
        }));
        let second = bytes(json!([{ "type": "azurerm_subnet", "count": 5 }]));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(report.labels, vec!["azurerm_subnet"]);
        assert_eq!(entries(&report.first), vec![("azurerm_subnet", 2)]);
        assert_eq!(entries(&report.second), vec![("azurerm_subnet", 5)]);
        assert_eq!(entries(&report.first_only), vec![("azurerm_subnet", 2)]);
        assert_eq!(report.summary, "azurerm_subnet: 2\n");
    }

    #[test]
    fn test_compare_disjoint_labels_zero_fill() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!({ "resources": [{ "type": "A" }] }));
        let second = bytes(json!([{ "type": "B", "count": 3 }]));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(report.labels, vec!["A", "B"]);
        assert_eq!(entries(&report.first), vec![("A", 1), ("B", 0)]);
        assert_eq!(entries(&report.second), vec![("A", 0), ("B", 3)]);
        assert_eq!(entries(&report.first_only), vec![("A", 1)]);
    }

    #[test]
    fn test_compare_keeps_uncounted_list_form_types() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!({ "resources": [{ "type": "A" }] }));
        let second = bytes(json!([{ "type": "B" }]));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(report.labels, vec!["A", "B"]);
        assert_eq!(entries(&report.first), vec![("A", 1), ("B", 0)]);
        assert_eq!(entries(&report.second), vec![("A", 0), ("B", 0)]);
        assert_eq!(entries(&report.first_only), vec![("A", 1)]);
    }

    #[test]
    fn test_compare_first_only_includes_uncounted_first_types() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!([{ "type": "a", "count": 2 }, { "type": "b" }]));
        let second = bytes(json!([]));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(entries(&report.first_only), vec![("a", 2), ("b", 0)]);
        assert_eq!(report.summary, "a: 2\nb: 0\n");
    }

    #[test]
    fn test_compare_sorts_labels_case_insensitively() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!({ "resources": [{ "type": "Beta" }] }));
        let second = bytes(json!([{ "type": "alpha", "count": 1 }]));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(report.labels, vec!["alpha", "Beta"]);
        assert_eq!(entries(&report.first_only), vec![("Beta", 1)]);
    }

    #[test]
    fn test_compare_renders_aligned_counts_with_display_mapping() {
        let mut mock = MockChartRenderer::new();
        mock.expect_render()
            .withf(|counts, apply| *apply && counts.len() == 2)
            .times(2)
            .returning(|_, _| Ok(chart("ok")));

        let service = ComparisonService::new(Arc::new(mock), ShapePolicy::Detect);

        let first = bytes(json!({ "resources": [{ "type": "x" }] }));
        let second = bytes(json!([{ "type": "y", "count": 1 }]));

        let report = service.compare(&first, &second).unwrap();
        assert_eq!(report.first_chart, chart("ok"));
        assert_eq!(report.second_chart, chart("ok"));
    }

    #[test]
    fn test_compare_detects_shapes_independently() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Detect);

        let first = bytes(json!([{ "type": "a", "count": 4 }]));
        let second = bytes(json!({ "resources": [{ "type": "a" }] }));

        let report = service.compare(&first, &second).unwrap();

        assert_eq!(entries(&report.first), vec![("a", 4)]);
        assert_eq!(entries(&report.second), vec![("a", 1)]);
    }

    #[test]
    fn test_compare_strict_rejects_swapped_shapes() {
        let service = service(renderer_returning_ok(0), ShapePolicy::Strict);

        let first = bytes(json!([{ "type": "a", "count": 4 }]));
        let second = bytes(json!([{ "type": "a", "count": 1 }]));

        let err = service.compare(&first, &second).unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["upload"], "file1");
                assert_eq!(details["expected"], "object-form");
                assert_eq!(details["found"], "list-form");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_compare_strict_accepts_expected_shapes() {
        let service = service(renderer_returning_ok(2), ShapePolicy::Strict);

        let first = bytes(json!({ "resources": [] }));
        let second = bytes(json!([]));

        let report = service.compare(&first, &second).unwrap();
        assert!(report.labels.is_empty());
        assert_eq!(report.summary, "");
    }

    #[test]
    fn test_compare_malformed_json_produces_no_charts() {
        let service = service(renderer_returning_ok(0), ShapePolicy::Detect);

        let err = service.compare(b"[]", b"not json").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation { ref details, .. } if details["upload"] == "file2"
        ));
    }

    #[test]
    fn test_compare_missing_type_in_object_form() {
        let service = service(renderer_returning_ok(0), ShapePolicy::Detect);

        let first = bytes(json!({ "resources": [{ "name": "orphan" }] }));

        let err = service.compare(&first, b"[]").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation { ref details, .. } if details["index"] == 0
        ));
    }

    #[test]
    fn test_compare_renderer_failure_is_internal() {
        let mut mock = MockChartRenderer::new();
        mock.expect_render()
            .times(1)
            .returning(|_, _| Err(ChartError::Drawing("boom".to_string())));

        let service = ComparisonService::new(Arc::new(mock), ShapePolicy::Detect);

        let err = service.compare(b"[]", b"[]").unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
