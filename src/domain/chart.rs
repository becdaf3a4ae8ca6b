//! Chart rendering contract.
//!
//! The domain only decides what goes on a chart: which bars, in which order,
//! under which labels. Drawing is delegated to a [`ChartRenderer`]
//! implementation in the infrastructure layer.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::charts::SvgBarChartRenderer`] - plotters SVG backend
//! - Test mocks available with `cfg(test)`

use crate::domain::entities::ResourceCount;

/// Errors raised while drawing or encoding a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
}

/// A rendered chart, base64-encoded for embedding in HTML or JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChart {
    pub mime_type: &'static str,
    pub data: String,
}

impl EncodedChart {
    pub const SVG_MIME: &'static str = "image/svg+xml";

    /// Wraps base64-encoded SVG text.
    pub fn svg(data: impl Into<String>) -> Self {
        Self {
            mime_type: Self::SVG_MIME,
            data: data.into(),
        }
    }

    /// Formats the chart as a `data:` URI for an `<img src>` attribute.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Draws a vertical bar chart of resource counts.
///
/// Implementations must not keep drawing state between calls: each call
/// acquires its own canvas and releases it before returning.
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer: Send + Sync {
    /// Renders one bar per entry of `counts`, in iteration order.
    ///
    /// When `apply_display_mapping` is true, x-axis labels go through
    /// [`crate::domain::display_label::display_label`]; otherwise the raw
    /// identifiers are shown.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Drawing`] if the backend fails.
    fn render(
        &self,
        counts: &ResourceCount,
        apply_display_mapping: bool,
    ) -> Result<EncodedChart, ChartError>;
}
