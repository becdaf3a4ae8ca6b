//! Vertical bar charts drawn with the plotters SVG backend.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use plotters::prelude::*;
use std::fmt::Display;

use crate::domain::chart::{ChartError, ChartRenderer, EncodedChart};
use crate::domain::display_label::display_label;
use crate::domain::entities::ResourceCount;

const FONT: &str = "sans-serif";
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const X_LABEL_AREA: u32 = 120;
const Y_LABEL_AREA: u32 = 50;
/// Highest y-axis bound. plotters' integer tick search multiplies its step by
/// ten, which overflows `u64` for ranges close to `u64::MAX`.
const Y_AXIS_CAP: u64 = 1_000_000_000_000_000;

/// Fixed output size of a chart in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

/// Renders resource counts as an SVG bar chart.
///
/// Every call draws onto a fresh in-memory SVG buffer; the renderer itself
/// only holds the output dimensions and can be shared across threads.
///
/// # Chart Layout
///
/// - One bar per entry, in the count's iteration order
/// - X axis: "Resource Type", tick labels rotated 90°
/// - Y axis: "Count", integer ticks starting at 0; counts above
///   10^15 are drawn as full-height bars
#[derive(Debug, Clone, Default)]
pub struct SvgBarChartRenderer {
    dimensions: ChartDimensions,
}

impl SvgBarChartRenderer {
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> ChartDimensions {
        self.dimensions
    }

    /// Draws the chart and returns the raw SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Drawing`] if any plotters drawing step fails.
    pub fn render_svg(
        &self,
        counts: &ResourceCount,
        apply_display_mapping: bool,
    ) -> Result<String, ChartError> {
        let labels: Vec<String> = counts
            .iter()
            .map(|(resource_type, _)| {
                if apply_display_mapping {
                    display_label(resource_type).to_string()
                } else {
                    resource_type.to_string()
                }
            })
            .collect();
        // An empty chart still needs a non-degenerate axis.
        let slots = labels.len().max(1);
        let y_max = counts.max_count().max(1).saturating_add(1).min(Y_AXIS_CAP);
        let values: Vec<u64> = counts
            .iter()
            .map(|(_, count)| count.min(y_max - 1))
            .collect();

        let size = (self.dimensions.width, self.dimensions.height);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(X_LABEL_AREA)
                .y_label_area_size(Y_LABEL_AREA)
                .build_cartesian_2d((0..slots).into_segmented(), 0u64..y_max)
                .map_err(drawing_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(slots)
                .x_label_formatter(&|value| tick_label(&labels, value))
                .x_label_style((FONT, 11).into_font().transform(FontTransform::Rotate90))
                .y_label_formatter(&|value| value.to_string())
                .x_desc("Resource Type")
                .y_desc("Count")
                .axis_desc_style((FONT, 13))
                .draw()
                .map_err(drawing_error)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(BAR_COLOR.filled())
                        .margin(6)
                        .data(values.iter().enumerate().map(|(i, count)| (i, *count))),
                )
                .map_err(drawing_error)?;

            root.present().map_err(drawing_error)?;
        }

        Ok(svg)
    }
}

impl ChartRenderer for SvgBarChartRenderer {
    fn render(
        &self,
        counts: &ResourceCount,
        apply_display_mapping: bool,
    ) -> Result<EncodedChart, ChartError> {
        let svg = self.render_svg(counts, apply_display_mapping)?;
        Ok(EncodedChart::svg(STANDARD.encode(svg)))
    }
}

fn tick_label(labels: &[String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

fn drawing_error(err: impl Display) -> ChartError {
    ChartError::Drawing(err.to_string())
}
