//! Chart rendering backends.
//!
//! Provides [`SvgBarChartRenderer`], the production implementation of
//! [`crate::domain::chart::ChartRenderer`].

mod svg_bar_chart;

pub use svg_bar_chart::{ChartDimensions, SvgBarChartRenderer};
