//! Domain layer containing the counting and alignment logic.
//!
//! Nothing here touches HTTP, templates or a drawing backend.
//!
//! # Architecture
//!
//! - [`entities`] - Datasets, counts and label sets
//! - [`display_label`] - Fixed table of short display names
//! - [`summary`] - Plain-text count listing
//! - [`chart`] - Chart rendering contract implemented by infrastructure
//!
//! # Comparison Flow
//!
//! 1. Each upload is parsed into a [`entities::RawDataset`]
//! 2. The dataset shape selects a [`entities::CountStrategy`]
//! 3. Both label sets are merged into [`entities::AllLabels`]
//! 4. Both counts are zero-filled over the merged labels
//! 5. Charts are drawn via [`chart::ChartRenderer`]

pub mod chart;
pub mod display_label;
pub mod entities;
pub mod summary;
