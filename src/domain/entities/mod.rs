//! Core domain entities for resource tallies.
//!
//! # Entity Types
//!
//! - [`RawDataset`] - An uploaded JSON document classified by shape
//! - [`ResourceCount`] - Per-type counts produced from a dataset
//! - [`LabelSet`] - Resource types observed in one dataset
//! - [`AllLabels`] - Sorted union of both datasets' labels
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod dataset;
pub mod resource_count;

pub use dataset::{CountStrategy, DatasetError, DatasetShape, RawDataset};
pub use resource_count::{AllLabels, LabelSet, ResourceCount};
