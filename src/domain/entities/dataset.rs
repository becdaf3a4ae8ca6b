//! Raw uploaded datasets and shape-aware counting.
//!
//! Two JSON shapes are accepted:
//!
//! - **List form**: `[{"type": "...", "count": 3}, ...]`, pre-aggregated.
//! - **Object form**: `{"resources": [{"type": "..."}, ...]}`, one record per
//!   resource instance.
//!
//! Anything else is unrecognized and counts as empty.

use serde_json::Value;
use std::fmt;

use super::resource_count::{LabelSet, ResourceCount};

/// Errors raised while reading or counting a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Malformed JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Resource at index {index} has no string `type` field")]
    MissingType { index: usize },

    #[error("The `resources` field must be an array")]
    ResourcesNotArray,

    #[error("Expected {expected} dataset, got {found}")]
    UnexpectedShape {
        expected: DatasetShape,
        found: DatasetShape,
    },
}

/// Detected layout of an uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetShape {
    List,
    Object,
    Unrecognized,
}

impl DatasetShape {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetShape::List => "list-form",
            DatasetShape::Object => "object-form",
            DatasetShape::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How records are turned into counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStrategy {
    /// Each record carries its own `count`; a later record for the same type
    /// replaces the earlier one.
    Overwrite,
    /// Each record is one occurrence.
    Additive,
}

impl CountStrategy {
    /// Counts `records` with this strategy.
    ///
    /// # Errors
    ///
    /// [`CountStrategy::Additive`] returns [`DatasetError::MissingType`] for
    /// the first record without a string `type`. [`CountStrategy::Overwrite`]
    /// never fails: incomplete records are skipped.
    pub fn apply(self, records: &[Value]) -> Result<ResourceCount, DatasetError> {
        match self {
            CountStrategy::Overwrite => Ok(count_overwrite(records)),
            CountStrategy::Additive => count_additive(records),
        }
    }
}

fn count_overwrite(records: &[Value]) -> ResourceCount {
    let mut counts = ResourceCount::new();
    for record in records {
        let resource_type = record.get("type").and_then(Value::as_str);
        let count = record.get("count").and_then(Value::as_u64);
        if let (Some(resource_type), Some(count)) = (resource_type, count) {
            counts.set(resource_type, count);
        }
    }
    counts
}

fn count_additive(records: &[Value]) -> Result<ResourceCount, DatasetError> {
    let mut counts = ResourceCount::new();
    for (index, record) in records.iter().enumerate() {
        let resource_type = record
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DatasetError::MissingType { index })?;
        counts.increment(resource_type);
    }
    Ok(counts)
}

/// A parsed upload, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDataset {
    /// Top-level array of `{type, count}` records.
    List(Vec<Value>),
    /// Object with a `resources` field. The field is kept unparsed so that a
    /// non-array value surfaces as an error when counting.
    Object(Value),
    Unrecognized,
}

impl RawDataset {
    /// Parses UTF-8 JSON bytes and detects their shape.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidJson`] if the bytes are not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(records) => RawDataset::List(records),
            Value::Object(mut map) => match map.remove("resources") {
                Some(resources) => RawDataset::Object(resources),
                None => RawDataset::Unrecognized,
            },
            _ => RawDataset::Unrecognized,
        }
    }

    pub fn shape(&self) -> DatasetShape {
        match self {
            RawDataset::List(_) => DatasetShape::List,
            RawDataset::Object(_) => DatasetShape::Object,
            RawDataset::Unrecognized => DatasetShape::Unrecognized,
        }
    }

    /// The counting strategy implied by the shape, if any.
    pub fn strategy(&self) -> Option<CountStrategy> {
        match self {
            RawDataset::List(_) => Some(CountStrategy::Overwrite),
            RawDataset::Object(_) => Some(CountStrategy::Additive),
            RawDataset::Unrecognized => None,
        }
    }

    /// Fails unless the dataset has the `expected` shape.
    pub fn expect_shape(&self, expected: DatasetShape) -> Result<(), DatasetError> {
        let found = self.shape();
        if found == expected {
            Ok(())
        } else {
            Err(DatasetError::UnexpectedShape { expected, found })
        }
    }

    /// Resource types named by the dataset's records.
    ///
    /// Every record with a string `type` contributes, including list-form
    /// records that counting skips for lacking a `count`.
    pub fn labels(&self) -> LabelSet {
        self.records()
            .unwrap_or_default()
            .iter()
            .filter_map(|record| record.get("type").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    /// Tallies resources per type using the strategy for this shape.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::ResourcesNotArray`] if an object-form `resources`
    ///   value is not an array
    /// - [`DatasetError::MissingType`] if an object-form record lacks `type`
    pub fn count(&self) -> Result<ResourceCount, DatasetError> {
        let records = self.records()?;
        match self.strategy() {
            Some(strategy) => strategy.apply(records),
            None => Ok(ResourceCount::new()),
        }
    }

    fn records(&self) -> Result<&[Value], DatasetError> {
        match self {
            RawDataset::List(records) => Ok(records.as_slice()),
            RawDataset::Object(resources) => resources
                .as_array()
                .map(Vec::as_slice)
                .ok_or(DatasetError::ResourcesNotArray),
            RawDataset::Unrecognized => Ok(&[]),
        }
    }
}
