//! Per-type resource tallies and the label sets derived from them.

use indexmap::IndexMap;
use std::collections::HashSet;

/// Occurrence counts keyed by resource-type identifier.
///
/// Iteration follows insertion order. Overwriting an existing key keeps its
/// original position, so a count aligned over [`AllLabels`] iterates in
/// exactly that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCount {
    counts: IndexMap<String, u64>,
}

impl ResourceCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count for `resource_type`, if present.
    pub fn get(&self, resource_type: &str) -> Option<u64> {
        self.counts.get(resource_type).copied()
    }

    /// Sets the count for `resource_type`, replacing any previous value.
    pub fn set(&mut self, resource_type: impl Into<String>, count: u64) {
        self.counts.insert(resource_type.into(), count);
    }

    /// Adds one occurrence of `resource_type`.
    pub fn increment(&mut self, resource_type: &str) {
        match self.counts.get_mut(resource_type) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(resource_type.to_string(), 1);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        self.counts.contains_key(resource_type)
    }

    /// Iterates `(resource_type, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Largest count in the mapping, or 0 when empty.
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Zero-fills the mapping over `labels`.
    ///
    /// The result holds exactly the identifiers of `labels`, in that order.
    /// Identifiers missing from `self` get a count of 0.
    pub fn aligned_to(&self, labels: &AllLabels) -> ResourceCount {
        labels
            .iter()
            .map(|label| (label.to_string(), self.get(label).unwrap_or(0)))
            .collect()
    }

    /// Keeps only the entries whose type is in `labels`, preserving order.
    pub fn restricted_to(&self, labels: &LabelSet) -> ResourceCount {
        self.counts
            .iter()
            .filter(|(k, _)| labels.contains(k))
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}

impl FromIterator<(String, u64)> for ResourceCount {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Resource types observed in a single dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(HashSet<String>);

impl LabelSet {
    pub fn contains(&self, resource_type: &str) -> bool {
        self.0.contains(resource_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for LabelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sorted union of the labels of both datasets.
///
/// Ordering compares the Unicode-lowercased identifiers; identifiers equal
/// under lowercasing fall back to ordinal order so the result is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllLabels(Vec<String>);

impl AllLabels {
    pub fn union(first: &LabelSet, second: &LabelSet) -> Self {
        let merged: HashSet<&str> = first.iter().chain(second.iter()).collect();
        let mut labels: Vec<String> = merged.into_iter().map(str::to_string).collect();
        labels.sort_by_cached_key(|label| (label.to_lowercase(), label.clone()));
        Self(labels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
