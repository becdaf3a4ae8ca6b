//! Plain-text listing of resource counts.

use std::fmt::Write;

use crate::domain::entities::ResourceCount;

/// Renders one `label: count` line per entry, in mapping order.
///
/// Every line, including the last, ends with `\n`.
pub fn summary_text(counts: &ResourceCount) -> String {
    let mut text = String::new();
    for (resource_type, count) in counts.iter() {
        let _ = writeln!(text, "{resource_type}: {count}");
    }
    text
}
