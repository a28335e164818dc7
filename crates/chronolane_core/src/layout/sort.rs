//! Interval processing orders.

use crate::model::item::NormalizedItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Order in which items are fed to the track allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Earlier start first; ties put the longer item first.
    Ascending,
    /// Later start first; ties put the shorter item first.
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Compares two items under this order.
    pub fn compare(self, a: &NormalizedItem, b: &NormalizedItem) -> Ordering {
        match self {
            Self::Ascending => compare_ascending(a, b),
            Self::Descending => compare_descending(a, b),
        }
    }
}

/// Earlier `start` first, then larger `end` first.
pub fn compare_ascending(a: &NormalizedItem, b: &NormalizedItem) -> Ordering {
    a.start
        .timeline_cmp(&b.start)
        .then_with(|| b.end.timeline_cmp(&a.end))
}

/// Later `start` first, then smaller `end` first.
pub fn compare_descending(a: &NormalizedItem, b: &NormalizedItem) -> Ordering {
    b.start
        .timeline_cmp(&a.start)
        .then_with(|| a.end.timeline_cmp(&b.end))
}

/// Returns item indices in processing order.
///
/// The sort is stable, so exact duplicates keep their input order.
pub fn sorted_indices(items: &[NormalizedItem], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| order.compare(&items[a], &items[b]));
    indices
}
