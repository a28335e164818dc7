//! Track-assigned timeline model.
//!
//! # Responsibility
//! - Aggregate normalized items with their lanes and the global date range.
//! - Offer read-only projections used by rendering collaborators.
//!
//! # Invariants
//! - Items keep caller input order, independent of the allocation order.
//! - An empty model has no range at all, never a zero-valued one.
//! - The model is never mutated after construction; changes rebuild it.

use crate::date::format_year;
use crate::model::item::NormalizedItem;
use crate::model::time_point::TimePoint;
use serde::Serialize;

/// Global extent of a non-empty timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Earliest item start.
    pub min: TimePoint,
    /// Latest item end.
    pub max: TimePoint,
}

impl DateRange {
    /// Computes the covering range of `items`, or `None` when empty.
    pub fn covering(items: &[NormalizedItem]) -> Option<Self> {
        let min = items
            .iter()
            .map(|item| item.start)
            .min_by(|a, b| a.timeline_cmp(b))?;
        let max = items
            .iter()
            .map(|item| item.end)
            .max_by(|a, b| a.timeline_cmp(b))?;
        Some(Self { min, max })
    }

    /// Difference between the last and first year of the range.
    pub fn span_years(&self) -> i32 {
        self.max.year() - self.min.year()
    }
}

/// Labels describing a timeline's range, for axis end captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeLabels {
    pub start: String,
    pub end: String,
    pub span_years: i32,
}

/// Normalized, track-assigned timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineModel {
    items: Vec<NormalizedItem>,
    track_count: usize,
    range: Option<DateRange>,
}

impl TimelineModel {
    /// Wraps allocated items and derives the covering range.
    pub(crate) fn from_allocated(items: Vec<NormalizedItem>, track_count: usize) -> Self {
        let range = DateRange::covering(&items);
        Self {
            items,
            track_count,
            range,
        }
    }

    /// Items in caller input order.
    pub fn items(&self) -> &[NormalizedItem] {
        &self.items
    }

    /// Number of lanes opened by allocation.
    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Global extent, or `None` for an empty timeline.
    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn span_years(&self) -> Option<i32> {
        self.range.map(|range| range.span_years())
    }

    /// Formats the start/end captions and the span of the timeline.
    pub fn range_labels(&self, marker: &str) -> Option<RangeLabels> {
        self.range.map(|range| RangeLabels {
            start: format_year(&range.min, marker),
            end: format_year(&range.max, marker),
            span_years: range.span_years(),
        })
    }

    /// Items grouped per lane; lane `i` is at index `i`.
    ///
    /// Within a lane, items keep input order.
    pub fn tracks(&self) -> Vec<Vec<&NormalizedItem>> {
        let mut lanes: Vec<Vec<&NormalizedItem>> = vec![Vec::new(); self.track_count];
        for item in &self.items {
            if let Some(lane) = item.track.and_then(|track| lanes.get_mut(track)) {
                lane.push(item);
            }
        }
        lanes
    }

    /// Consumes the model, returning its items.
    pub fn into_items(self) -> Vec<NormalizedItem> {
        self.items
    }
}
