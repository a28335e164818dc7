//! Greedy track allocation.
//!
//! # Responsibility
//! - Assign every item a lane with a single first-fit pass.
//! - Report the number of lanes opened.
//!
//! # Invariants
//! - `watermark[t]` holds the start (backward) or end (forward) of the item
//!   most recently placed in lane `t`.
//! - A lane is reused only on a strict comparison against its watermark.
//! - Allocation is sequential; each placement depends on all earlier ones.

use super::sort::{sorted_indices, SortOrder};
use crate::model::item::NormalizedItem;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Direction in which lanes are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOrder {
    /// Younger items end up in deeper lanes.
    Forward,
    /// Older items end up in deeper lanes.
    #[default]
    Backward,
}

impl TimeOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Explicit allocator state: one watermark per opened lane.
#[derive(Debug, Clone, Default)]
pub struct TrackAllocator {
    watermark: Vec<NaiveDate>,
}

impl TrackAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places one interval and returns its lane.
    pub fn place(&mut self, order: TimeOrder, start: NaiveDate, end: NaiveDate) -> usize {
        match order {
            TimeOrder::Forward => self.place_forward(start, end),
            TimeOrder::Backward => self.place_backward(start, end),
        }
    }

    /// First lane whose watermark lies strictly after `end`; the lane's
    /// watermark becomes `start`.
    pub fn place_backward(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        let track = self
            .watermark
            .iter()
            .position(|mark| end < *mark)
            .unwrap_or(self.watermark.len());
        self.set_watermark(track, start);
        track
    }

    /// First lane whose watermark lies strictly before `start`; the lane's
    /// watermark becomes `end`.
    pub fn place_forward(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        let track = self
            .watermark
            .iter()
            .position(|mark| start > *mark)
            .unwrap_or(self.watermark.len());
        self.set_watermark(track, end);
        track
    }

    /// Number of lanes opened so far.
    pub fn track_count(&self) -> usize {
        self.watermark.len()
    }

    pub fn watermarks(&self) -> &[NaiveDate] {
        &self.watermark
    }

    fn set_watermark(&mut self, track: usize, value: NaiveDate) {
        match self.watermark.get_mut(track) {
            Some(mark) => *mark = value,
            None => self.watermark.push(value),
        }
    }
}

/// Assigns a track to every item and returns the track count.
///
/// Items are processed in `sort_order` but the slice itself keeps its
/// order. Re-running overwrites previous assignments.
pub fn allocate(
    items: &mut [NormalizedItem],
    sort_order: SortOrder,
    time_order: TimeOrder,
) -> usize {
    let mut allocator = TrackAllocator::new();
    for index in sorted_indices(items, sort_order) {
        let item = &mut items[index];
        let track = allocator.place(time_order, item.start.date(), item.end.date());
        item.track = Some(track);
    }

    debug!(
        "event=tracks_allocated module=layout items={} tracks={} sort_order={} time_order={}",
        items.len(),
        allocator.track_count(),
        sort_order.as_str(),
        time_order.as_str()
    );
    allocator.track_count()
}
