//! Raw item normalization.

use super::parse::parse;
use crate::model::item::{ItemError, NormalizedItem, RawItem, FIELD_END, FIELD_START};
use crate::model::time_point::TimePoint;
use chrono::{Days, NaiveDate};
use log::debug;

/// Synthetic span given to instants: 100 years of 366 days.
pub const INSTANT_OFFSET_DAYS: u64 = 100 * 366;

/// Offset added to an instant's start to give it a comparable interval.
///
/// The span exists only for lane packing; renderers draw instants as
/// fixed-width markers.
pub fn instant_offset() -> Days {
    Days::new(INSTANT_OFFSET_DAYS)
}

/// Normalizes one raw item against the captured `now`.
///
/// # Contract
/// - Empty `end`: `end = start + instant_offset()`, `instant = true`.
/// - `end` after `now` is clamped to `now`; so is a future `start`.
/// - The returned item has no track yet.
///
/// # Errors
/// - `MissingField` when `start` is absent or blank.
/// - `InvalidDate` when `start` or `end` cannot be parsed.
/// - `InvertedInterval` when a parsed `end` precedes `start`.
pub fn normalize_item(raw: &RawItem, now: NaiveDate) -> Result<NormalizedItem, ItemError> {
    let start = parse(raw.required_start()?).map_err(|source| ItemError::InvalidDate {
        field: FIELD_START,
        source,
    })?;

    let instant = raw.is_instant();
    let end = if instant {
        // Overflow only happens far beyond `now`, where the clamp applies anyway.
        start.checked_add_days(instant_offset())
    } else {
        let end = parse(raw.end.as_str()).map_err(|source| ItemError::InvalidDate {
            field: FIELD_END,
            source,
        })?;
        if start.is_after(&end) {
            return Err(ItemError::InvertedInterval { start, end });
        }
        Some(end)
    };

    let now_point = TimePoint::day(now);
    let end = match end {
        Some(end) if !end.is_after(&now_point) => end,
        _ => {
            debug!(
                "event=item_clamp module=date field=end label_len={} now={}",
                raw.label.len(),
                now
            );
            now_point
        }
    };
    let start = if start.is_after(&now_point) {
        debug!(
            "event=item_clamp module=date field=start label_len={} now={}",
            raw.label.len(),
            now
        );
        now_point
    } else {
        start
    };

    Ok(NormalizedItem {
        label: raw.label.clone(),
        start,
        end,
        instant,
        track: None,
    })
}
