//! Core timeline layout for chronolane.
//! Normalizes heterogeneous date notations onto one proleptic axis and
//! packs items into display tracks.

pub mod config;
pub mod date;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, TimelineConfig};
pub use date::{
    format_year, instant_offset, normalize_item, parse, DateError, DEFAULT_BC_MARKER,
    INSTANT_OFFSET_DAYS,
};
pub use layout::sort::{compare_ascending, compare_descending, SortOrder};
pub use layout::tracks::{allocate, TimeOrder, TrackAllocator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemError, NormalizedItem, RawItem};
pub use model::time_point::{Precision, TimePoint};
pub use model::timeline::{DateRange, RangeLabels, TimelineModel};
pub use service::timeline_service::{
    build_timeline, build_timeline_at, TimelineError, TimelineResult, TimelineService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
