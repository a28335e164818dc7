//! Timeline build use-case.
//!
//! # Responsibility
//! - Run the full pipeline: normalize, allocate tracks, derive the range.
//! - Capture "now" once per build so every clamp in a run agrees.
//!
//! # Invariants
//! - A build either returns a complete model or fails; no partial models.
//! - Model items keep caller input order.
//! - Allocation never runs in parallel; it is order-dependent.

use crate::config::{ConfigError, TimelineConfig};
use crate::date::normalize_item;
use crate::layout::tracks::allocate;
use crate::model::item::{ItemError, NormalizedItem, RawItem};
use crate::model::time_point::TimePoint;
use crate::model::timeline::TimelineModel;
use chrono::{NaiveDate, Utc};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Number of items dumped at debug level after each build.
const DEBUG_PREVIEW_ITEMS: usize = 10;

pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error for a whole timeline build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    Config(ConfigError),
    /// Item at `index` (input order) failed normalization.
    ///
    /// Covers unparseable or missing dates and intervals whose end precedes
    /// their start; any of these fails the whole build.
    Item {
        index: usize,
        label: String,
        source: ItemError,
    },
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid timeline config: {err}"),
            Self::Item {
                index,
                label,
                source,
            } => write!(f, "item #{index} (`{label}`): {source}"),
        }
    }
}

impl Error for TimelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Item { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for TimelineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Builds a timeline, reading the clock once for the "now" clamp.
pub fn build_timeline(items: &[RawItem], config: &TimelineConfig) -> TimelineResult<TimelineModel> {
    build_timeline_at(items, config, Utc::now().date_naive())
}

/// Builds a timeline against an explicit "now".
///
/// # Errors
/// - `Config` when `config` fails validation.
/// - `Item` for the first item that cannot be normalized, including an
///   interval whose `end` precedes its `start`.
pub fn build_timeline_at(
    items: &[RawItem],
    config: &TimelineConfig,
    now: NaiveDate,
) -> TimelineResult<TimelineModel> {
    let started_at = Instant::now();
    info!(
        "event=timeline_build module=service status=start items={} sort_order={} time_order={}",
        items.len(),
        config.sort_order.as_str(),
        config.time_order.as_str()
    );

    let result = config
        .validate()
        .map_err(TimelineError::from)
        .and_then(|()| normalize_all(items, now));
    let mut normalized = match result {
        Ok(normalized) => normalized,
        Err(err) => {
            error!(
                "event=timeline_build module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    let track_count = allocate(&mut normalized, config.sort_order, config.time_order);
    log_preview(&normalized, &config.marker);
    let model = TimelineModel::from_allocated(normalized, track_count);

    info!(
        "event=timeline_build module=service status=ok items={} tracks={} duration_ms={}",
        model.items().len(),
        model.track_count(),
        started_at.elapsed().as_millis()
    );
    Ok(model)
}

fn normalize_all(items: &[RawItem], now: NaiveDate) -> TimelineResult<Vec<NormalizedItem>> {
    items
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize_item(raw, now).map_err(|source| TimelineError::Item {
                index,
                label: raw.label.clone(),
                source,
            })
        })
        .collect()
}

fn log_preview(items: &[NormalizedItem], marker: &str) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for item in items.iter().take(DEBUG_PREVIEW_ITEMS) {
        debug!(
            "event=timeline_item module=service years={} track={:?} instant={}",
            item.year_label(marker),
            item.track,
            item.instant
        );
    }
}

/// Use-case facade holding a validated configuration.
#[derive(Debug, Clone)]
pub struct TimelineService {
    config: TimelineConfig,
}

impl TimelineService {
    /// Creates a service, rejecting invalid configuration up front.
    pub fn new(config: TimelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Normalizes and lays out `items`, replacing any previous model.
    pub fn data(&self, items: &[RawItem]) -> TimelineResult<TimelineModel> {
        build_timeline(items, &self.config)
    }

    /// Same as [`Self::data`] with an explicit "now".
    pub fn data_at(&self, items: &[RawItem], now: NaiveDate) -> TimelineResult<TimelineModel> {
        build_timeline_at(items, &self.config, now)
    }

    /// Formats a point (item bound or axis tick) as a year label.
    pub fn format_year(&self, point: &TimePoint) -> String {
        self.config.format_year(point)
    }
}
