//! Timeline layout configuration.
//!
//! # Responsibility
//! - Carry the caller-selectable sort order, time order and BCE marker.
//! - Validate configuration before any item is normalized.
//!
//! # Invariants
//! - Absent fields deserialize to their defaults
//!   (`descending`, `backward`, `" BC"`).

use crate::date::{format_year, DEFAULT_BC_MARKER};
use crate::layout::sort::SortOrder;
use crate::layout::tracks::TimeOrder;
use crate::model::time_point::TimePoint;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Layout configuration for one timeline build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub sort_order: SortOrder,
    pub time_order: TimeOrder,
    /// BCE marker; a leading `-` places it before the year.
    pub marker: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            time_order: TimeOrder::default(),
            marker: DEFAULT_BC_MARKER.to_string(),
        }
    }
}

impl TimelineConfig {
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_time_order(mut self, time_order: TimeOrder) -> Self {
        self.time_order = time_order;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Validates configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(())
    }

    /// Formats a point with this configuration's marker.
    pub fn format_year(&self, point: &TimePoint) -> String {
        format_year(point, &self.marker)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyMarker,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMarker => write!(f, "BCE marker must not be blank"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TimelineConfig};
    use crate::layout::sort::SortOrder;
    use crate::layout::tracks::TimeOrder;

    #[test]
    fn defaults_match_reference_layout() {
        let config = TimelineConfig::default();
        assert_eq!(config.sort_order, SortOrder::Descending);
        assert_eq!(config.time_order, TimeOrder::Backward);
        assert_eq!(config.marker, " BC");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_marker_is_rejected() {
        let config = TimelineConfig::default().with_marker("   ");
        assert_eq!(config.validate().unwrap_err(), ConfigError::EmptyMarker);
    }
}
