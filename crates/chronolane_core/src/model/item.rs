//! Timeline item records.
//!
//! # Responsibility
//! - Define the raw record submitted by the data-loading collaborator.
//! - Define the normalized item owned by a `TimelineModel`.
//!
//! # Invariants
//! - `RawItem::start` is required; `end == ""` marks an instantaneous event.
//! - `NormalizedItem::start <= end` and `end <= now` at normalization time.
//! - `NormalizedItem::track` is `None` until track allocation runs.

use crate::date::{format_year, DateError};
use crate::model::time_point::TimePoint;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field name reported for a missing or unparseable start value.
pub const FIELD_START: &str = "start";
/// Field name reported for an unparseable end value.
pub const FIELD_END: &str = "end";

/// Raw item as submitted by callers.
///
/// Deserializes from `{ "label": .., "start": .., "end": .. }`; an absent
/// `end` is treated the same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub label: String,
    /// Date or year expression. Required.
    #[serde(default)]
    pub start: Option<String>,
    /// Date or year expression, or empty for an instant.
    #[serde(default)]
    pub end: String,
}

impl RawItem {
    /// Creates an interval item.
    pub fn new(
        label: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            start: Some(start.into()),
            end: end.into(),
        }
    }

    /// Creates an instantaneous item (empty `end`).
    pub fn instant(label: impl Into<String>, start: impl Into<String>) -> Self {
        Self::new(label, start, String::new())
    }

    /// Returns whether this record describes an instantaneous event.
    pub fn is_instant(&self) -> bool {
        self.end.trim().is_empty()
    }

    /// Returns the start expression, rejecting absent or blank values.
    pub fn required_start(&self) -> Result<&str, ItemError> {
        match self.start.as_deref() {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ItemError::MissingField(FIELD_START)),
        }
    }
}

/// Item after date normalization and (eventually) track allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedItem {
    pub label: String,
    pub start: TimePoint,
    /// For instants this is a synthetic end used only for lane packing.
    pub end: TimePoint,
    pub instant: bool,
    /// Lane index; `None` until allocation.
    pub track: Option<usize>,
}

impl NormalizedItem {
    /// Display label for the item's years, e.g. `354 BC - 323 BC`.
    ///
    /// Instants render their start year only, since their end is synthetic.
    pub fn year_label(&self, marker: &str) -> String {
        let start = format_year(&self.start, marker);
        if self.instant {
            return start;
        }
        format!("{start} - {}", format_year(&self.end, marker))
    }
}

/// Item-level normalization error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// A required field is absent or blank.
    MissingField(&'static str),
    /// A date field could not be parsed.
    InvalidDate {
        field: &'static str,
        source: DateError,
    },
    /// An interval's end lies before its start.
    InvertedInterval { start: TimePoint, end: TimePoint },
}

impl Display for ItemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidDate { field, source } => write!(f, "invalid `{field}`: {source}"),
            Self::InvertedInterval { start, end } => write!(
                f,
                "end ({}) must not be earlier than start ({})",
                end.date(),
                start.date()
            ),
        }
    }
}

impl Error for ItemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::MissingField(_) | Self::InvertedInterval { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemError, RawItem, FIELD_START};

    #[test]
    fn required_start_rejects_absent_and_blank_values() {
        let mut item = RawItem::new("Rome", "  ", "476");
        assert_eq!(
            item.required_start().unwrap_err(),
            ItemError::MissingField(FIELD_START)
        );

        item.start = None;
        assert_eq!(
            item.required_start().unwrap_err(),
            ItemError::MissingField(FIELD_START)
        );
    }

    #[test]
    fn blank_end_marks_instant() {
        assert!(RawItem::instant("Marathon", "490 BC").is_instant());
        assert!(RawItem::new("Marathon", "490 BC", " ").is_instant());
        assert!(!RawItem::new("Rome", "753 BC", "476").is_instant());
    }
}
