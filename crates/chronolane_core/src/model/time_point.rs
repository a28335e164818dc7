//! Signed proleptic time point.
//!
//! # Responsibility
//! - Wrap a calendar day on the proleptic Gregorian axis.
//! - Remember whether the source carried day precision or only a year.
//!
//! # Invariants
//! - Year-precision points sit on July 1st of their year.
//! - The stored year is the display year: `-1` is "1 BC"; bare-year
//!   parsing never yields year `0`.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How much of the calendar the source string actually specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Parsed from a full `YYYY-MM-DD` date (or the clamp to "now").
    Day,
    /// Parsed from a bare year; the day is the mid-year anchor.
    Year,
}

/// One point on the signed, proleptic year timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePoint {
    date: NaiveDate,
    precision: Precision,
}

impl TimePoint {
    /// Creates a point from a calendar day and its source precision.
    pub fn new(date: NaiveDate, precision: Precision) -> Self {
        Self { date, precision }
    }

    /// Creates a day-precision point.
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, Precision::Day)
    }

    /// Calendar day backing this point.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Signed display year (`-354` is "354 BC").
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Compares two points on the time axis, ignoring precision.
    pub fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }

    /// Returns `true` when `self` lies strictly after `other` on the axis.
    pub fn is_after(&self, other: &Self) -> bool {
        self.timeline_cmp(other) == Ordering::Greater
    }

    /// Shifts the point forward by whole days, keeping its precision.
    ///
    /// Returns `None` when the result leaves the representable range.
    pub fn checked_add_days(&self, days: Days) -> Option<Self> {
        self.date
            .checked_add_days(days)
            .map(|date| Self::new(date, self.precision))
    }
}
