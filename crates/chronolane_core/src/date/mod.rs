//! Date normalization for the proleptic year timeline.
//!
//! # Responsibility
//! - Parse calendar dates and bare (possibly BCE) year expressions.
//! - Normalize raw items: instants, the "now" clamp and interval checks.
//! - Format points back into year labels.
//!
//! # Invariants
//! - `format_year` is the inverse of bare-year parsing for every year it
//!   can produce, including the year-0 -> "1 BC" boundary.
//! - Parsing is permissive: decorative non-digit suffixes are accepted.

mod format;
mod normalize;
mod parse;

pub use format::{format_year, DEFAULT_BC_MARKER};
pub use normalize::{instant_offset, normalize_item, INSTANT_OFFSET_DAYS};
pub use parse::{parse, DateError};
