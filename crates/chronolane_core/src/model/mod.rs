//! Timeline domain model.
//!
//! # Responsibility
//! - Define the raw input record and its normalized, lane-assigned form.
//! - Define the signed proleptic time point shared by every layer.
//! - Define the immutable model handed to presentation collaborators.
//!
//! # Invariants
//! - Normalized items always satisfy `start <= end`.
//! - Ordering on the time axis compares calendar days only, never precision.

pub mod item;
pub mod time_point;
pub mod timeline;
