//! Lane layout for normalized items.
//!
//! # Responsibility
//! - Define the processing orders used before packing.
//! - Pack items into lanes with a deterministic first-fit pass.
//!
//! # Invariants
//! - The same items, sort order and time order always yield the same lanes.
//! - Packing is greedy and order-dependent; it is not a minimum coloring.

pub mod sort;
pub mod tracks;
