//! Transformation module.
//!
//! - Normalize: raw record to canonical monster
//! - Grouper: canonical monsters to per-zone buckets
//! - Pipeline: load, convert and write a whole input file

pub mod grouper;
pub mod normalize;
pub mod pipeline;

pub use grouper::{group_by_zone, Grouping, NormalizedRecord, ZoneBucket};
pub use normalize::normalize;
pub use pipeline::*;
