//! Controlled vocabularies.
//!
//! - [`zones`] - zone name → id (or ignored), zone id → display name
//! - [`jobs`] - job alias → job code
//! - [`families`] - creature family alias → family name
//!
//! Tables are static data, built into hash maps on first use and never
//! mutated. Alias lookups are trimmed and case-insensitive. An alias that
//! is not in the job or family table is an error, never silently dropped.

pub mod families;
pub mod jobs;
pub mod zones;

pub use families::resolve_family;
pub use jobs::resolve_job;
pub use zones::{lookup_zone, normalize_zone_name, resolve_zone, zone_name, zones, ZoneEntry};

/// Key form used by the job and family tables.
pub fn normalize_alias(alias: &str) -> String {
    alias.trim().to_lowercase()
}
