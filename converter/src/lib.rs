//! # mobconv - monster database to Lua zone files
//!
//! Converts a JSON export of monster records into one Lua data file per
//! game zone, ready to be loaded by a server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON File  │────▶│   Parser    │────▶│  Normalize  │────▶│   Grouper   │────▶│  Lua files  │
//! │  (records)  │     │ (raw rows)  │     │ (+ schema)  │     │ (by zone)   │     │ (per zone)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mobconv::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let summary = convert_file(Path::new("monsters.json"), &ConvertOptions::default())
//!         .await
//!         .unwrap();
//!     println!("Wrote {} zone files", summary.files.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Raw and canonical monster records
//! - [`lookup`] - Zone, job and family vocabularies
//! - [`lua`] - Generic Lua literal serializer
//! - [`parser`] - JSON input loading
//! - [`transform`] - Normalization, zone grouping and pipeline
//! - [`validation`] - Canonical monster schema
//! - [`output`] - Output directory and file writes
//! - [`logs`] - Progress log

// Core modules
pub mod error;
pub mod models;

// Vocabularies
pub mod lookup;

// Serialization
pub mod lua;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Output
pub mod output;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError,
    ConvertResult,
    FieldViolation,
    InputError,
    LookupError,
    NormalizeError,
    OutputError,
    RecordRef,
    ValidationError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CanonicalMonster, Detects, RawMonster, RawScalar, ZoneId};

// =============================================================================
// Re-exports - Lookups
// =============================================================================

pub use lookup::{resolve_family, resolve_job, resolve_zone, zone_name, zones, ZoneEntry};

// =============================================================================
// Re-exports - Lua
// =============================================================================

pub use lua::{format as to_lua_source, FormatOptions, Indent, LuaTable, LuaValue, QuoteStyle};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{validate_monster, validate_monster_value};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_file, parse_records};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert_file,
    convert_records,
    normalize_all,
    render_zone,
    ConvertOptions,
    ConvertSummary,
    Conversion,
    ZoneFile,
};
pub use transform::{group_by_zone, normalize, Grouping, NormalizedRecord, ZoneBucket};

// Pipeline module alias
pub mod pipeline {
    pub use crate::transform::pipeline::*;
}
