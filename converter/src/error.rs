//! Error types for the monster conversion pipeline.
//!
//! One error type per layer:
//!
//! - [`InputError`] - reading and decoding the input JSON array
//! - [`LookupError`] - controlled-vocabulary resolution (job, family, zone)
//! - [`NormalizeError`] - a raw record that could not be normalized
//! - [`ValidationError`] - a normalized record that violates the canonical shape
//! - [`OutputError`] - output directory and file writes
//! - [`ConvertError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Every error is fatal to
//! the run: nothing in the pipeline recovers from one.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ZoneId;

// =============================================================================
// Record identification
// =============================================================================

/// Identifies the source record an error belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    /// Monster display name.
    pub name: String,
    /// Source row identifier, when the input carries one.
    pub id: Option<i64>,
}

impl RecordRef {
    pub fn new(name: impl Into<String>, id: Option<i64>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "[{}] (id {})", self.name, id),
            None => write!(f, "[{}]", self.name),
        }
    }
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading the input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// No input path was given on the command line.
    #[error("No input file given")]
    MissingPath,

    /// Failed to read file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not UTF-8 text.
    #[error("{0} is not valid UTF-8 text")]
    Encoding(PathBuf),

    /// File is not a JSON document.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an array.
    #[error("Expected a JSON array of monster records, found {0}")]
    NotAnArray(&'static str),

    /// One array element does not have the raw record shape.
    #[error("Record {index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Lookup Errors
// =============================================================================

/// An alias that is not part of a controlled vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unable to transform [{0}] into a qualified job name")]
    UnknownJob(String),

    #[error("Unable to transform [{0}] into a qualified family name")]
    UnknownFamily(String),

    #[error("Unknown zone [{0}]")]
    UnknownZone(String),
}

// =============================================================================
// Normalization Errors
// =============================================================================

/// A raw record that could not be turned into a canonical monster.
#[derive(Debug, Error)]
#[error("Unable to parse {record}: {source}")]
pub struct NormalizeError {
    pub record: RecordRef,
    #[source]
    pub source: LookupError,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// One rule of the canonical shape that a record breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field, or `$` for record-level rules.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A normalized record that fails the canonical monster schema.
#[derive(Debug, Error)]
#[error("Monster {record} failed validation: {}", join_violations(.violations))]
pub struct ValidationError {
    pub record: RecordRef,
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the per-zone files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Directory or file I/O failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no usable file name.
    #[error("Cannot derive an output directory name from {0}")]
    NoFileStem(PathBuf),

    /// A bucketed zone id has no display name.
    #[error("Unexpected zone name reference issue for zone {0}")]
    MissingZoneName(ZoneId),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Normalize(#[from] NormalizeError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The record's zone name could not be resolved.
    #[error("Unable to place {record}: {source}")]
    Zone {
        record: RecordRef,
        #[source]
        source: LookupError,
    },

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for vocabulary lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let input_err = InputError::NotAnArray("an object");
        let convert_err: ConvertError = input_err.into();
        assert!(convert_err.to_string().contains("JSON array"));

        let output_err = OutputError::MissingZoneName(ZoneId(103));
        let convert_err: ConvertError = output_err.into();
        assert!(convert_err.to_string().contains("103"));
    }

    #[test]
    fn test_normalize_error_names_record_and_alias() {
        let err = NormalizeError {
            record: RecordRef::new("Giant Funguar", Some(42)),
            source: LookupError::UnknownFamily("not-a-real-family".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("Giant Funguar"));
        assert!(msg.contains("id 42"));
        assert!(msg.contains("not-a-real-family"));
    }

    #[test]
    fn test_validation_error_format() {
        let err = ValidationError {
            record: RecordRef::new("Bogy", None),
            violations: vec![
                FieldViolation::new("agro", "2 is not one of [0,1]"),
                FieldViolation::new("$", "\"drops\" is a required property"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("[Bogy]"));
        assert!(msg.contains("agro: 2 is not one of [0,1]"));
        assert!(msg.contains("; $: "));
    }
}
