//! Input loader: JSON array of raw monster records.
//!
//! The whole file is read into memory. Rows are decoded one by one so a
//! malformed row is reported with its array index.

use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::error::{InputError, InputResult};
use crate::models::RawMonster;

const BOM: char = '\u{feff}';

/// Name of a JSON value's type, for error messages.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse the input document into raw records.
///
/// # Example
/// ```ignore
/// use mobconv::parser::parse_records;
///
/// let rows = parse_records(r#"[{ "name": "Bogy", "zone": "Valkurm Dunes" }]"#).unwrap();
/// assert_eq!(rows[0].name, "Bogy");
/// ```
pub fn parse_records(content: &str) -> InputResult<Vec<RawMonster>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let document: Value = serde_json::from_str(content)?;

    let Value::Array(items) = document else {
        return Err(InputError::NotAnArray(json_type(&document)));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| InputError::Record { index, source })
        })
        .collect()
}

/// Read and parse an input file.
pub async fn parse_file<P: AsRef<Path>>(path: P) -> InputResult<Vec<RawMonster>> {
    let path = path.as_ref();
    let bytes = fs::read(path).await.map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| InputError::Encoding(path.to_path_buf()))?;

    parse_records(&content)
}
