//! JSON Schema validation for canonical monster records.
//!
//! The canonical shape is declared once, in `schemas/canonical-monster.json`
//! (JSON Schema Draft 7), and embedded at compile time. It is applied to
//! every normalized record before serialization, independently of the
//! normalizer's own coercion logic.
//!
//! # Violation attribution
//!
//! Each top-level property is compiled into its own validator so a failure
//! can be reported against the field it belongs to:
//!
//! ```text
//! record ──┬─► property validators ──► FieldViolation { field: "agro", .. }
//!          └─► record validator    ──► FieldViolation { field: "$", .. }
//!              (required keys, no unknown keys)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use mobconv::validation::validate_monster_value;
//!
//! let errors = validate_monster_value(&json!({ "agro": 2 })).unwrap_err();
//! assert!(errors.iter().any(|v| v.field == "agro"));
//! ```

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::error::{FieldViolation, RecordRef, ValidationError};
use crate::models::CanonicalMonster;

const MONSTER_SCHEMA: &str = include_str!("../../schemas/canonical-monster.json");

/// Field name used for violations that concern the record as a whole.
pub const RECORD_FIELD: &str = "$";

struct MonsterSchema {
    record: Validator,
    fields: Vec<(String, Validator)>,
}

static SCHEMA: Lazy<MonsterSchema> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(MONSTER_SCHEMA).expect("Invalid embedded schema");
    compile(&schema).expect("Invalid embedded schema")
});

/// Split the schema into a record-level validator (property schemas
/// replaced by `true`) and one validator per property.
fn compile(schema: &Value) -> Result<MonsterSchema, String> {
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or("schema has no properties")?;

    let mut fields = Vec::with_capacity(properties.len());
    for (name, subschema) in properties {
        let validator = jsonschema::draft7::new(subschema).map_err(|e| e.to_string())?;
        fields.push((name.clone(), validator));
    }

    let mut shell = schema.clone();
    if let Some(props) = shell.get_mut("properties").and_then(Value::as_object_mut) {
        for subschema in props.values_mut() {
            *subschema = Value::Bool(true);
        }
    }
    let record = jsonschema::draft7::new(&shell).map_err(|e| e.to_string())?;

    Ok(MonsterSchema { record, fields })
}

/// Validate a JSON value against the canonical monster schema.
///
/// Field violations come first, in schema property order, followed by
/// record-level ones under [`RECORD_FIELD`].
pub fn validate_monster_value(data: &Value) -> Result<(), Vec<FieldViolation>> {
    let schema = &*SCHEMA;
    let empty = Map::new();
    let object = data.as_object().unwrap_or(&empty);

    let mut violations: Vec<FieldViolation> = schema
        .fields
        .iter()
        .filter_map(|(name, validator)| object.get(name).map(|value| (name, validator, value)))
        .flat_map(|(name, validator, value)| {
            validator
                .iter_errors(value)
                .map(|e| FieldViolation::new(name.as_str(), e.to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    violations.extend(
        schema
            .record
            .iter_errors(data)
            .map(|e| FieldViolation::new(RECORD_FIELD, e.to_string())),
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validate a normalized monster, naming `record` in the error.
pub fn validate_monster(record: &RecordRef, monster: &CanonicalMonster) -> Result<(), ValidationError> {
    let data = serde_json::to_value(monster).map_err(|e| ValidationError {
        record: record.clone(),
        violations: vec![FieldViolation::new(RECORD_FIELD, e.to_string())],
    })?;

    validate_monster_value(&data).map_err(|violations| ValidationError {
        record: record.clone(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_monster() -> Value {
        json!({
            "agro": 1,
            "detects": {
                "healing": 0, "hp": 0, "magic": 0, "sight": 1,
                "sound": 0, "tsight": 0, "tsound": 0
            },
            "drops": ["Funguar Spore"],
            "family": "Funguar",
            "immunities": [],
            "fished": 0,
            "nm": 0,
            "links": 0,
            "level_max": 10,
            "level_min": 8,
            "resistances": [],
            "spawn_time": "5 mins",
            "steal": [],
            "tracks_scent": 0,
            "weaknesses": ["Fire"]
        })
    }

    #[test]
    fn test_valid_monster() {
        assert!(validate_monster_value(&valid_monster()).is_ok());
    }

    #[test]
    fn test_default_monster_is_valid() {
        let monster = CanonicalMonster::default();
        assert!(validate_monster(&RecordRef::new("Bogy", None), &monster).is_ok());
    }

    #[test]
    fn test_flag_out_of_range() {
        let mut monster = valid_monster();
        monster["agro"] = json!(2);
        let violations = validate_monster_value(&monster).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "agro");
    }

    #[test]
    fn test_nested_detects_flag() {
        let mut monster = valid_monster();
        monster["detects"]["tsound"] = json!(3);
        let violations = validate_monster_value(&monster).unwrap_err();
        assert!(violations.iter().all(|v| v.field == "detects"));
    }

    #[test]
    fn test_missing_required_field_is_record_level() {
        let mut monster = valid_monster();
        monster.as_object_mut().unwrap().remove("drops");
        let violations = validate_monster_value(&monster).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, RECORD_FIELD);
        assert!(violations[0].message.contains("drops"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut monster = valid_monster();
        monster["aggressive"] = json!(1);
        assert!(validate_monster_value(&monster).is_err());
    }

    #[test]
    fn test_job_pattern_and_levels() {
        let mut monster = valid_monster();
        monster["job"] = json!("WAR/MNK");
        assert!(validate_monster_value(&monster).is_ok());

        monster["job"] = json!("war");
        monster["level_min"] = json!(8.5);
        let violations = validate_monster_value(&monster).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["job", "level_min"]);
    }

    #[test]
    fn test_validation_error_names_record() {
        let monster = CanonicalMonster {
            nm: 4,
            ..Default::default()
        };
        let err = validate_monster(&RecordRef::new("Leaping Lizzy", Some(12)), &monster).unwrap_err();
        assert_eq!(err.violations[0].field, "nm");
        assert!(err.to_string().contains("Leaping Lizzy"));
    }
}
