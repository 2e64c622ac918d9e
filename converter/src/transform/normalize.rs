//! Raw record → canonical monster.
//!
//! Each raw column goes through one small coercion:
//!
//! | Raw | Canonical |
//! |-----|-----------|
//! | 0/1 flag columns | `0` for zero, `1` for anything else |
//! | comma-joined lists | trimmed strings, `[]` when empty |
//! | `drops` | as lists, minus `*` placeholder tokens |
//! | `job` | job code(s) via [`resolve_job`] |
//! | `family` | family name via [`resolve_family`] |
//! | `level_min` / `level_max` | kept only when already numeric |
//! | `spawn_count` | numeric, or the leading integer of a string |
//! | `spawn_time` | `minutes` shortened to `mins` |

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;

use crate::error::{LookupError, NormalizeError, RecordRef};
use crate::lookup::{resolve_family, resolve_job};
use crate::models::{CanonicalMonster, Detects, RawMonster, RawScalar};

/// Drop-list token meaning "no real item".
pub const WILDCARD_DROP: &str = "*";

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern"));

/// Normalize one raw record.
///
/// Fails only on vocabulary lookups (job and family); every other column
/// has a total coercion.
pub fn normalize(raw: &RawMonster) -> Result<CanonicalMonster, NormalizeError> {
    let fail = |source: LookupError| NormalizeError {
        record: RecordRef::new(&raw.name, raw.record_id()),
        source,
    };

    let family = match raw.family.as_deref() {
        Some(alias) => resolve_family(alias).map_err(fail)?.map(str::to_string),
        None => None,
    };
    let job = match raw.job.as_deref() {
        Some(alias) => resolve_job(alias).map_err(fail)?,
        None => None,
    };

    Ok(CanonicalMonster {
        agro: binary_flag(raw.is_aggressive.as_ref()),
        detects: Detects {
            healing: binary_flag(raw.detects_healing.as_ref()),
            hp: binary_flag(raw.detects_lowhp.as_ref()),
            magic: binary_flag(raw.detects_magic.as_ref()),
            sight: binary_flag(raw.detects_sight.as_ref()),
            sound: binary_flag(raw.detects_sound.as_ref()),
            tsight: binary_flag(raw.detects_truesight.as_ref()),
            tsound: binary_flag(raw.detects_truesound.as_ref()),
        },
        drops: parse_drops(raw.drops.as_deref()),
        family,
        immunities: parse_list(raw.immunities.as_deref()),
        fished: binary_flag(raw.is_fishing.as_ref()),
        nm: binary_flag(raw.is_nm.as_ref()),
        job,
        links: binary_flag(raw.is_linking.as_ref()),
        level_max: numeric_only(raw.level_max.as_ref()),
        level_min: numeric_only(raw.level_min.as_ref()),
        resistances: parse_list(raw.resistances.as_deref()),
        spawn_count: spawn_count(raw.spawn_count.as_ref()),
        spawn_time: spawn_time(raw.spawn_time.as_deref()),
        steal: parse_list(raw.stolen.as_deref()),
        tracks_scent: binary_flag(raw.tracks_scent.as_ref()),
        weaknesses: parse_list(raw.weaknesses.as_deref()),
    })
}

/// `0` only for an explicit zero; missing values count as set.
pub fn binary_flag(value: Option<&RawScalar>) -> u8 {
    match value {
        Some(v) if v.is_zero() => 0,
        _ => 1,
    }
}

/// Split a comma-joined list, trimming every token.
pub fn parse_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(s) if !s.is_empty() => s.split(',').map(|t| t.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// [`parse_list`] without [`WILDCARD_DROP`] tokens.
pub fn parse_drops(value: Option<&str>) -> Vec<String> {
    parse_list(value)
        .into_iter()
        .filter(|token| token != WILDCARD_DROP)
        .collect()
}

fn numeric_only(value: Option<&RawScalar>) -> Option<Number> {
    value.and_then(RawScalar::as_number).cloned()
}

/// Numbers pass through; strings yield their leading integer, if any.
pub fn spawn_count(value: Option<&RawScalar>) -> Option<Number> {
    match value? {
        RawScalar::Number(n) => Some(n.clone()),
        RawScalar::Text(s) => leading_integer(s).map(Number::from),
        RawScalar::Bool(_) => None,
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    LEADING_INTEGER
        .captures(s)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

/// Empty strings are absent; the first `minutes` becomes `mins`.
pub fn spawn_time(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s.replacen("minutes", "mins", 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawMonster {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_binary_flag() {
        assert_eq!(binary_flag(Some(&RawScalar::Number(0.into()))), 0);
        assert_eq!(binary_flag(Some(&RawScalar::Number(1.into()))), 1);
        assert_eq!(binary_flag(Some(&RawScalar::Number(5.into()))), 1);
        assert_eq!(binary_flag(Some(&RawScalar::Number((-3).into()))), 1);
        assert_eq!(binary_flag(Some(&RawScalar::Text("0".into()))), 0);
        assert_eq!(binary_flag(None), 1);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(Some("Fire,  Ice ,Wind")), vec!["Fire", "Ice", "Wind"]);
        assert_eq!(parse_list(Some("")), Vec::<String>::new());
        assert_eq!(parse_list(None), Vec::<String>::new());
    }

    #[test]
    fn test_parse_drops_removes_wildcard() {
        assert_eq!(parse_drops(Some("a, b, *, c")), vec!["a", "b", "c"]);
        assert_eq!(parse_drops(Some("*")), Vec::<String>::new());
        assert_eq!(parse_drops(Some("Funguar Spore, *, Leaf")), vec!["Funguar Spore", "Leaf"]);
    }

    #[test]
    fn test_spawn_count() {
        assert_eq!(spawn_count(Some(&RawScalar::Number(4.into()))), Some(4.into()));
        assert_eq!(spawn_count(Some(&RawScalar::Text("12".into()))), Some(12.into()));
        assert_eq!(spawn_count(Some(&RawScalar::Text(" 3-5".into()))), Some(3.into()));
        assert_eq!(spawn_count(Some(&RawScalar::Text("many".into()))), None);
        assert_eq!(spawn_count(None), None);
    }

    #[test]
    fn test_spawn_time() {
        assert_eq!(spawn_time(Some("5 minutes")), Some("5 mins".into()));
        assert_eq!(spawn_time(Some("21 hours")), Some("21 hours".into()));
        assert_eq!(spawn_time(Some("")), None);
        assert_eq!(spawn_time(None), None);
    }

    #[test]
    fn test_string_levels_are_dropped() {
        let monster = normalize(&raw(json!({
            "name": "Bogy",
            "zone": "Valkurm Dunes",
            "level_min": "40",
            "level_max": 45
        })))
        .unwrap();
        assert_eq!(monster.level_min, None);
        assert_eq!(monster.level_max, Some(45.into()));
    }

    #[test]
    fn test_normalize_full_record() {
        let monster = normalize(&raw(json!({
            "id": 1,
            "zone": "Valkurm Dunes",
            "name": "Giant Funguar",
            "is_aggressive": 1,
            "is_linking": 0,
            "is_fishing": 0,
            "is_nm": 0,
            "tracks_scent": 0,
            "detects_healing": 0,
            "detects_lowhp": 0,
            "detects_magic": 0,
            "detects_sight": 1,
            "detects_sound": 0,
            "detects_truesight": 0,
            "detects_truesound": 0,
            "drops": "Funguar Spore, *, Leaf",
            "immunities": null,
            "resistances": "",
            "stolen": "Sleepshroom",
            "weaknesses": "Fire",
            "family": "Funguar",
            "job": null,
            "level_min": 8,
            "level_max": 10,
            "spawn_count": "2",
            "spawn_time": "5 minutes"
        })))
        .unwrap();

        assert_eq!(monster.agro, 1);
        assert_eq!(monster.links, 0);
        assert_eq!(monster.detects.sight, 1);
        assert_eq!(monster.detects.tsound, 0);
        assert_eq!(monster.drops, vec!["Funguar Spore", "Leaf"]);
        assert_eq!(monster.family.as_deref(), Some("Funguar"));
        assert_eq!(monster.job, None);
        assert!(monster.immunities.is_empty());
        assert!(monster.resistances.is_empty());
        assert_eq!(monster.steal, vec!["Sleepshroom"]);
        assert_eq!(monster.spawn_count, Some(2.into()));
        assert_eq!(monster.spawn_time.as_deref(), Some("5 mins"));
    }

    #[test]
    fn test_multi_job() {
        let monster = normalize(&raw(json!({ "name": "Orcish Fighter", "job": "war/mnk" }))).unwrap();
        assert_eq!(monster.job.as_deref(), Some("WAR/MNK"));
    }

    #[test]
    fn test_unknown_family_is_fatal() {
        let err = normalize(&raw(json!({
            "id": 9,
            "name": "Mystery",
            "family": "not-a-real-family"
        })))
        .unwrap_err();
        assert_eq!(err.source, LookupError::UnknownFamily("not-a-real-family".into()));
        assert_eq!(err.record, RecordRef::new("Mystery", Some(9)));
    }

    #[test]
    fn test_unknown_job_is_fatal() {
        let err = normalize(&raw(json!({ "name": "Mystery", "job": "sam/bogus" }))).unwrap_err();
        assert_eq!(err.source, LookupError::UnknownJob("sam/bogus".into()));
    }

    #[test]
    fn test_string_id_is_carried_into_errors() {
        let err = normalize(&raw(json!({
            "id": "17",
            "name": "Mystery",
            "family": "not-a-real-family"
        })))
        .unwrap_err();
        assert_eq!(err.record, RecordRef::new("Mystery", Some(17)));
        assert!(err.to_string().contains("(id 17)"));
    }

    #[test]
    fn test_empty_family_is_absent() {
        let monster = normalize(&raw(json!({ "name": "Wisp", "family": "" }))).unwrap();
        assert_eq!(monster.family, None);
    }
}
