//! Domain models for the conversion pipeline.
//!
//! - [`RawMonster`] - one loosely-typed source row, as found in the input array
//! - [`RawScalar`] - a field the source encodes as a number or as a string
//! - [`CanonicalMonster`] - the strict, normalized record written to Lua
//! - [`Detects`] - the detection flags of a canonical monster
//! - [`ZoneId`] - server zone identifier, used for output file naming

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::lua::{LuaTable, LuaValue};

// =============================================================================
// Raw input
// =============================================================================

/// A source field whose type is not consistent across rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl RawScalar {
    /// The numeric payload, only when the source value is already a number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            RawScalar::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Whether the value encodes zero.
    ///
    /// Numeric strings are read numerically, so `"0"` counts as zero while
    /// any other text does not.
    pub fn is_zero(&self) -> bool {
        match self {
            RawScalar::Number(n) => n.as_f64() == Some(0.0),
            RawScalar::Text(s) => s.trim().parse::<f64>().is_ok_and(|v| v == 0.0),
            RawScalar::Bool(b) => !b,
        }
    }
}

/// One row of the input dataset.
///
/// Unknown columns (wiki page ids and the like) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMonster {
    /// Source row identifier; some exports encode it as a string.
    pub id: Option<RawScalar>,
    pub zone: String,
    pub name: String,

    pub detects_healing: Option<RawScalar>,
    pub detects_lowhp: Option<RawScalar>,
    pub detects_magic: Option<RawScalar>,
    pub detects_sight: Option<RawScalar>,
    pub detects_sound: Option<RawScalar>,
    pub detects_truesight: Option<RawScalar>,
    pub detects_truesound: Option<RawScalar>,

    pub is_aggressive: Option<RawScalar>,
    pub is_fishing: Option<RawScalar>,
    pub is_linking: Option<RawScalar>,
    pub is_nm: Option<RawScalar>,
    pub tracks_scent: Option<RawScalar>,

    pub level_min: Option<RawScalar>,
    pub level_max: Option<RawScalar>,
    pub spawn_count: Option<RawScalar>,
    pub spawn_time: Option<String>,

    /// Comma-joined lists.
    pub drops: Option<String>,
    pub immunities: Option<String>,
    pub resistances: Option<String>,
    pub stolen: Option<String>,
    pub weaknesses: Option<String>,

    pub job: Option<String>,
    pub family: Option<String>,
}

impl RawMonster {
    /// The row identifier as an integer, when it reads as one.
    pub fn record_id(&self) -> Option<i64> {
        match self.id.as_ref()? {
            RawScalar::Number(n) => n.as_i64(),
            RawScalar::Text(s) => s.trim().parse().ok(),
            RawScalar::Bool(_) => None,
        }
    }
}

// =============================================================================
// Canonical output
// =============================================================================

/// Detection flags. Every member is 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Detects {
    pub healing: u8,
    pub hp: u8,
    pub magic: u8,
    pub sight: u8,
    pub sound: u8,
    pub tsight: u8,
    pub tsound: u8,
}

impl Detects {
    fn to_lua(self) -> LuaValue {
        let mut table = LuaTable::with_capacity(7);
        table.insert("healing", self.healing);
        table.insert("hp", self.hp);
        table.insert("magic", self.magic);
        table.insert("sight", self.sight);
        table.insert("sound", self.sound);
        table.insert("tsight", self.tsight);
        table.insert("tsound", self.tsound);
        LuaValue::Table(table)
    }
}

/// A normalized monster, one per distinct name within a zone.
///
/// Field order here is the key order of the rendered Lua table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalMonster {
    pub agro: u8,
    pub detects: Detects,
    pub drops: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub immunities: Vec<String>,
    pub fished: u8,
    pub nm: u8,
    /// Canonical job code, or `/`-joined codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    pub links: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_min: Option<Number>,
    pub resistances: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_time: Option<String>,
    pub steal: Vec<String>,
    pub tracks_scent: u8,
    pub weaknesses: Vec<String>,
}

impl CanonicalMonster {
    /// Lua table for this monster. Absent optional fields are kept as absent
    /// entries so the serializer omits them.
    pub fn to_lua(&self) -> LuaValue {
        let mut table = LuaTable::with_capacity(17);
        table.insert("agro", self.agro);
        table.insert("detects", self.detects.to_lua());
        table.insert("drops", self.drops.clone());
        table.insert_opt("family", self.family.clone().map(LuaValue::from));
        table.insert("immunities", self.immunities.clone());
        table.insert("fished", self.fished);
        table.insert("nm", self.nm);
        table.insert_opt("job", self.job.clone().map(LuaValue::from));
        table.insert("links", self.links);
        table.insert_opt("level_max", self.level_max.as_ref().map(LuaValue::from));
        table.insert_opt("level_min", self.level_min.as_ref().map(LuaValue::from));
        table.insert("resistances", self.resistances.clone());
        table.insert_opt("spawn_count", self.spawn_count.as_ref().map(LuaValue::from));
        table.insert_opt("spawn_time", self.spawn_time.clone().map(LuaValue::from));
        table.insert("steal", self.steal.clone());
        table.insert("tracks_scent", self.tracks_scent);
        table.insert("weaknesses", self.weaknesses.clone());
        LuaValue::Table(table)
    }
}

// =============================================================================
// Zones
// =============================================================================

/// Server zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZoneId(pub u16);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_monster_tolerates_mixed_types() {
        let raw: RawMonster = serde_json::from_value(json!({
            "id": 7,
            "zone": "Valkurm Dunes",
            "name": "Goblin Mugger",
            "level_min": "10",
            "level_max": 12,
            "spawn_count": "3",
            "is_aggressive": 1,
            "job": null,
            "allakhazam_id": null
        }))
        .unwrap();

        assert_eq!(raw.record_id(), Some(7));
        assert_eq!(raw.level_min, Some(RawScalar::Text("10".into())));
        assert!(raw.level_max.as_ref().and_then(RawScalar::as_number).is_some());
        assert_eq!(raw.job, None);
        assert_eq!(raw.family, None);
    }

    #[test]
    fn test_record_id_accepts_strings() {
        let raw: RawMonster = serde_json::from_value(json!({ "id": "17", "name": "Bogy" })).unwrap();
        assert_eq!(raw.record_id(), Some(17));

        let raw: RawMonster = serde_json::from_value(json!({ "id": "n/a", "name": "Bogy" })).unwrap();
        assert_eq!(raw.record_id(), None);

        assert_eq!(RawMonster::default().record_id(), None);
    }

    #[test]
    fn test_raw_scalar_is_zero() {
        assert!(RawScalar::Number(0.into()).is_zero());
        assert!(RawScalar::Text(" 0 ".into()).is_zero());
        assert!(RawScalar::Bool(false).is_zero());
        assert!(!RawScalar::Number((-1).into()).is_zero());
        assert!(!RawScalar::Text("no".into()).is_zero());
    }

    #[test]
    fn test_canonical_serialization_skips_absent() {
        let monster = CanonicalMonster {
            agro: 1,
            family: Some("Funguar".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&monster).unwrap();
        assert_eq!(value["family"], "Funguar");
        assert!(value.get("job").is_none());
        assert!(value.get("spawn_count").is_none());
        assert_eq!(value["detects"]["tsound"], 0);
    }

    #[test]
    fn test_to_lua_key_order() {
        let monster = CanonicalMonster::default();
        let LuaValue::Table(table) = monster.to_lua() else {
            panic!("expected a table");
        };
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.first(), Some(&"agro"));
        assert_eq!(keys.last(), Some(&"weaknesses"));
        assert_eq!(keys.len(), 17);
        assert!(table.get("job").is_none());
    }
}
