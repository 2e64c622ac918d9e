//! Group normalized monsters into per-zone buckets.
//!
//! Each input row carries its zone as free text. Rows are resolved to a
//! zone id and merged into one bucket per id, keyed by monster name.
//!
//! # Architecture
//!
//! ```text
//! Normalized rows                          Buckets (by zone id)
//! ┌──────────────────────────────────┐     ┌──────────────────────────────┐
//! │ Valkurm Dunes  │ Giant Funguar   │     │ 103 Valkurm Dunes            │
//! │ Valkurm  Dunes │ Bogy            │  →  │   Giant Funguar, Bogy        │
//! │ West Ronfaure  │ Forest Hare     │     ├──────────────────────────────┤
//! │ Unknown        │ Wandering Ghost │     │ 100 West Ronfaure            │
//! └──────────────────────────────────┘     │   Forest Hare                │
//!                                          └──────────────────────────────┘
//!                                          ignored: ["Unknown"]
//! ```
//!
//! A name seen twice in the same zone keeps its first position and the
//! last record's data. Buckets are ordered by zone id so output is
//! deterministic.

use std::collections::{BTreeMap, HashMap};

use crate::error::{ConvertError, ConvertResult, RecordRef};
use crate::lookup::{resolve_zone, ZoneEntry};
use crate::lua::{LuaTable, LuaValue};
use crate::models::{CanonicalMonster, ZoneId};

/// A normalized monster with the source fields needed for bucketing.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub zone: String,
    pub name: String,
    pub id: Option<i64>,
    pub monster: CanonicalMonster,
}

impl NormalizedRecord {
    pub fn record_ref(&self) -> RecordRef {
        RecordRef::new(&self.name, self.id)
    }
}

/// The monsters of one zone, keyed by display name in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneBucket {
    monsters: Vec<(String, CanonicalMonster)>,
    index: HashMap<String, usize>,
}

impl ZoneBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a monster; an existing entry with the same name is replaced
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, monster: CanonicalMonster) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.monsters[i].1 = monster,
            None => {
                self.index.insert(name.clone(), self.monsters.len());
                self.monsters.push((name, monster));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CanonicalMonster> {
        self.index.get(name).map(|&i| &self.monsters[i].1)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CanonicalMonster)> {
        self.monsters.iter().map(|(name, m)| (name.as_str(), m))
    }

    /// Lua table of `name = monster` entries.
    pub fn to_lua(&self) -> LuaValue {
        let mut table = LuaTable::with_capacity(self.monsters.len());
        for (name, monster) in &self.monsters {
            table.insert(name.clone(), monster.to_lua());
        }
        LuaValue::Table(table)
    }
}

/// Result of bucketing a record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    pub zones: BTreeMap<ZoneId, ZoneBucket>,
    /// Zone labels skipped as ignored, once each, in first-seen order.
    pub ignored: Vec<String>,
}

/// Bucket records by zone id.
///
/// Fails on the first zone label that is neither a known zone nor an
/// ignored one.
pub fn group_by_zone<I>(records: I) -> ConvertResult<Grouping>
where
    I: IntoIterator<Item = NormalizedRecord>,
{
    let mut grouping = Grouping::default();

    for record in records {
        let entry = resolve_zone(&record.zone).map_err(|source| ConvertError::Zone {
            record: record.record_ref(),
            source,
        })?;

        match entry {
            ZoneEntry::Zone(id) => {
                grouping
                    .zones
                    .entry(id)
                    .or_default()
                    .insert(record.name, record.monster);
            }
            ZoneEntry::Ignored => {
                if !grouping.ignored.contains(&record.zone) {
                    grouping.ignored.push(record.zone);
                }
            }
        }
    }

    Ok(grouping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    fn record(zone: &str, name: &str, agro: u8) -> NormalizedRecord {
        NormalizedRecord {
            zone: zone.into(),
            name: name.into(),
            id: None,
            monster: CanonicalMonster {
                agro,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_groups_by_zone_id() {
        let grouping = group_by_zone(vec![
            record("Valkurm Dunes", "Giant Funguar", 1),
            record("West Ronfaure", "Forest Hare", 0),
            record("Valkurm Dunes", "Bogy", 1),
        ])
        .unwrap();

        assert_eq!(grouping.zones.len(), 2);
        let ids: Vec<u16> = grouping.zones.keys().map(|id| id.0).collect();
        assert_eq!(ids, vec![100, 103]);

        let valkurm = &grouping.zones[&ZoneId(103)];
        let names: Vec<&str> = valkurm.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Giant Funguar", "Bogy"]);
    }

    #[test]
    fn test_double_space_zone_names_share_a_bucket() {
        let grouping = group_by_zone(vec![
            record("Valkurm Dunes", "Giant Funguar", 1),
            record("Valkurm  Dunes", "Bogy", 1),
        ])
        .unwrap();

        assert_eq!(grouping.zones.len(), 1);
        assert_eq!(grouping.zones[&ZoneId(103)].len(), 2);
    }

    #[test]
    fn test_last_record_with_same_name_wins() {
        let grouping = group_by_zone(vec![
            record("Valkurm Dunes", "Giant Funguar", 1),
            record("Valkurm Dunes", "Bogy", 1),
            record("Valkurm Dunes", "Giant Funguar", 0),
        ])
        .unwrap();

        let bucket = &grouping.zones[&ZoneId(103)];
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.get("Giant Funguar").map(|m| m.agro), Some(0));
        assert_eq!(bucket.iter().next().map(|(n, _)| n), Some("Giant Funguar"));
    }

    #[test]
    fn test_ignored_zones_are_skipped() {
        let grouping = group_by_zone(vec![
            record("Unknown", "Wandering Ghost", 1),
            record("unknown", "Other Ghost", 1),
            record("Unknown", "Third Ghost", 1),
        ])
        .unwrap();

        assert!(grouping.zones.is_empty());
        assert_eq!(grouping.ignored, vec!["Unknown", "unknown"]);
    }

    #[test]
    fn test_unknown_zone_is_fatal() {
        let mut bad = record("Nowhere Land", "Bogy", 1);
        bad.id = Some(77);
        let err = group_by_zone(vec![bad]).unwrap_err();

        match err {
            ConvertError::Zone { record, source } => {
                assert_eq!(record, RecordRef::new("Bogy", Some(77)));
                assert_eq!(source, LookupError::UnknownZone("Nowhere Land".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bucket_to_lua_keys() {
        let mut bucket = ZoneBucket::new();
        bucket.insert("Giant Funguar", CanonicalMonster::default());
        bucket.insert("Bogy", CanonicalMonster::default());

        let LuaValue::Table(table) = bucket.to_lua() else {
            panic!("expected a table");
        };
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Giant Funguar", "Bogy"]);
    }
}
