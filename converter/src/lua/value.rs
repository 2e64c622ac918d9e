//! Value tree accepted by the Lua serializer.

use serde_json::{Number, Value};

/// A Lua literal: scalar, sequence, or string-keyed table.
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<LuaValue>),
    Table(LuaTable),
}

/// An insertion-ordered table with string keys.
///
/// An entry may be *absent* (`None`): the key keeps its position but the
/// serializer leaves it out of the output entirely, unlike [`LuaValue::Nil`]
/// which renders as `nil`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LuaTable {
    entries: Vec<(String, Option<LuaValue>)>,
}

impl LuaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace a present entry. A replaced key keeps its original
    /// position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<LuaValue>) {
        self.insert_opt(key, Some(value.into()));
    }

    /// Insert or replace an entry that may be absent.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<LuaValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value under `key`, if the key exists and is not absent.
    pub fn get(&self, key: &str) -> Option<&LuaValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Number of keys, absent entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&LuaValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Present entries in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &LuaValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<LuaValue>> FromIterator<(K, V)> for LuaTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = LuaTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for LuaValue {
    fn from(b: bool) -> Self {
        LuaValue::Boolean(b)
    }
}

impl From<u8> for LuaValue {
    fn from(n: u8) -> Self {
        LuaValue::Integer(n.into())
    }
}

impl From<i32> for LuaValue {
    fn from(n: i32) -> Self {
        LuaValue::Integer(n.into())
    }
}

impl From<i64> for LuaValue {
    fn from(n: i64) -> Self {
        LuaValue::Integer(n)
    }
}

impl From<f64> for LuaValue {
    fn from(n: f64) -> Self {
        LuaValue::Float(n)
    }
}

impl From<&str> for LuaValue {
    fn from(s: &str) -> Self {
        LuaValue::String(s.to_string())
    }
}

impl From<String> for LuaValue {
    fn from(s: String) -> Self {
        LuaValue::String(s)
    }
}

impl<T: Into<LuaValue>> From<Vec<T>> for LuaValue {
    fn from(items: Vec<T>) -> Self {
        LuaValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<LuaTable> for LuaValue {
    fn from(table: LuaTable) -> Self {
        LuaValue::Table(table)
    }
}

impl From<&Number> for LuaValue {
    fn from(n: &Number) -> Self {
        match n.as_i64() {
            Some(i) => LuaValue::Integer(i),
            None => LuaValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

/// JSON documents map one-to-one: `null` becomes `nil`, object key order
/// is kept.
impl From<Value> for LuaValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LuaValue::Nil,
            Value::Bool(b) => LuaValue::Boolean(b),
            Value::Number(n) => LuaValue::from(&n),
            Value::String(s) => LuaValue::String(s),
            Value::Array(items) => items.into(),
            Value::Object(map) => LuaValue::Table(map.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = LuaTable::new();
        table.insert("a", 1);
        table.insert("b", 2);
        table.insert("a", 3);

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(&LuaValue::Integer(3)));
    }

    #[test]
    fn test_absent_entries() {
        let mut table = LuaTable::new();
        table.insert("a", 1);
        table.insert_opt("b", None);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("b"), None);
        assert_eq!(table.present().count(), 1);
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let value: LuaValue = json!({ "zeta": 1, "alpha": [true, null], "mid": 1.5 }).into();
        let LuaValue::Table(table) = value else {
            panic!("expected a table");
        };
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            table.get("alpha"),
            Some(&LuaValue::Sequence(vec![LuaValue::Boolean(true), LuaValue::Nil]))
        );
        assert_eq!(table.get("mid"), Some(&LuaValue::Float(1.5)));
    }
}
