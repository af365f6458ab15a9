//! Insertion-ordered mapping of string keys to values.
//!
//! [`Map`] is the associative container of the value model. Unlike
//! `std::collections::HashMap` it preserves insertion order, which is an
//! observable property of every operation built on top of it (flattening,
//! grouping, iteration, display). Lookups stay O(1) through a side index
//! into the entry vector.
//!
//! Key-level methods here (`get_key`, `insert`, `remove_key`,
//! `contains_key`) treat keys literally, dots included. The dot-notation
//! path operations live in the `resolve` module.

use std::{collections::HashMap, fmt};

use super::Value;

/// An insertion-ordered string-keyed mapping.
///
/// # Examples
///
/// ```
/// use dotmap::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains the literal key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Gets a value by literal key.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Gets a mutable reference to a value by literal key.
    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Inserts a value under a literal key, returning the previous value.
    ///
    /// Replacing an existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a literal key, returning its value if present.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` first if the key is absent.
    pub fn entry_or_insert_with(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Value,
    ) -> &mut Value {
        if !self.contains_key(key) {
            self.insert(key.to_string(), default());
        }
        self.get_key_mut(key).expect("key inserted above")
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns a mutable iterator over values in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Returns an iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a mutable iterator over key-value pairs in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Keeps only the entries for which the predicate returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Value) -> bool) {
        let entries = std::mem::take(&mut self.entries);
        self.index.clear();
        for (key, value) in entries {
            if keep(&key, &value) {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Inserts every entry of `other`, overwriting on key collision
    /// (shallow merge; see `merge_recursive_with` for the deep form).
    pub fn extend_from(&mut self, other: &Map) {
        for (key, value) in other.iter() {
            self.insert(key.to_string(), value.clone());
        }
    }

    /// Builder method to insert a value and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Converts to a compact JSON-like string representation.
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.entries.len() * 16);
        result.push('{');
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                result.push(',');
            }
            result.push('"');
            result.push_str(&key.replace('\\', "\\\\").replace('\"', "\\\""));
            result.push_str("\":");
            result.push_str(&value.to_json_string());
            first = false;
        }
        result.push('}');
        result
    }
}

/// Structural equality over the key set.
///
/// Two maps are equal when they hold the same keys with equal values;
/// insertion order is an iteration property, not an equality property.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get_key(key) == Some(value))
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<Vec<(String, Value)>> for Map {
    fn from(entries: Vec<(String, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.entries.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
