//! Bidirectional conversion between nested containers and flat path maps.
//!
//! [`Map::dot`] flattens a nested container into a single-level map keyed by
//! dot-notation paths; [`Map::undot`] folds such a map back through `set`.
//! The two are inverses for containers whose keys contain no literal `.`
//! and which hold no empty nested containers (an empty container is a leaf
//! and survives flattening as itself, but its emptiness makes it
//! indistinguishable from a scalar on the way back).

use std::collections::HashSet;

use crate::value::{Map, Value};

impl Map {
    /// Flattens the map into `path -> leaf` entries joined by `.`.
    ///
    /// Non-empty nested maps recurse by key, non-empty lists by decimal
    /// index; scalars and empty containers are leaves.
    ///
    /// ```
    /// use dotmap::Map;
    ///
    /// let mut map = Map::new();
    /// map.set("user.name", "Alice");
    /// map.set("user.age", 30);
    ///
    /// let flat = map.dot();
    /// let keys: Vec<&str> = flat.keys().collect();
    /// assert_eq!(keys, vec!["user.name", "user.age"]);
    /// ```
    pub fn dot(&self) -> Map {
        self.flatten_with_keys(".")
    }

    /// Flattens with every path prepended by `prefix` (given verbatim, so a
    /// trailing separator is the caller's choice).
    pub fn dot_prefixed(&self, prefix: &str) -> Map {
        let mut flat = Map::new();
        flatten_into(&mut flat, self, prefix, ".");
        flat
    }

    /// Flattens with a caller-supplied separator instead of `.`.
    pub fn flatten_with_keys(&self, separator: &str) -> Map {
        let mut flat = Map::new();
        flatten_into(&mut flat, self, "", separator);
        flat
    }

    /// Expands a flat `path -> value` map back into a nested map.
    ///
    /// Each key is folded through [`Map::set`], so dotted keys create
    /// intermediate maps.
    pub fn undot(&self) -> Map {
        let mut nested = Map::new();
        for (key, value) in self.iter() {
            nested.set(key, value.clone());
        }
        nested
    }

    /// Lists every path in the map: all leaf paths from [`Map::dot`] plus
    /// every proper non-empty prefix, deduplicated in first-occurrence
    /// order.
    pub fn paths(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (leaf_path, _) in self.dot().iter() {
            let mut prefix = String::new();
            for segment in leaf_path.split('.') {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                if seen.insert(prefix.clone()) {
                    out.push(prefix.clone());
                }
            }
        }
        out
    }

    /// In-place recursive visit of every leaf value.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Value)) {
        for (_, value) in self.iter_mut() {
            value.walk_mut(visit);
        }
    }
}

impl Value {
    /// In-place recursive visit of every leaf value under this one.
    ///
    /// Containers are traversed, not visited; a leaf may be replaced with a
    /// container by the closure, but the replacement is not re-walked.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Value)) {
        match self {
            Value::Map(map) => map.walk_mut(visit),
            Value::List(list) => {
                for item in list.iter_mut() {
                    item.walk_mut(visit);
                }
            }
            leaf => visit(leaf),
        }
    }
}

fn flatten_into(flat: &mut Map, map: &Map, prefix: &str, separator: &str) {
    for (key, value) in map.iter() {
        flatten_value(flat, format!("{prefix}{key}"), value, separator);
    }
}

fn flatten_value(flat: &mut Map, path: String, value: &Value, separator: &str) {
    match value {
        Value::Map(map) if !map.is_empty() => {
            flatten_into(flat, map, &format!("{path}{separator}"), separator);
        }
        Value::List(list) if !list.is_empty() => {
            for (index, item) in list.iter().enumerate() {
                flatten_value(flat, format!("{path}{separator}{index}"), item, separator);
            }
        }
        leaf => {
            flat.insert(path, leaf.clone());
        }
    }
}
