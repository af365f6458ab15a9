//! Classification of record sequences into groups, keyed maps, and trees.
//!
//! Keys are either a dot-notation path resolved against each record
//! ([`List::group_by`] and friends) or a caller closure over
//! `(record, index)` (the `_with` variants). Resolved key values are
//! coerced to map keys through [`Value::group_key`]; a record whose key
//! path does not resolve lands under the empty key, same as a `Null` key.

use std::collections::HashSet;

use tracing::trace;

use crate::{
    path::Path,
    value::{List, Map, Value},
};

impl List {
    /// Groups records into buckets keyed by the value at `path`.
    ///
    /// Bucket keys appear in first-occurrence order; each bucket preserves
    /// the input order of its records.
    ///
    /// ```
    /// use dotmap::{List, Map, Value};
    ///
    /// let records: List = [("a", 1), ("b", 2), ("a", 3)]
    ///     .into_iter()
    ///     .map(|(t, v)| Value::Map(Map::new().with("type", t).with("v", v)))
    ///     .collect();
    ///
    /// let groups = records.group_by("type");
    /// assert_eq!(groups.get_key("a").and_then(Value::as_list).unwrap().len(), 2);
    /// assert_eq!(groups.get_key("b").and_then(Value::as_list).unwrap().len(), 1);
    /// ```
    pub fn group_by(&self, path: impl AsRef<Path>) -> Map {
        let path = path.as_ref();
        self.group_by_with(|record, _| record.resolve(path).cloned().unwrap_or(Value::Null))
    }

    /// Groups records by a caller-computed key.
    pub fn group_by_with(&self, mut key: impl FnMut(&Value, usize) -> Value) -> Map {
        let mut groups = Map::new();
        for (index, record) in self.iter().enumerate() {
            let group_key = key(record, index).group_key();
            let bucket = groups.entry_or_insert_with(&group_key, || Value::List(List::new()));
            bucket
                .as_list_mut()
                .expect("bucket is always a list")
                .push(record.clone());
        }
        groups
    }

    /// Keys records by the value at `path`; the most recent record wins on
    /// collision.
    pub fn key_by(&self, path: impl AsRef<Path>) -> Map {
        let path = path.as_ref();
        self.key_by_with(|record, _| record.resolve(path).cloned().unwrap_or(Value::Null))
    }

    /// Keys records by a caller-computed key, last write wins.
    pub fn key_by_with(&self, mut key: impl FnMut(&Value, usize) -> Value) -> Map {
        let mut keyed = Map::new();
        for (index, record) in self.iter().enumerate() {
            keyed.insert(key(record, index).group_key(), record.clone());
        }
        keyed
    }

    /// Counts records per key at `path`.
    pub fn count_by(&self, path: impl AsRef<Path>) -> Map {
        let path = path.as_ref();
        self.count_by_with(|record, _| record.resolve(path).cloned().unwrap_or(Value::Null))
    }

    /// Counts records per caller-computed key.
    pub fn count_by_with(&self, mut key: impl FnMut(&Value, usize) -> Value) -> Map {
        let mut counts = Map::new();
        for (index, record) in self.iter().enumerate() {
            let group_key = key(record, index).group_key();
            let slot = counts.entry_or_insert_with(&group_key, || Value::Int(0));
            if let Value::Int(count) = slot {
                *count += 1;
            }
        }
        counts
    }

    /// Returns the values whose key occurs more than once, one entry per
    /// duplicated key, in first-occurrence order.
    pub fn duplicates(&self) -> List {
        let counts = self.count_by_with(|value, _| value.clone());
        let mut seen = HashSet::new();
        let mut out = List::new();
        for item in self {
            let key = item.group_key();
            let count = counts.get_key(&key).and_then(Value::as_int).unwrap_or(0);
            if count > 1 && seen.insert(key) {
                out.push(item.clone());
            }
        }
        out
    }

    /// Builds a tree from a flat record list using the default
    /// `"parent_id"` / `"children"` field names. See [`List::tree_with`].
    pub fn tree(&self) -> List {
        self.tree_with("parent_id", "children")
    }

    /// Builds a tree from a flat record list.
    ///
    /// Roots are records whose `parent_field` resolves to `Null` or is
    /// absent. Children attach recursively where their parent key equals a
    /// node's `id` value. The caller must guarantee the parent graph is
    /// acyclic and ids are unique; a cyclic input recurses without bound.
    pub fn tree_with(&self, parent_field: &str, children_field: &str) -> List {
        let groups = self.group_by(parent_field);
        let roots: List = match groups.get_key("").and_then(Value::as_list) {
            Some(bucket) => bucket
                .iter()
                .map(|record| attach_children(record, &groups, children_field))
                .collect(),
            None => List::new(),
        };
        trace!(records = self.len(), roots = roots.len(), "built tree");
        roots
    }
}

fn attach_children(record: &Value, groups: &Map, children_field: &str) -> Value {
    let Some(node) = record.as_map() else {
        // only map records can carry a children field
        return record.clone();
    };
    let id_key = record.resolve("id").cloned().unwrap_or(Value::Null).group_key();
    let children: List = match groups.get_key(&id_key).and_then(Value::as_list) {
        // an empty id would collide with the root bucket; such nodes get no children
        Some(bucket) if !id_key.is_empty() => bucket
            .iter()
            .map(|child| attach_children(child, groups, children_field))
            .collect(),
        _ => List::new(),
    };
    let mut node = node.clone();
    node.insert(children_field, Value::List(children));
    Value::Map(node)
}
