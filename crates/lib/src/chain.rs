//! Fluent wrapper over the container operations.
//!
//! [`Chain`] owns a single [`Value`] and exposes the path, flatten, group
//! and combinator operations as consuming methods, so a pipeline reads as
//! one expression:
//!
//! ```
//! use dotmap::{Chain, Map};
//!
//! let chain = Chain::new(Map::new())
//!     .set("user.name", "Alice")
//!     .set("user.age", 30)
//!     .forget("user.age");
//!
//! assert!(chain.has("user.name"));
//! assert!(!chain.has("user.age"));
//! ```
//!
//! Each step consumes the chain and hands back a new one, so no external
//! alias can observe an intermediate state.

use std::fmt;

use crate::{
    combine::Direction,
    path::Path,
    value::{List, Map, Value},
};

/// A chainable wrapper around one dynamic value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    value: Value,
}

impl Chain {
    /// Wraps a value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Parses a JSON document into a chain.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] on malformed JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(Self {
            value: serde_json::from_str(json)?,
        })
    }

    /// Borrows the wrapped value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwraps the chain.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Resolves a dot-notation path. See [`Value::resolve`].
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.value.resolve(path)
    }

    /// Resolves a path, falling back to a default on a miss.
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        match self.value.resolve(path) {
            Some(found) => found.clone(),
            None => default.into(),
        }
    }

    /// Returns `true` if the path resolves, including to `Null`.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.value.resolve(path).is_some()
    }

    /// Sets a value at a path, creating intermediate maps.
    pub fn set(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.value.set_path(path, value);
        self
    }

    /// Removes the value at a path; a miss is a no-op.
    pub fn forget(mut self, path: impl AsRef<Path>) -> Self {
        if let Value::Map(map) = &mut self.value {
            map.forget(path);
        }
        self
    }

    /// Appends to the list at a path (or to the wrapped list itself when
    /// the path is empty).
    pub fn push(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        let path = path.as_ref();
        match &mut self.value {
            Value::List(list) if path.is_empty() => list.push(value),
            Value::Map(map) => map.push(path, value),
            _ => {}
        }
        self
    }

    /// Prepends to the list at a path; see [`Chain::push`].
    pub fn prepend(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        let path = path.as_ref();
        match &mut self.value {
            Value::List(list) if path.is_empty() => list.prepend(value),
            Value::Map(map) => map.prepend(path, value),
            _ => {}
        }
        self
    }

    /// Keeps only the elements (list) or entry values (map) the predicate
    /// accepts.
    pub fn where_(mut self, mut keep: impl FnMut(&Value) -> bool) -> Self {
        match &mut self.value {
            Value::List(list) => {
                let filtered: List = list.iter().filter(|item| keep(item)).cloned().collect();
                *list = filtered;
            }
            Value::Map(map) => map.retain(|_, value| keep(value)),
            _ => {}
        }
        self
    }

    /// Applies a transformation to every element (list), entry value (map),
    /// or the wrapped scalar itself.
    pub fn map(mut self, mut apply: impl FnMut(Value) -> Value) -> Self {
        fn replace_with(slot: &mut Value, apply: &mut dyn FnMut(Value) -> Value) {
            let old = std::mem::replace(slot, Value::Null);
            *slot = apply(old);
        }
        match &mut self.value {
            Value::List(list) => {
                for item in list.iter_mut() {
                    replace_with(item, &mut apply);
                }
            }
            Value::Map(map) => {
                for (_, value) in map.iter_mut() {
                    replace_with(value, &mut apply);
                }
            }
            leaf => replace_with(leaf, &mut apply),
        }
        self
    }

    /// Stable single-key sort of a wrapped record list.
    pub fn sort_by(self, path: &str, direction: Direction) -> Self {
        self.sort_by_many(&[(path, direction)])
    }

    /// Stable multi-key sort of a wrapped record list. See
    /// [`List::sort_by_many`].
    pub fn sort_by_many(mut self, keys: &[(&str, Direction)]) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::List(list.sort_by_many(keys));
        }
        self
    }

    /// Groups a wrapped record list into buckets. See [`List::group_by`].
    pub fn group_by(mut self, path: impl AsRef<Path>) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::Map(list.group_by(path));
        }
        self
    }

    /// Keys a wrapped record list, last record per key winning.
    pub fn key_by(mut self, path: impl AsRef<Path>) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::Map(list.key_by(path));
        }
        self
    }

    /// Counts records per key in a wrapped record list.
    pub fn count_by(mut self, path: impl AsRef<Path>) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::Map(list.count_by(path));
        }
        self
    }

    /// Flattens a wrapped map into dot-notation keys. See [`Map::dot`].
    pub fn dot(mut self) -> Self {
        if let Value::Map(map) = &self.value {
            self.value = Value::Map(map.dot());
        }
        self
    }

    /// Alias for [`Chain::dot`].
    pub fn flatten(self) -> Self {
        self.dot()
    }

    /// Expands a wrapped flat map back into nesting. See [`Map::undot`].
    pub fn undot(mut self) -> Self {
        if let Value::Map(map) = &self.value {
            self.value = Value::Map(map.undot());
        }
        self
    }

    /// Merges another map's entries over the wrapped map, later keys
    /// winning.
    pub fn merge(mut self, other: &Map) -> Self {
        if let Value::Map(map) = &mut self.value {
            map.extend_from(other);
        }
        self
    }

    /// Keeps `length` elements of a wrapped list starting at `offset`.
    pub fn slice(mut self, offset: usize, length: usize) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::List(list.slice(offset, length));
        }
        self
    }

    /// Splits a wrapped list into chunks of at most `size` elements.
    pub fn chunk(mut self, size: usize) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::List(list.chunk(size));
        }
        self
    }

    /// Reverses a wrapped list.
    pub fn reverse(mut self) -> Self {
        if let Value::List(list) = &self.value {
            self.value = Value::List(list.reversed());
        }
        self
    }

    /// Exchanges keys and values of a wrapped map. See [`Map::flip`].
    pub fn flip(mut self) -> Self {
        if let Value::Map(map) = &self.value {
            self.value = Value::Map(map.flip());
        }
        self
    }

    /// Picks `count` distinct random elements of the wrapped population.
    ///
    /// # Errors
    /// Returns [`crate::Error::SampleTooLarge`] when `count` exceeds the
    /// population size.
    pub fn random(&self, count: usize) -> crate::Result<Chain> {
        let sampled = self.population().sample(count)?;
        Ok(Chain::new(Value::List(sampled)))
    }

    /// Sums the numeric elements of the wrapped population.
    pub fn sum(&self) -> Value {
        self.population().sum()
    }

    /// Smallest element of the wrapped population under the total value
    /// ordering.
    pub fn min(&self) -> Option<Value> {
        self.population().min().cloned()
    }

    /// Largest element of the wrapped population.
    pub fn max(&self) -> Option<Value> {
        self.population().max().cloned()
    }

    /// Number of elements: list length, map entry count, 0 for `Null`,
    /// 1 for any other scalar.
    pub fn count(&self) -> usize {
        match &self.value {
            Value::List(list) => list.len(),
            Value::Map(map) => map.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    /// First element of a wrapped list, or first entry value of a wrapped
    /// map.
    pub fn first(&self) -> Option<&Value> {
        match &self.value {
            Value::List(list) => list.first(),
            Value::Map(map) => map.values().next(),
            _ => None,
        }
    }

    /// Last element of a wrapped list, or last entry value of a wrapped
    /// map.
    pub fn last(&self) -> Option<&Value> {
        match &self.value {
            Value::List(list) => list.last(),
            Value::Map(map) => map.values().last(),
            _ => None,
        }
    }

    /// Keys of a wrapped map, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        match &self.value {
            Value::Map(map) => map.keys().map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Values of the wrapped container as a list.
    pub fn values(&self) -> List {
        self.population()
    }

    /// Iterates entries of a wrapped map; empty for anything else.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        match &self.value {
            Value::Map(map) => Box::new(map.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Iterates the wrapped container uniformly: list elements or map
    /// entry values, in order.
    pub fn items(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match &self.value {
            Value::List(list) => Box::new(list.iter()),
            Value::Map(map) => Box::new(map.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Serializes the wrapped value to JSON.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] when encoding fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.value)?)
    }

    /// Compact JSON rendering without going through serde. See
    /// [`Value::to_json_string`].
    pub fn to_json_string(&self) -> String {
        self.value.to_json_string()
    }

    fn population(&self) -> List {
        match &self.value {
            Value::List(list) => list.clone(),
            Value::Map(map) => map.values().cloned().collect(),
            Value::Null => List::new(),
            scalar => List::from(vec![scalar.clone()]),
        }
    }
}

impl From<Value> for Chain {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Map> for Chain {
    fn from(map: Map) -> Self {
        Self::new(map)
    }
}

impl From<List> for Chain {
    fn from(list: List) -> Self {
        Self::new(list)
    }
}

impl std::ops::Index<&str> for Chain {
    type Output = Value;

    /// Panics when the path does not resolve; [`Chain::get`] is the
    /// fallible form.
    fn index(&self, path: &str) -> &Value {
        self.value
            .resolve(path)
            .unwrap_or_else(|| panic!("no value at path {path:?}"))
    }
}

impl std::ops::IndexMut<&str> for Chain {
    /// An absent path is materialized as `Null` before the reference is
    /// handed out.
    fn index_mut(&mut self, path: &str) -> &mut Value {
        if self.value.resolve(path).is_none() {
            self.value.set_path(path, Value::Null);
        }
        self.value.resolve_mut(path).expect("path materialized above")
    }
}

impl fmt::Display for Chain {
    /// Human-readable indented rendering.
    ///
    /// Maps print one `"key" => value` entry per line with two spaces of
    /// indent per depth; lists print inline; strings print quoted. Empty
    /// containers print `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indented(f, &self.value, 0)
    }
}

fn fmt_indented(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Map(map) if map.is_empty() => write!(f, "[]"),
        Value::Map(map) => {
            writeln!(f, "[")?;
            let inner = "  ".repeat(depth + 1);
            let mut first = true;
            for (key, entry) in map.iter() {
                if !first {
                    writeln!(f, ",")?;
                }
                first = false;
                write!(f, "{inner}\"{key}\" => ")?;
                fmt_indented(f, entry, depth + 1)?;
            }
            writeln!(f)?;
            write!(f, "{}]", "  ".repeat(depth))
        }
        Value::List(list) if list.is_empty() => write!(f, "[]"),
        Value::List(list) => {
            write!(f, "[")?;
            for (i, item) in list.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_indented(f, item, depth)?;
            }
            write!(f, "]")
        }
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(x) => write!(f, "{x}"),
        Value::Text(s) => write!(f, "{s:?}"),
    }
}
