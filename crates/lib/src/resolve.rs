//! Dot-notation path resolution over nested containers.
//!
//! This module implements get/set/has/forget and the operations built on
//! them for [`Map`] roots, with [`Value::resolve`] as the shared descent
//! primitive used by grouping and the chain wrapper.
//!
//! # Precedence
//!
//! A top-level key equal to the whole dotted string shadows segment
//! traversal: if a map literally contains the key `"a.b"`, `get("a.b")`
//! returns that entry and never looks inside `a`. This matches the source
//! data people feed these utilities (decoded payloads can legitimately carry
//! dotted keys) and is applied consistently by `get`, `has` and `forget`.
//! `set` always walks segments.
//!
//! # Mutation policy
//!
//! `set` materializes missing intermediate levels as empty maps. A leaf
//! value in the middle of a path is replaced by a fresh map; the data loss
//! at that node is part of the contract. List intermediates are never lost
//! to a numeric segment: an in-range index descends and an index one past
//! the end appends (a fresh map when the path continues). Only a
//! non-numeric segment, or an index further past the end, replaces the list
//! with a fresh map like a leaf.
//!
//! ```
//! use dotmap::{Map, Value};
//!
//! let mut map = Map::new();
//! map.set("user.profile.name", "Alice");
//!
//! assert_eq!(map.get("user.profile.name"), Some(&Value::Text("Alice".into())));
//! assert!(map.has("user.profile"));
//! assert!(!map.has("user.missing"));
//! ```

use crate::{
    errors::Error,
    path::Path,
    value::{List, Map, Value},
};

impl Value {
    /// Resolves a dot-notation path against this value.
    ///
    /// An empty path returns the value itself. Maps are descended by key
    /// (with the literal-first rule at the top level), lists by numeric
    /// segment. Any miss, or a leaf in an intermediate position, yields
    /// `None`; resolution never fails partially.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        if path.is_empty() {
            return Some(self);
        }
        if let Value::Map(map) = self {
            if let Some(found) = map.get_key(path.as_str()) {
                return Some(found);
            }
        }

        let mut current = self;
        for segment in path.segments() {
            current = match current {
                Value::Map(map) => map.get_key(segment)?,
                Value::List(list) => list.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutable counterpart of [`Value::resolve`].
    pub fn resolve_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let path = path.as_ref();
        if path.is_empty() {
            return Some(self);
        }
        if matches!(self, Value::Map(map) if map.contains_key(path.as_str())) {
            return match self {
                Value::Map(map) => map.get_key_mut(path.as_str()),
                _ => unreachable!(),
            };
        }

        let mut current = self;
        for segment in path.segments() {
            current = match current {
                Value::Map(map) => map.get_key_mut(segment)?,
                Value::List(list) => list.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Sets a value at a path, creating intermediate maps as needed.
    ///
    /// An empty path replaces this value entirely. Returns the previous
    /// value at the leaf, if any.
    pub fn set_path(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        let segments: Vec<&str> = path.as_ref().segments().collect();
        self.set_segments(&segments, value.into())
    }

    fn set_segments(&mut self, segments: &[&str], value: Value) -> Option<Value> {
        let Some((first, rest)) = segments.split_first() else {
            return Some(std::mem::replace(self, value));
        };

        // In-range list indexes descend; appending one past the end is the
        // list analogue of creating a missing key (a fresh map when the path
        // continues deeper).
        if let Value::List(list) = self {
            if let Ok(index) = first.parse::<usize>() {
                if index < list.len() {
                    let slot = list.get_mut(index).expect("index checked");
                    if rest.is_empty() {
                        return Some(std::mem::replace(slot, value));
                    }
                    if slot.is_leaf() {
                        *slot = Value::Map(Map::new());
                    }
                    return slot.set_segments(rest, value);
                }
                if index == list.len() {
                    if rest.is_empty() {
                        list.push(value);
                        return None;
                    }
                    list.push(Value::Map(Map::new()));
                    let slot = list.get_mut(index).expect("pushed above");
                    return slot.set_segments(rest, value);
                }
            }
        }

        // Everything else walks through a map, replacing a non-matching
        // node with a fresh one (expected data loss).
        if !matches!(self, Value::Map(_)) {
            *self = Value::Map(Map::new());
        }
        let map = self.as_map_mut().expect("map ensured above");
        if rest.is_empty() {
            map.insert(*first, value)
        } else {
            let entry = map.entry_or_insert_with(first, || Value::Map(Map::new()));
            if entry.is_leaf() {
                *entry = Value::Map(Map::new());
            }
            entry.set_segments(rest, value)
        }
    }
}

impl Map {
    /// Gets a value by key or dot-notation path.
    ///
    /// A literal top-level key equal to the whole path string takes
    /// precedence over traversal. Returns `None` when resolution fails at
    /// any step; a stored `Null` is found, not missing.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        if path.is_empty() {
            return None;
        }
        if let Some(found) = self.get_key(path.as_str()) {
            return Some(found);
        }

        let mut segments = path.segments();
        let mut current = self.get_key(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Map(map) => map.get_key(segment)?,
                Value::List(list) => list.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Gets a mutable reference to a value by key or path.
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let path = path.as_ref();
        if path.is_empty() {
            return None;
        }
        if self.contains_key(path.as_str()) {
            return self.get_key_mut(path.as_str());
        }

        let mut segments = path.segments();
        let mut current = self.get_key_mut(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Map(map) => map.get_key_mut(segment)?,
                Value::List(list) => list.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Gets a value by path, or a default when resolution fails.
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        self.get_or_else(path, || default.into())
    }

    /// Gets a value by path, invoking the producer only when resolution
    /// fails. The lazy form of [`Map::get_or`].
    pub fn get_or_else(&self, path: impl AsRef<Path>, default: impl FnOnce() -> Value) -> Value {
        match self.get(path) {
            Some(found) => found.clone(),
            None => default(),
        }
    }

    /// Gets a value by path, failing hard when it is absent.
    ///
    /// # Errors
    /// Returns [`Error::KeyNotFound`] when resolution fails. Use this for
    /// keys the caller requires to exist; plain [`Map::get`] is the soft
    /// form.
    pub fn get_or_fail(&self, path: impl AsRef<Path>) -> crate::Result<&Value> {
        let path = path.as_ref();
        self.get(path).ok_or_else(|| Error::KeyNotFound {
            path: path.as_str().to_string(),
        })
    }

    /// Gets a value by path with typed extraction.
    ///
    /// Returns `None` when the path is absent or the value has a different
    /// type.
    ///
    /// ```
    /// use dotmap::Map;
    ///
    /// let mut map = Map::new();
    /// map.set("user.age", 30);
    /// assert_eq!(map.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(map.get_as::<bool>("user.age"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = Error>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Sets a value at a key or path, creating intermediate maps.
    ///
    /// Returns the previous leaf value. With an empty path the whole map is
    /// replaced when the new value is itself a map (the root-replacement
    /// contract); any other value leaves the map untouched.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.segments().collect();
        match segments.split_first() {
            None => match value.into() {
                Value::Map(replacement) => {
                    Some(Value::Map(std::mem::replace(self, replacement)))
                }
                _ => None,
            },
            Some((first, [])) => self.insert(*first, value),
            Some((first, rest)) => {
                let entry = self.entry_or_insert_with(first, || Value::Map(Map::new()));
                if entry.is_leaf() {
                    *entry = Value::Map(Map::new());
                }
                entry.set_segments(rest, value.into())
            }
        }
    }

    /// Sets every `(path, value)` pair in order.
    pub fn set_many<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in pairs {
            self.set(path, value);
        }
    }

    /// Returns `true` if the path resolves to a value, including `Null`.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Returns `true` if every path resolves. An empty path set is `false`.
    pub fn has_all<K: AsRef<Path>>(&self, paths: impl IntoIterator<Item = K>) -> bool {
        let mut any = false;
        for path in paths {
            if !self.has(path) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Returns `true` if at least one path resolves. Empty input is `false`,
    /// never an error.
    pub fn has_any<K: AsRef<Path>>(&self, paths: impl IntoIterator<Item = K>) -> bool {
        paths.into_iter().any(|path| self.has(path))
    }

    /// Removes the value at a key or path.
    ///
    /// A literal top-level key match (dots included) is removed directly.
    /// Otherwise the walk stops silently if any intermediate is missing or
    /// not a container.
    pub fn forget(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if self.remove_key(path.as_str()).is_some() {
            return;
        }

        let segments: Vec<&str> = path.segments().collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return;
        };
        let Some((first, mid)) = parents.split_first() else {
            self.remove_key(leaf);
            return;
        };

        let Some(mut current) = self.get_key_mut(first) else {
            return;
        };
        for segment in mid {
            current = match current {
                Value::Map(map) => match map.get_key_mut(segment) {
                    Some(next) => next,
                    None => return,
                },
                Value::List(list) => {
                    match segment.parse::<usize>().ok().and_then(|i| list.get_mut(i)) {
                        Some(next) => next,
                        None => return,
                    }
                }
                _ => return,
            };
        }
        match current {
            Value::Map(map) => {
                map.remove_key(leaf);
            }
            Value::List(list) => {
                if let Ok(index) = leaf.parse::<usize>() {
                    list.remove(index);
                }
            }
            _ => {}
        }
    }

    /// Removes every path in the sequence; missing paths are no-ops.
    pub fn forget_many<K: AsRef<Path>>(&mut self, paths: impl IntoIterator<Item = K>) {
        for path in paths {
            self.forget(path);
        }
    }

    /// Gets and removes the value at a path.
    ///
    /// Returns the value that existed before removal; the map is left
    /// exactly as an independent [`Map::forget`] would leave it.
    pub fn pull(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        let value = self.get(path).cloned()?;
        self.forget(path);
        Some(value)
    }

    /// Sets a value only if the path does not already resolve.
    ///
    /// Returns whether the write happened.
    pub fn add(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> bool {
        let path = path.as_ref();
        if self.has(path) {
            return false;
        }
        self.set(path, value);
        true
    }

    /// Appends to the list at a path, materializing an empty list first if
    /// the path is absent. A non-list value at the path is replaced (same
    /// policy as setting through a leaf).
    pub fn push(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) {
        let path = path.as_ref();
        let mut list = match self.get(path) {
            Some(Value::List(existing)) => existing.clone(),
            _ => List::new(),
        };
        list.push(value);
        self.set(path, Value::List(list));
    }

    /// Prepends to the list at a path; see [`Map::push`].
    pub fn prepend(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) {
        let path = path.as_ref();
        let mut list = match self.get(path) {
            Some(Value::List(existing)) => existing.clone(),
            _ => List::new(),
        };
        list.prepend(value);
        self.set(path, Value::List(list));
    }

    /// Returns the value at a path, computing and storing it on first use.
    ///
    /// The producer runs only when the path does not resolve.
    pub fn remember(&mut self, path: impl AsRef<Path>, produce: impl FnOnce() -> Value) -> Value {
        let path = path.as_ref();
        if let Some(found) = self.get(path) {
            return found.clone();
        }
        let value = produce();
        self.set(path, value.clone());
        value
    }

    /// Sets a default at the path if absent, then returns a mutable
    /// reference to the value there.
    pub fn ensure(&mut self, path: impl AsRef<Path>, default: impl Into<Value>) -> &mut Value {
        let path = path.as_ref();
        if !self.has(path) {
            self.set(path, default);
        }
        self.get_mut(path).expect("value set above")
    }

    /// Replaces the value at a path through a closure.
    ///
    /// Returns `false` without invoking the closure when the path does not
    /// resolve.
    pub fn transform(
        &mut self,
        path: impl AsRef<Path>,
        apply: impl FnOnce(Value) -> Value,
    ) -> bool {
        match self.get_mut(path) {
            Some(slot) => {
                let old = std::mem::replace(slot, Value::Null);
                *slot = apply(old);
                true
            }
            None => false,
        }
    }
}
