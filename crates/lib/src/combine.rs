//! Multi-input combination and comparison algorithms.
//!
//! Everything here is recursive by nature: cross products, multi-key
//! sorting under the total value ordering, recursive diff and merge, and
//! structural equality. Self-referential containers cannot be built with
//! this value model, but deeply nested input recurses without a depth
//! guard.

use std::cmp::Ordering;

use tracing::trace;

use crate::{
    errors::Error,
    value::{List, Map, Value},
};

/// Sort direction for [`List::sort_by`] and [`List::sort_by_many`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

/// Total ordering over values.
///
/// Variants rank `Null < Bool < numbers < Text < List < Map`. `Int` and
/// `Float` compare numerically against each other; floats use `total_cmp`,
/// so `NaN` compares equal to itself. Lists compare elementwise then by
/// length; maps compare by sorted key then by the value under each key.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Int(x), Value::Float(y)) => (*x as f64).total_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.total_cmp(&(*y as f64)),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => compare_lists(x, y),
        (Value::Map(x), Value::Map(y)) => compare_maps(x, y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
        Value::List(_) => 4,
        Value::Map(_) => 5,
    }
}

fn compare_lists(a: &List, b: &List) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match compare(x, y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

fn compare_maps(a: &Map, b: &Map) -> Ordering {
    let mut keys_a: Vec<&str> = a.keys().collect();
    let mut keys_b: Vec<&str> = b.keys().collect();
    keys_a.sort_unstable();
    keys_b.sort_unstable();
    for (ka, kb) in keys_a.iter().zip(keys_b.iter()) {
        match ka.cmp(kb) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let x = a.get_key(ka).unwrap_or(&Value::Null);
        let y = b.get_key(kb).unwrap_or(&Value::Null);
        match compare(x, y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    keys_a.len().cmp(&keys_b.len())
}

/// Structural equality with a strictness switch.
///
/// Strict comparison is exact-variant equality. Loose comparison treats
/// `Int` and `Float` with the same numeric value as equal, compares numeric
/// text against numbers, and recurses loosely into containers. Two texts
/// always compare as strings, even when both parse as numbers.
pub fn equals(a: &Value, b: &Value, strict: bool) -> bool {
    if strict {
        return a == b;
    }
    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| equals(l, r, false))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter().all(|(key, l)| {
                    y.get_key(key).is_some_and(|r| equals(l, r, false))
                })
        }
        (Value::Text(_), Value::Text(_)) => a == b,
        _ => {
            if a == b {
                return true;
            }
            matches!((numeric(a), numeric(b)), (Some(x), Some(y)) if x == y)
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(x) => Some(*x),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Positional cross product: one output row per combination, the last
/// input sequence varying fastest. Any empty input empties the product.
pub fn cross_join(lists: &[List]) -> List {
    let mut rows: Vec<List> = vec![List::new()];
    for list in lists {
        let mut grown = Vec::with_capacity(rows.len().saturating_mul(list.len()));
        for row in &rows {
            for item in list {
                let mut next = row.clone();
                next.push(item.clone());
                grown.push(next);
            }
        }
        rows = grown;
    }
    rows.into_iter().map(Value::List).collect()
}

/// Recursively sorts a value: map keys ascending, list elements under
/// [`compare`], applied at every depth. Scalars pass through.
pub fn sort_recursive(value: &Value) -> Value {
    match value {
        Value::Map(map) => {
            let mut keys: Vec<&str> = map.keys().collect();
            keys.sort_unstable();
            let mut sorted = Map::new();
            for key in keys {
                if let Some(nested) = map.get_key(key) {
                    sorted.insert(key.to_string(), sort_recursive(nested));
                }
            }
            Value::Map(sorted)
        }
        Value::List(list) => {
            let mut items: Vec<Value> = list.iter().map(sort_recursive).collect();
            items.sort_by(compare);
            Value::List(List::from(items))
        }
        leaf => leaf.clone(),
    }
}

impl List {
    /// Stable sort by the value at a single path. See [`List::sort_by_many`].
    pub fn sort_by(&self, path: &str, direction: Direction) -> List {
        self.sort_by_many(&[(path, direction)])
    }

    /// Stable multi-key sort.
    ///
    /// Records compare key by key in the given order; the first non-equal
    /// comparison decides, flipped when its direction is descending. A full
    /// tie keeps the input order. A path that does not resolve compares as
    /// `Null`.
    pub fn sort_by_many(&self, keys: &[(&str, Direction)]) -> List {
        let mut items: Vec<Value> = self.iter().cloned().collect();
        items.sort_by(|a, b| {
            for (path, direction) in keys {
                let left = a.resolve(*path).unwrap_or(&Value::Null);
                let right = b.resolve(*path).unwrap_or(&Value::Null);
                let ord = direction.apply(compare(left, right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        List::from(items)
    }

    /// Stable multi-key sort with caller-computed keys.
    ///
    /// The closure form of [`List::sort_by_many`]: each pair holds a key
    /// extractor and a direction, compared in order with the same
    /// first-non-equal-wins and tie-preservation rules.
    pub fn sort_by_many_with(
        &self,
        keys: &mut [(&mut dyn FnMut(&Value) -> Value, Direction)],
    ) -> List {
        let mut items: Vec<Value> = self.iter().cloned().collect();
        items.sort_by(|a, b| {
            for (key, direction) in keys.iter_mut() {
                let left = key(a);
                let right = key(b);
                let ord = direction.apply(compare(&left, &right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        List::from(items)
    }
}

impl Map {
    /// Builds the full cross product of `key -> sequence` entries, one map
    /// per combination.
    ///
    /// Grown incrementally from a single empty combination, so for keys in
    /// insertion order the last key varies fastest. A non-list entry value
    /// counts as a one-element sequence; any empty sequence empties the
    /// whole product.
    pub fn cartesian(&self) -> List {
        let mut combos: Vec<Map> = vec![Map::new()];
        for (key, value) in self.iter() {
            let options: Vec<&Value> = match value {
                Value::List(list) => list.iter().collect(),
                other => vec![other],
            };
            let mut grown = Vec::with_capacity(combos.len().saturating_mul(options.len()));
            for combo in &combos {
                for option in &options {
                    let mut next = combo.clone();
                    next.insert(key.to_string(), (*option).clone());
                    grown.push(next);
                }
            }
            combos = grown;
        }
        trace!(keys = self.len(), combinations = combos.len(), "built cartesian product");
        combos.into_iter().map(Value::Map).collect()
    }

    /// Asymmetric recursive diff: entries of `self` that are absent from
    /// `other` or differ from it.
    ///
    /// When both sides hold maps the diff recurses and the key is reported
    /// only if the nested diff is non-empty. Keys present only in `other`
    /// are never reported.
    pub fn diff_recursive(&self, other: &Map) -> Map {
        let mut diff = Map::new();
        for (key, mine) in self.iter() {
            match other.get_key(key) {
                None => {
                    diff.insert(key.to_string(), mine.clone());
                }
                Some(theirs) => match (mine, theirs) {
                    (Value::Map(a), Value::Map(b)) => {
                        let nested = a.diff_recursive(b);
                        if !nested.is_empty() {
                            diff.insert(key.to_string(), Value::Map(nested));
                        }
                    }
                    _ => {
                        if mine != theirs {
                            diff.insert(key.to_string(), mine.clone());
                        }
                    }
                },
            }
        }
        diff
    }

    /// Recursive merge with a caller-controlled collision policy.
    ///
    /// For each key of `other`: when both sides hold maps the merge
    /// recurses; when `self` has the key, `combine(mine, theirs, key)`
    /// decides the merged value; new keys take `other`'s value directly.
    pub fn merge_recursive_with(
        &self,
        other: &Map,
        mut combine: impl FnMut(&Value, &Value, &str) -> Value,
    ) -> Map {
        merge_recursive_inner(self, other, &mut combine)
    }

    /// Pairs a list of keys with a list of values.
    ///
    /// Keys are coerced through [`Value::group_key`].
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] when the lists differ in length.
    pub fn combine(keys: &List, values: &List) -> crate::Result<Map> {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut map = Map::new();
        for (key, value) in keys.iter().zip(values.iter()) {
            map.insert(key.group_key(), value.clone());
        }
        Ok(map)
    }

    /// Exchanges keys and values: each value becomes a key through
    /// [`Value::group_key`] and its key becomes a `Text` value. Later
    /// entries win on key collision.
    pub fn flip(&self) -> Map {
        let mut flipped = Map::new();
        for (key, value) in self.iter() {
            flipped.insert(value.group_key(), Value::Text(key.to_string()));
        }
        flipped
    }
}

fn merge_recursive_inner(
    a: &Map,
    b: &Map,
    combine: &mut dyn FnMut(&Value, &Value, &str) -> Value,
) -> Map {
    let mut merged = a.clone();
    for (key, theirs) in b.iter() {
        let next = match (a.get_key(key), theirs) {
            (Some(Value::Map(am)), Value::Map(bm)) => {
                Value::Map(merge_recursive_inner(am, bm, combine))
            }
            (Some(mine), _) => combine(mine, theirs, key),
            (None, _) => theirs.clone(),
        };
        merged.insert(key.to_string(), next);
    }
    merged
}
