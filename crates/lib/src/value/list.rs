//! Ordered sequence of values.
//!
//! [`List`] is the sequential container of the value model. Mutating methods
//! (`push`, `prepend`, `splice`) work in place; the slicing and combining
//! methods (`slice`, `chunk`, `reversed`) return new lists. Grouping and
//! sorting over lists of records live in the `group` and `combine` modules.

use std::fmt;

use rand::seq::SliceRandom;

use super::Value;
use crate::errors::Error;

/// An ordered sequence of dynamic values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an element by index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to an element by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Returns the first element.
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last element.
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Appends an element.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Inserts an element at the front.
    pub fn prepend(&mut self, value: impl Into<Value>) {
        self.items.insert(0, value.into());
    }

    /// Inserts an element at `index`, shifting the rest right.
    ///
    /// Indexes past the end append.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        let index = index.min(self.items.len());
        self.items.insert(index, value.into());
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes `length` elements starting at `offset`, inserting
    /// `replacement` in their place, and returns the removed elements.
    ///
    /// Out-of-range offsets and lengths are clamped.
    pub fn splice(
        &mut self,
        offset: usize,
        length: usize,
        replacement: impl IntoIterator<Item = Value>,
    ) -> List {
        let start = offset.min(self.items.len());
        let end = start.saturating_add(length).min(self.items.len());
        let removed: Vec<Value> = self.items.splice(start..end, replacement).collect();
        List::from(removed)
    }

    /// Returns a new list with `length` elements starting at `offset`.
    pub fn slice(&self, offset: usize, length: usize) -> List {
        let start = offset.min(self.items.len());
        let end = start.saturating_add(length).min(self.items.len());
        List::from(self.items[start..end].to_vec())
    }

    /// Splits the list into chunks of at most `size` elements.
    ///
    /// A zero size yields a single chunk holding everything.
    pub fn chunk(&self, size: usize) -> List {
        if size == 0 {
            let mut out = List::new();
            if !self.is_empty() {
                out.push(self.clone());
            }
            return out;
        }
        self.items
            .chunks(size)
            .map(|chunk| Value::List(List::from(chunk.to_vec())))
            .collect()
    }

    /// Returns a new list with the elements in reverse order.
    pub fn reversed(&self) -> List {
        let mut items = self.items.clone();
        items.reverse();
        List::from(items)
    }

    /// Sums the numeric elements; non-numeric elements are ignored.
    ///
    /// The result is an `Int` unless any float participates or the integer
    /// sum overflows `i64`, in which case it spills into the float domain.
    pub fn sum(&self) -> Value {
        let mut int_sum: i64 = 0;
        let mut float_sum: f64 = 0.0;
        let mut saw_float = false;
        for item in &self.items {
            match item {
                Value::Int(n) => match int_sum.checked_add(*n) {
                    Some(next) => int_sum = next,
                    None => {
                        float_sum += int_sum as f64 + *n as f64;
                        int_sum = 0;
                        saw_float = true;
                    }
                },
                Value::Float(x) => {
                    float_sum += x;
                    saw_float = true;
                }
                _ => {}
            }
        }
        if saw_float {
            Value::Float(float_sum + int_sum as f64)
        } else {
            Value::Int(int_sum)
        }
    }

    /// Returns the smallest element under the total value ordering.
    pub fn min(&self) -> Option<&Value> {
        self.items
            .iter()
            .min_by(|a, b| crate::combine::compare(a, b))
    }

    /// Returns the largest element under the total value ordering.
    pub fn max(&self) -> Option<&Value> {
        self.items
            .iter()
            .max_by(|a, b| crate::combine::compare(a, b))
    }

    /// Picks `count` distinct random elements.
    ///
    /// # Errors
    /// Returns [`Error::SampleTooLarge`] when `count` exceeds the list length.
    pub fn sample(&self, count: usize) -> crate::Result<List> {
        if count > self.items.len() {
            return Err(Error::SampleTooLarge {
                requested: count,
                available: self.items.len(),
            });
        }
        let mut rng = rand::thread_rng();
        let picked: Vec<Value> = self
            .items
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect();
        Ok(List::from(picked))
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::ops::Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> List {
        values.iter().map(|&n| Value::Int(n)).collect()
    }

    #[test]
    fn test_push_prepend() {
        let mut list = List::new();
        list.push(2);
        list.push(3);
        list.prepend(1);
        assert_eq!(list, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_splice_returns_removed() {
        let mut list = ints(&[1, 2, 3, 4, 5]);
        let removed = list.splice(1, 2, vec![Value::Int(9)]);
        assert_eq!(removed, ints(&[2, 3]));
        assert_eq!(list, ints(&[1, 9, 4, 5]));
    }

    #[test]
    fn test_splice_clamps_range() {
        let mut list = ints(&[1, 2]);
        let removed = list.splice(5, 10, vec![]);
        assert!(removed.is_empty());
        assert_eq!(list, ints(&[1, 2]));
    }

    #[test]
    fn test_slice_and_chunk() {
        let list = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(list.slice(1, 2), ints(&[2, 3]));
        assert_eq!(list.slice(4, 10), ints(&[5]));

        let chunks = list.chunk(2);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], Value::List(ints(&[1, 2])));
        assert_eq!(chunks[2], Value::List(ints(&[5])));
    }

    #[test]
    fn test_sum_int_and_float() {
        assert_eq!(ints(&[1, 2, 3]).sum(), Value::Int(6));

        let mut mixed = ints(&[1, 2]);
        mixed.push(0.5);
        mixed.push("not a number");
        assert_eq!(mixed.sum(), Value::Float(3.5));
    }

    #[test]
    fn test_sum_overflow_spills_to_float() {
        let list = ints(&[i64::MAX, 1]);
        assert_eq!(list.sum(), Value::Float(i64::MAX as f64 + 1.0));
    }

    #[test]
    fn test_min_max() {
        let list = ints(&[3, 1, 2]);
        assert_eq!(list.min(), Some(&Value::Int(1)));
        assert_eq!(list.max(), Some(&Value::Int(3)));
        assert_eq!(List::new().min(), None);
    }

    #[test]
    fn test_sample_bounds() {
        let list = ints(&[1, 2, 3]);
        let sampled = list.sample(2).unwrap();
        assert_eq!(sampled.len(), 2);

        let err = list.sample(4).unwrap_err();
        assert!(matches!(
            err,
            Error::SampleTooLarge {
                requested: 4,
                available: 3
            }
        ));
    }
}
