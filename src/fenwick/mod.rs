//! Prefix sums over a 1D array with logarithmic point update and range query.
//!
//! Positions passed to [`Fenwick::update`] are 1-indexed, query bounds are 0-indexed and
//! inclusive.

use crate::index::{next_index, prev_index};
use crate::{FenwickError, Result, Value};
use std::convert::TryFrom;
use std::iter::FromIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fenwick {
    // tree[0] is a sentinel, tree[i] holds the sum of (i - lowbit(i), i]
    tree: Vec<Value>,
}

impl Fenwick {
    /// Create a tree of `len` zeroes.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
        }
    }

    pub fn from_values(values: &[Value]) -> Self {
        let mut res = Self::new(values.len());
        res.fill(values);
        res
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `values[i]` to position `i + 1` for every element.
    ///
    /// Fails without touching the tree if there are more values than positions.
    pub fn build(&mut self, values: &[Value]) -> Result<()> {
        if values.len() > self.len() {
            return Err(FenwickError::out_of_range(values.len(), self.len()));
        }
        self.fill(values);
        Ok(())
    }

    fn fill(&mut self, values: &[Value]) {
        for (i, v) in values.iter().enumerate() {
            self.add(i + 1, *v);
        }
        log::debug!("Fenwick tree built from {} values", values.len());
    }

    /// Add `delta` to the 1-indexed position `index`.
    pub fn update(&mut self, index: usize, delta: Value) -> Result<()> {
        if index == 0 || index > self.len() {
            log::trace!("rejected update at {} of {}", index, self.len());
            return Err(FenwickError::out_of_range(index, self.len()));
        }
        self.add(index, delta);
        Ok(())
    }

    fn add(&mut self, mut index: usize, delta: Value) {
        debug_assert!(index > 0);
        let n = self.len();
        while index <= n {
            self.tree[index] = self.tree[index].wrapping_add(delta);
            index = next_index(index);
        }
    }

    /// Sum of the elements `[0, right]`.
    ///
    /// Lenient on bounds: anything below `0` is the empty prefix, anything past the end is the
    /// total.
    pub fn sum_from_start(&self, right: isize) -> Value {
        let idx = match usize::try_from(right.saturating_add(1)) {
            Ok(idx) if idx > 0 => idx.min(self.len()),
            _ => return 0,
        };
        self.prefix(idx)
    }

    /// Sum of the first `idx` elements, `idx <= len`
    fn prefix(&self, mut idx: usize) -> Value {
        let mut sum: Value = 0;
        while idx > 0 {
            sum = sum.wrapping_add(self.tree[idx]);
            idx = prev_index(idx);
        }
        sum
    }

    /// Sum of the elements `[left, right]`, `0` if the range is empty.
    pub fn sum(&self, left: isize, right: isize) -> Value {
        if left > right {
            return 0;
        }
        self.sum_from_start(right)
            .wrapping_sub(self.sum_from_start(left.saturating_sub(1)))
    }

    pub fn total(&self) -> Value {
        self.prefix(self.len())
    }

    /// Current value of the 0-indexed element `i`.
    pub fn get(&self, i: usize) -> Option<Value> {
        if i >= self.len() {
            return None;
        }
        Some(self.prefix(i + 1).wrapping_sub(self.prefix(i)))
    }

    /// The raw backing array, including the unused slot at index 0.
    pub fn as_slice(&self) -> &[Value] {
        &self.tree
    }
}

impl Default for Fenwick {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FromIterator<Value> for Fenwick {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Value>,
    {
        let values = it.into_iter().collect::<Vec<_>>();
        Self::from_values(&values)
    }
}
