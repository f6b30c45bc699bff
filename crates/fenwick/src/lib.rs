//! Fenwick trees (binary indexed trees) for point-add / prefix-sum workloads.
//!
//! [`Fenwick`] is 0-indexed and walks with `i | (i + 1)` upward and
//! `(i & (i + 1)) - 1` downward. [`OffsetFenwick`] exposes the same operations
//! over an arbitrary inclusive `i64` coordinate range.

use std::ops::{AddAssign, RangeInclusive, Sub};

#[derive(Clone, Debug)]
pub struct Fenwick<T> {
    tree: Vec<T>,
}

impl<T> Fenwick<T>
where
    T: Copy + Default + AddAssign + Sub<Output = T>,
{
    /// `n` zeros.
    pub fn new(n: usize) -> Self {
        Self {
            tree: vec![T::default(); n],
        }
    }

    /// O(n) build.
    pub fn from_slice(values: &[T]) -> Self {
        let mut tree = values.to_vec();
        let n = tree.len();
        for i in 0..n {
            let parent = i | (i + 1);
            if parent < n {
                let carry = tree[i];
                tree[parent] += carry;
            }
        }
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn add(&mut self, idx: usize, delta: T) {
        let n = self.tree.len();
        assert!(idx < n, "index {idx} out of bounds for length {n}");
        let mut i = idx;
        while i < n {
            self.tree[i] += delta;
            i |= i + 1;
        }
    }

    /// Sum of `[0, r]`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= len()`.
    pub fn prefix(&self, r: usize) -> T {
        let n = self.tree.len();
        assert!(r < n, "index {r} out of bounds for length {n}");
        self.prefix_unchecked(r + 1)
    }

    /// Sum of `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past the end.
    pub fn sum(&self, range: RangeInclusive<usize>) -> T {
        let (l, r) = range.into_inner();
        let n = self.tree.len();
        assert!(l <= r, "range {l}..={r} is inverted");
        assert!(r < n, "range {l}..={r} out of bounds for length {n}");
        self.prefix_unchecked(r + 1) - self.prefix_unchecked(l)
    }

    /// Sum of the first `count` elements.
    fn prefix_unchecked(&self, count: usize) -> T {
        debug_assert!(count <= self.tree.len());
        let mut acc = T::default();
        let mut end = count;
        while end > 0 {
            let i = end - 1;
            acc += self.tree[i];
            end = i & (i + 1);
        }
        acc
    }
}

/// Fenwick tree addressed by coordinates in `[lo, hi]`.
#[derive(Clone, Debug)]
pub struct OffsetFenwick<T> {
    lo: i64,
    hi: i64,
    inner: Fenwick<T>,
}

impl<T> OffsetFenwick<T>
where
    T: Copy + Default + AddAssign + Sub<Output = T>,
{
    /// # Panics
    ///
    /// Panics if `lo > hi`, or if the range holds more than `usize::MAX`
    /// coordinates.
    pub fn new(lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "coordinate range {lo}..={hi} is inverted");
        let width = usize::try_from(hi.abs_diff(lo))
            .ok()
            .and_then(|d| d.checked_add(1));
        let Some(width) = width else {
            panic!("coordinate range {lo}..={hi} is too wide");
        };
        Self {
            lo,
            hi,
            inner: Fenwick::new(width),
        }
    }

    /// `values[i]` sits at coordinate `lo + i`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty, or if the last coordinate would pass
    /// `i64::MAX`.
    pub fn from_slice(lo: i64, values: &[T]) -> Self {
        assert!(!values.is_empty(), "fenwick tree needs at least one value");
        let hi = i64::try_from(values.len() - 1)
            .ok()
            .and_then(|d| lo.checked_add(d));
        let Some(hi) = hi else {
            panic!("{} values starting at {lo} run past i64::MAX", values.len());
        };
        Self {
            lo,
            hi,
            inner: Fenwick::from_slice(values),
        }
    }

    pub fn bounds(&self) -> RangeInclusive<i64> {
        self.lo..=self.hi
    }

    pub fn add(&mut self, pos: i64, delta: T) {
        let idx = self.index(pos);
        self.inner.add(idx, delta);
    }

    /// Sum of `[lo, pos]`.
    pub fn prefix(&self, pos: i64) -> T {
        self.inner.prefix(self.index(pos))
    }

    pub fn sum(&self, range: RangeInclusive<i64>) -> T {
        let (l, r) = range.into_inner();
        assert!(l <= r, "range {l}..={r} is inverted");
        self.inner.sum(self.index(l)..=self.index(r))
    }

    fn index(&self, pos: i64) -> usize {
        assert!(
            self.lo <= pos && pos <= self.hi,
            "coordinate {pos} out of bounds for {}..={}",
            self.lo,
            self.hi
        );
        pos.abs_diff(self.lo) as usize
    }
}
