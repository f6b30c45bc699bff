use std::ops::RangeInclusive;

use crate::Additive;
use crate::util::check_range;

/// Range-add / range-sum lazy segment tree without the policy indirection.
///
/// Equivalent to [`LazySegTree<SumAdd>`](crate::LazySegTree) but generic over
/// the numeric type. `T` must hold `delta * len` without overflowing.
#[derive(Clone, Debug)]
pub struct SumAddSegTree<T: Additive> {
    n: usize,
    tree: Vec<T>,
    lazy: Vec<T>,
}

impl<T: Additive> SumAddSegTree<T> {
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "segment tree size must be positive");
        Self {
            n: size,
            tree: vec![T::default(); 4 * size],
            lazy: vec![T::default(); 4 * size],
        }
    }

    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn from_slice(values: &[T]) -> Self {
        assert!(!values.is_empty(), "segment tree needs at least one value");
        let mut st = Self::new(values.len());
        st.build(1, 0, st.n - 1, values);
        st
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects zero elements.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Adds `delta` to every element in `range`.
    pub fn update(&mut self, range: RangeInclusive<usize>, delta: T) {
        let (l, r) = check_range(range, self.n);
        self.update_rec(1, 0, self.n - 1, l, r, delta);
    }

    /// Sum of `range`; redistributes pending adds along the way.
    pub fn query(&mut self, range: RangeInclusive<usize>) -> T {
        let (l, r) = check_range(range, self.n);
        self.query_rec(1, 0, self.n - 1, l, r)
    }

    fn build(&mut self, v: usize, tl: usize, tr: usize, values: &[T]) {
        if tl == tr {
            self.tree[v] = values[tl];
            return;
        }
        let mid = tl + (tr - tl) / 2;
        self.build(2 * v, tl, mid, values);
        self.build(2 * v + 1, mid + 1, tr, values);
        self.tree[v] = self.tree[2 * v] + self.tree[2 * v + 1];
    }

    #[inline(always)]
    fn add_at(&mut self, v: usize, delta: T, len: usize) {
        self.tree[v] = self.tree[v] + delta * T::from_len(len as i64);
        self.lazy[v] = self.lazy[v] + delta;
    }

    fn push_down(&mut self, v: usize, tl: usize, tr: usize) {
        let delta = self.lazy[v];
        if delta == T::default() {
            return;
        }
        let mid = tl + (tr - tl) / 2;
        self.add_at(2 * v, delta, mid - tl + 1);
        self.add_at(2 * v + 1, delta, tr - mid);
        self.lazy[v] = T::default();
    }

    fn update_rec(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize, delta: T) {
        if r < tl || tr < l {
            return;
        }
        if l <= tl && tr <= r {
            self.add_at(v, delta, tr - tl + 1);
            return;
        }
        self.push_down(v, tl, tr);
        let mid = tl + (tr - tl) / 2;
        self.update_rec(2 * v, tl, mid, l, r, delta);
        self.update_rec(2 * v + 1, mid + 1, tr, l, r, delta);
        self.tree[v] = self.tree[2 * v] + self.tree[2 * v + 1];
    }

    fn query_rec(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize) -> T {
        if r < tl || tr < l {
            return T::default();
        }
        if l <= tl && tr <= r {
            return self.tree[v];
        }
        self.push_down(v, tl, tr);
        let mid = tl + (tr - tl) / 2;
        self.query_rec(2 * v, tl, mid, l, r) + self.query_rec(2 * v + 1, mid + 1, tr, l, r)
    }
}
