use std::ops::RangeInclusive;

use crate::policy::RangeAlgebra;
use crate::util::check_range;

/// Array-backed lazy segment tree over an arbitrary [`RangeAlgebra`].
///
/// Nodes are 1-indexed (`v` has children `2v` and `2v + 1`) and cover
/// inclusive ranges `[tl, tr]`. A pending action on `v` is already reflected in
/// `tree[v]` but not yet in its children.
#[derive(Clone, Debug)]
pub struct LazySegTree<P: RangeAlgebra> {
    n: usize,
    tree: Vec<P::Value>,
    lazy: Vec<P::Action>,
}

impl<P: RangeAlgebra> LazySegTree<P> {
    /// `size` elements, all equal to `P::tree_init()`.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "segment tree size must be positive");
        Self {
            n: size,
            tree: vec![P::tree_init(); 4 * size],
            lazy: vec![P::lazy_init(); 4 * size],
        }
    }

    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn from_slice(values: &[P::Value]) -> Self {
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

    /// Applies `act` to every element in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past the end.
    pub fn update(&mut self, range: RangeInclusive<usize>, act: P::Action) {
        let (l, r) = check_range(range, self.n);
        self.update_rec(1, 0, self.n - 1, l, r, &act);
    }

    /// `combine` over every element in `range`.
    ///
    /// Pending actions on the descent path are pushed down, hence `&mut self`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past the end.
    pub fn query(&mut self, range: RangeInclusive<usize>) -> P::Value {
        let (l, r) = check_range(range, self.n);
        self.query_rec(1, 0, self.n - 1, l, r)
    }

    fn build(&mut self, v: usize, tl: usize, tr: usize, values: &[P::Value]) {
        if tl == tr {
            self.tree[v] = values[tl].clone();
            return;
        }
        let mid = tl + (tr - tl) / 2;
        self.build(2 * v, tl, mid, values);
        self.build(2 * v + 1, mid + 1, tr, values);
        self.pull(v);
    }

    #[inline(always)]
    fn pull(&mut self, v: usize) {
        self.tree[v] = P::combine(&self.tree[2 * v], &self.tree[2 * v + 1]);
    }

    #[inline(always)]
    fn apply_at(&mut self, v: usize, act: &P::Action, len: usize) {
        self.tree[v] = P::apply(&self.tree[v], act, len);
        self.lazy[v] = P::merge(&self.lazy[v], act);
    }

    fn push_down(&mut self, v: usize, tl: usize, tr: usize) {
        if P::is_lazy_init(&self.lazy[v]) {
            return;
        }
        let act = std::mem::replace(&mut self.lazy[v], P::lazy_init());
        let mid = tl + (tr - tl) / 2;
        self.apply_at(2 * v, &act, mid - tl + 1);
        self.apply_at(2 * v + 1, &act, tr - mid);
    }

    fn update_rec(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize, act: &P::Action) {
        if r < tl || tr < l {
            return;
        }
        if l <= tl && tr <= r {
            self.apply_at(v, act, tr - tl + 1);
            return;
        }
        self.push_down(v, tl, tr);
        let mid = tl + (tr - tl) / 2;
        self.update_rec(2 * v, tl, mid, l, r, act);
        self.update_rec(2 * v + 1, mid + 1, tr, l, r, act);
        self.pull(v);
    }

    fn query_rec(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize) -> P::Value {
        if r < tl || tr < l {
            return P::query_oob();
        }
        if l <= tl && tr <= r {
            return self.tree[v].clone();
        }
        self.push_down(v, tl, tr);
        let mid = tl + (tr - tl) / 2;
        let left = self.query_rec(2 * v, tl, mid, l, r);
        let right = self.query_rec(2 * v + 1, mid + 1, tr, l, r);
        P::combine(&left, &right)
    }
}
