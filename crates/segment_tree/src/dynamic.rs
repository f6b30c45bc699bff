use std::ops::RangeInclusive;

use crate::Additive;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Id(u32);

impl Id {
    const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug)]
struct Node<T> {
    /// Sum over the segment, including `lazy`.
    val: T,
    /// Pending add for every element of the segment, not yet seen by children.
    lazy: T,
    ch: [Id; 2],
}

impl<T: Additive> Node<T> {
    fn new() -> Self {
        Self {
            val: T::default(),
            lazy: T::default(),
            ch: [Id::NIL, Id::NIL],
        }
    }
}

#[inline(always)]
fn width(tl: i64, tr: i64) -> i64 {
    tr - tl + 1
}

#[inline(always)]
fn mid(tl: i64, tr: i64) -> i64 {
    tl + (tr - tl) / 2
}

/// Range-add / range-sum segment tree over an inclusive `i64` coordinate range,
/// allocating nodes only along updated paths.
///
/// Nodes live in an arena and refer to their children by `u32` handles. Updates
/// push pending adds down (allocating children as needed); queries never
/// allocate and instead carry the sum of pending ancestor adds.
#[derive(Clone, Debug)]
pub struct DynSegTree<T: Additive = i64> {
    lo: i64,
    hi: i64,
    nodes: Vec<Node<T>>,
}

const ROOT: Id = Id(0);

impl<T: Additive> DynSegTree<T> {
    /// # Panics
    ///
    /// Panics if `lo > hi`, or if the range holds more than `i64::MAX`
    /// coordinates.
    pub fn new(lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "coordinate range {lo}..={hi} is inverted");
        assert!(
            hi.checked_sub(lo).is_some_and(|d| d < i64::MAX),
            "coordinate range {lo}..={hi} is too wide"
        );
        Self {
            lo,
            hi,
            nodes: vec![Node::new()],
        }
    }

    pub fn bounds(&self) -> RangeInclusive<i64> {
        self.lo..=self.hi
    }

    /// Number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds `delta` to every coordinate in `range`.
    pub fn update(&mut self, range: RangeInclusive<i64>, delta: T) {
        let (l, r) = self.check(range);
        self.update_rec(ROOT, self.lo, self.hi, l, r, delta);
    }

    /// Sum over `range`. Coordinates never touched by an update count as zero.
    pub fn query(&self, range: RangeInclusive<i64>) -> T {
        let (l, r) = self.check(range);
        self.query_rec(ROOT, self.lo, self.hi, l, r, T::default())
    }

    fn check(&self, range: RangeInclusive<i64>) -> (i64, i64) {
        let (l, r) = range.into_inner();
        assert!(l <= r, "range {l}..={r} is inverted");
        assert!(
            self.lo <= l && r <= self.hi,
            "range {l}..={r} out of bounds for {}..={}",
            self.lo,
            self.hi
        );
        (l, r)
    }

    fn alloc(&mut self) -> Id {
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(Node::new());
        id
    }

    fn child(&mut self, v: Id, side: usize) -> Id {
        let c = self.nodes[v.idx()].ch[side];
        if !c.is_nil() {
            return c;
        }
        let c = self.alloc();
        self.nodes[v.idx()].ch[side] = c;
        c
    }

    #[inline(always)]
    fn add_at(&mut self, v: Id, delta: T, len: i64) {
        let node = &mut self.nodes[v.idx()];
        node.val = node.val + delta * T::from_len(len);
        node.lazy = node.lazy + delta;
    }

    fn push_down(&mut self, v: Id, tl: i64, tr: i64) {
        let delta = self.nodes[v.idx()].lazy;
        if delta == T::default() {
            return;
        }
        let m = mid(tl, tr);
        let left = self.child(v, 0);
        let right = self.child(v, 1);
        self.add_at(left, delta, width(tl, m));
        self.add_at(right, delta, width(m + 1, tr));
        self.nodes[v.idx()].lazy = T::default();
    }

    fn update_rec(&mut self, v: Id, tl: i64, tr: i64, l: i64, r: i64, delta: T) {
        if r < tl || tr < l {
            return;
        }
        if l <= tl && tr <= r {
            self.add_at(v, delta, width(tl, tr));
            return;
        }
        self.push_down(v, tl, tr);
        let m = mid(tl, tr);
        let left = self.child(v, 0);
        let right = self.child(v, 1);
        self.update_rec(left, tl, m, l, r, delta);
        self.update_rec(right, m + 1, tr, l, r, delta);
        self.nodes[v.idx()].val = self.nodes[left.idx()].val + self.nodes[right.idx()].val;
    }

    /// `pending` is the sum of lazies on strict ancestors of `v`, which apply
    /// uniformly to every coordinate under `v`.
    fn query_rec(&self, v: Id, tl: i64, tr: i64, l: i64, r: i64, pending: T) -> T {
        if r < tl || tr < l {
            return T::default();
        }
        if v.is_nil() {
            let overlap = width(l.max(tl), r.min(tr));
            return pending * T::from_len(overlap);
        }
        let node = &self.nodes[v.idx()];
        if l <= tl && tr <= r {
            return node.val + pending * T::from_len(width(tl, tr));
        }
        let pending = pending + node.lazy;
        let m = mid(tl, tr);
        self.query_rec(node.ch[0], tl, m, l, r, pending)
            + self.query_rec(node.ch[1], m + 1, tr, l, r, pending)
    }
}
