use std::ops::RangeInclusive;

use crate::policy::{Monoid, Sum};
use crate::util::{check_index, check_range};

/// Bottom-up segment tree with point assignment and range fold.
///
/// Leaves live at `size + i` where `size` is `n` rounded up to a power of two;
/// padding leaves hold `M::identity()`.
#[derive(Clone, Debug)]
pub struct SegTree<M: Monoid> {
    n: usize,
    size: usize,
    tree: Vec<M::Value>,
}

pub type SumSegTree = SegTree<Sum>;

impl<M: Monoid> SegTree<M> {
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "segment tree size must be positive");
        let cap = size.next_power_of_two();
        Self {
            n: size,
            size: cap,
            tree: vec![M::identity(); 2 * cap],
        }
    }

    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn from_slice(values: &[M::Value]) -> Self {
        assert!(!values.is_empty(), "segment tree needs at least one value");
        let mut st = Self::new(values.len());
        st.tree[st.size..st.size + st.n].clone_from_slice(values);
        for i in (1..st.size).rev() {
            st.pull(i);
        }
        st
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects zero elements.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, idx: usize) -> &M::Value {
        check_index(idx, self.n);
        &self.tree[self.size + idx]
    }

    /// Replaces the element at `idx` and refreshes its ancestors.
    pub fn set(&mut self, idx: usize, value: M::Value) {
        check_index(idx, self.n);
        let mut i = self.size + idx;
        self.tree[i] = value;
        while i > 1 {
            i >>= 1;
            self.pull(i);
        }
    }

    /// Folds `range` left to right.
    pub fn query(&self, range: RangeInclusive<usize>) -> M::Value {
        let (l, r) = check_range(range, self.n);

        let mut l = l + self.size;
        let mut r = r + 1 + self.size;
        let mut left = M::identity();
        let mut right = M::identity();

        while l < r {
            if (l & 1) == 1 {
                left = M::combine(&left, &self.tree[l]);
                l += 1;
            }
            if (r & 1) == 1 {
                r -= 1;
                right = M::combine(&self.tree[r], &right);
            }
            l >>= 1;
            r >>= 1;
        }

        M::combine(&left, &right)
    }

    #[inline(always)]
    fn pull(&mut self, i: usize) {
        self.tree[i] = M::combine(&self.tree[2 * i], &self.tree[2 * i + 1]);
    }
}
