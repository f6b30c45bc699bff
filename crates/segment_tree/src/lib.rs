mod dynamic;
mod lazy;
mod point;
mod policy;
mod sum_add;
mod util;

use std::ops::{Add, Mul};

pub use dynamic::DynSegTree;
pub use lazy::LazySegTree;
pub use point::{SegTree, SumSegTree};
pub use policy::{
    AddSet, Max, Min, MinAdd, MinAddSet, MinSet, Monoid, RangeAlgebra, Sum, SumAdd, SumAddSet,
    SumSet,
};
pub use sum_add::SumAddSegTree;

/// Numeric element type for the add/sum trees.
///
/// `T::default()` is zero and marks "no pending add". Segment lengths are
/// converted through `TryFrom<i64>`, so narrow types such as `i32` work as
/// long as every segment length fits.
pub trait Additive:
    Copy + Default + PartialEq + Add<Output = Self> + Mul<Output = Self> + TryFrom<i64>
{
    /// `len` as an element.
    ///
    /// # Panics
    ///
    /// Panics if `len` does not fit in `Self`.
    #[inline(always)]
    fn from_len(len: i64) -> Self {
        match Self::try_from(len) {
            Ok(v) => v,
            Err(_) => panic!("segment length {len} does not fit the element type"),
        }
    }
}

impl<T> Additive for T where
    T: Copy + Default + PartialEq + Add<Output = T> + Mul<Output = T> + TryFrom<i64>
{
}
