use std::ops::RangeInclusive;

/// Unpacks an inclusive index range, panicking unless `l <= r < len`.
#[inline(always)]
pub(crate) fn check_range(range: RangeInclusive<usize>, len: usize) -> (usize, usize) {
    let (l, r) = range.into_inner();
    assert!(l <= r, "range {l}..={r} is inverted");
    assert!(r < len, "range {l}..={r} out of bounds for length {len}");
    (l, r)
}

#[inline(always)]
pub(crate) fn check_index(idx: usize, len: usize) {
    assert!(idx < len, "index {idx} out of bounds for length {len}");
}
