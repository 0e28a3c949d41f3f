//! Median selection for residual scale estimation.
//!
//! The median of absolute residuals sets the scale of the bisquare
//! re-weighting. Selection runs in O(n) on a scratch slice.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Median of `vals`, reordering the slice in place.
///
/// Uses the type-7 definition: the middle order statistic for odd `n`, the
/// mean of the two middle order statistics for even `n`. Returns zero for an
/// empty slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return upper;
    }

    // Largest value of the lower half
    let lower = vals[..mid]
        .iter()
        .copied()
        .fold(vals[0], |acc, v| if v > acc { v } else { acc });

    (lower + upper) / (T::one() + T::one())
}
