//! Sample preparation for LOESS input data.
//!
//! ## Purpose
//!
//! This module turns validated `(x, y, weight)` columns into the ordered
//! working set the smoothing passes run on, in one of two layouts:
//!
//! * **Lenient**: non-finite samples are dropped, the rest are sorted by x and
//!   both coordinates are mean-centered for better conditioning of the fits.
//! * **Strict**: the input is already strictly increasing and is used as is.
//!
//! ## Design notes
//!
//! * **Stability**: Sorting is stable, so duplicate x-values keep input order.
//! * **Fast path**: Already-sorted input skips the permutation entirely.
//! * **Exact decentering**: Original x-values are retained for output.
//!
//! ## Invariants
//!
//! * All per-sample vectors always have equal lengths.
//! * `x` is non-decreasing.
//! * Dropped samples never re-enter the working set.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths, ordering or weights (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Prepared samples ready for smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet<T> {
    /// Working x-coordinates (mean-centered under the lenient layout).
    pub x: Vec<T>,

    /// Working y-coordinates (mean-centered under the lenient layout).
    pub y: Vec<T>,

    /// Prior weights aligned with `x`.
    pub weights: Vec<T>,

    /// Sorted x-values in original coordinates.
    pub x_original: Vec<T>,

    /// y-values aligned with `x_original`, in original coordinates.
    pub y_original: Vec<T>,

    /// Mean subtracted from x (zero when not centered).
    pub x_mean: T,

    /// Mean subtracted from y (zero when not centered).
    pub y_mean: T,

    /// Whether the working coordinates are mean-centered.
    pub centered: bool,

    /// Number of input samples dropped for non-finite coordinates.
    pub dropped: usize,
}

impl<T: Float> SampleSet<T> {
    /// Drop non-finite samples, sort by x and mean-center both coordinates.
    pub fn lenient(x: &[T], y: &[T], weights: Option<&[T]>) -> Self {
        let mut kept: Vec<usize> = (0..x.len())
            .filter(|&i| x[i].is_finite() && y[i].is_finite())
            .collect();
        let dropped = x.len() - kept.len();

        // Fast path: skip the sort when the kept samples are already ordered
        let is_sorted = kept.windows(2).all(|w| x[w[0]] <= x[w[1]]);
        if !is_sorted {
            kept.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(Ordering::Equal));
        }

        let x_sorted: Vec<T> = kept.iter().map(|&i| x[i]).collect();
        let y_sorted: Vec<T> = kept.iter().map(|&i| y[i]).collect();
        let w_sorted: Vec<T> = match weights {
            Some(w) => kept.iter().map(|&i| w[i]).collect(),
            None => vec![T::one(); kept.len()],
        };

        let x_mean = mean(&x_sorted);
        let y_mean = mean(&y_sorted);

        Self {
            x: x_sorted.iter().map(|&v| v - x_mean).collect(),
            y: y_sorted.iter().map(|&v| v - y_mean).collect(),
            weights: w_sorted,
            x_original: x_sorted,
            y_original: y_sorted,
            x_mean,
            y_mean,
            centered: true,
            dropped,
        }
    }

    /// Use strictly increasing, finite input as is.
    pub fn strict(x: &[T], y: &[T], weights: Option<&[T]>) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            weights: weights.map_or_else(|| vec![T::one(); x.len()], <[T]>::to_vec),
            x_original: x.to_vec(),
            y_original: y.to_vec(),
            x_mean: T::zero(),
            y_mean: T::zero(),
            centered: false,
            dropped: 0,
        }
    }

    /// Number of prepared samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether no samples survived preparation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// Arithmetic mean via the incremental update, so large finite values do not
// overflow an intermediate sum. Zero for an empty slice.
#[inline]
fn mean<T: Float>(vals: &[T]) -> T {
    let mut m = T::zero();
    let mut k = T::zero();
    for &v in vals {
        k = k + T::one();
        m = m + (v - m) / k;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lenient_drops_non_finite_and_centers() {
        let x = [3.0, 1.0, f64::NAN, 2.0];
        let y = [1.0, 2.0, 5.0, f64::INFINITY];
        let set = SampleSet::lenient(&x, &y, None);

        assert_eq!(set.dropped, 2);
        assert_eq!(set.x_original, vec![1.0, 3.0]);
        assert_relative_eq!(set.x_mean, 2.0);
        assert_relative_eq!(set.y_mean, 1.5);
        assert_eq!(set.x, vec![-1.0, 1.0]);
        assert_eq!(set.y, vec![0.5, -0.5]);
        assert!(set.centered);
    }

    #[test]
    fn lenient_sort_is_stable_for_duplicates() {
        let x = [2.0, 1.0, 1.0];
        let y = [3.0, 2.0, 4.0];
        let w = [0.5, 1.0, 2.0];
        let set = SampleSet::lenient(&x, &y, Some(&w[..]));

        assert_eq!(set.x_original, vec![1.0, 1.0, 2.0]);
        assert_eq!(set.weights, vec![1.0, 2.0, 0.5]);
        assert_relative_eq!(set.y[0] + set.y_mean, 2.0);
        assert_relative_eq!(set.y[1] + set.y_mean, 4.0);
    }

    #[test]
    fn centering_survives_values_near_the_float_limit() {
        let x = [0.0, 1.0, 2.0];
        let y = [1.2e308, 1.4e308, 1.6e308];
        let set = SampleSet::lenient(&x, &y, None);

        assert!(set.y_mean.is_finite());
        assert_relative_eq!(set.y_mean, 1.4e308, max_relative = 1e-12);
        assert_relative_eq!(set.y[2], 2e307, max_relative = 1e-9);
    }

    #[test]
    fn strict_keeps_input_untouched() {
        let x = [0.0, 1.0, 2.0];
        let y = [5.0, 6.0, 7.0];
        let set = SampleSet::strict(&x, &y, None);

        assert_eq!(set.x, x.to_vec());
        assert_eq!(set.y, y.to_vec());
        assert_eq!(set.weights, vec![1.0; 3]);
        assert_eq!(set.x_mean, 0.0);
        assert!(!set.centered);
    }
}
