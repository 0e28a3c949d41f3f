//! Output types and result assembly for LOESS operations.
//!
//! ## Purpose
//!
//! This module defines the `LoessResult` struct returned by every smoothing
//! call, and the assembly step that turns fitted values in working
//! coordinates into the final trend curve.
//!
//! ## Design notes
//!
//! * **Decentering**: x is reported from the retained original coordinates and
//!   the y-mean is added back to fitted values.
//! * **Duplicates**: Consecutive equal x-values collapse into one point whose
//!   y is the running mean of their fitted values.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * Output x-values are strictly increasing.
//! * `x` and `y` have equal length, at most the prepared sample count.
//! * Per-sample outputs (`residuals`, `robustness_weights`) keep the prepared
//!   sample order and are not merged.
//!
//! ## Non-goals
//!
//! * This module does not perform smoothing; it only packages results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// LOESS output: the smoothed trend plus fit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LoessResult<T> {
    /// Strictly increasing x-values (duplicates merged).
    pub x: Vec<T>,

    /// Smoothed y-values aligned with `x`.
    pub y: Vec<T>,

    /// Absolute residuals `|y - y_hat|` per prepared sample.
    pub residuals: Option<Vec<T>>,

    /// Robustness weights of the final pass per prepared sample.
    pub robustness_weights: Option<Vec<T>>,

    /// Number of robustness passes run after the initial pass.
    pub iterations_used: usize,

    /// Whether iteration stopped early because the median residual vanished.
    pub converged: bool,

    /// Smoothing bandwidth used for the fit.
    pub bandwidth_used: T,

    /// Number of neighbours in each local fit.
    pub window_size: usize,

    /// Number of input samples dropped for non-finite coordinates.
    pub dropped: usize,
}

impl<T: Float> LoessResult<T> {
    /// Iterate over the smoothed `(x, y)` points.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of smoothed points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Add `y_mean` back to `fitted` and merge runs of equal x.
///
/// `x_original` holds the sorted x-values in original coordinates.
pub fn assemble_points<T: Float>(x_original: &[T], fitted: &[T], y_mean: T) -> (Vec<T>, Vec<T>) {
    let mut xs: Vec<T> = Vec::with_capacity(x_original.len());
    let mut ys: Vec<T> = Vec::with_capacity(x_original.len());
    let mut count = T::zero();

    for (&xi, &fi) in x_original.iter().zip(fitted) {
        let value = fi + y_mean;
        match (xs.last(), ys.last_mut()) {
            (Some(&last_x), Some(mean)) if last_x == xi => {
                count = count + T::one();
                *mean = *mean + (value - *mean) / count;
            }
            _ => {
                count = T::one();
                xs.push(xi);
                ys.push(value);
            }
        }
    }

    (xs, ys)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for LoessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Bandwidth:   {}", self.bandwidth_used)?;
        writeln!(f, "  Window size: {}", self.window_size)?;
        writeln!(f, "  Iterations:  {}", self.iterations_used)?;
        if self.converged {
            writeln!(f, "  Converged:   yes")?;
        }
        if self.dropped > 0 {
            writeln!(f, "  Dropped:     {}", self.dropped)?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<21}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn duplicates_use_the_running_mean() {
        let x = [1.0, 1.0, 1.0, 2.0];
        let fitted = [1.0, 2.0, 6.0, 0.5];
        let (xs, ys) = assemble_points(&x, &fitted, 10.0);

        assert_eq!(xs, vec![1.0, 2.0]);
        assert_relative_eq!(ys[0], 13.0);
        assert_relative_eq!(ys[1], 10.5);
    }

    #[test]
    fn display_lists_points() {
        let result = LoessResult {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.0],
            residuals: None,
            robustness_weights: None,
            iterations_used: 2,
            converged: false,
            bandwidth_used: 0.3,
            window_size: 2,
            dropped: 1,
        };
        let text = result.to_string();

        assert!(text.contains("Data points: 2"));
        assert!(text.contains("Dropped:     1"));
        assert!(text.contains("    2.00     4.000000"));
        assert_eq!(result.points().collect::<Vec<_>>(), vec![(1.0, 3.0), (2.0, 4.0)]);
    }
}
