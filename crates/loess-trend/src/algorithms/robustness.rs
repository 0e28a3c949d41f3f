//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! This module implements the re-weighting step between smoothing passes.
//! After each pass the absolute residuals are summarized by their median, and
//! every sample receives a bisquare weight that shrinks with its residual.
//!
//! ## Design notes
//!
//! * **Scale**: Uses the median absolute residual (type-7 median).
//! * **Floor**: Severe outliers get a tiny positive weight instead of zero, so
//!   they can re-enter a later pass if their residual shrinks.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Convergence**: A median residual below the accuracy threshold means
//!   the fit already interpolates most samples; iteration stops.
//! * **Bisquare**: `(1 - (r / (6 * median))^2)^2` below the cutoff.
//!
//! ## Invariants
//!
//! * Robustness weights are in `[floor, 1]`.
//! * Weights are left untouched when the update reports convergence.
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not decide the number of robustness iterations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::median_inplace;

// ============================================================================
// Update Outcome
// ============================================================================

/// Outcome of a robustness update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RobustnessUpdate<T> {
    /// Median residual fell below the accuracy threshold; weights unchanged.
    Converged {
        /// Median absolute residual of the pass.
        median: T,
    },

    /// Weights were recomputed for the next pass.
    Updated {
        /// Median absolute residual of the pass.
        median: T,
    },
}

// ============================================================================
// Bisquare Updater
// ============================================================================

/// Bisquare robustness updater.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisquareUpdater<T> {
    /// Convergence threshold on the median residual.
    pub accuracy: T,

    /// Weight assigned to residuals at or beyond the cutoff.
    pub outlier_floor: T,
}

impl<T: Float> BisquareUpdater<T> {
    /// Tuning constant applied to the median residual (Cleveland, 1979).
    const TUNING_CONSTANT: f64 = 6.0;

    /// Create an updater.
    pub fn new(accuracy: T, outlier_floor: T) -> Self {
        Self {
            accuracy,
            outlier_floor,
        }
    }

    /// Recompute `weights` from `residuals`, using `scratch` for the median.
    pub fn update(&self, residuals: &[T], weights: &mut [T], scratch: &mut [T]) -> RobustnessUpdate<T> {
        scratch.copy_from_slice(residuals);
        let median = median_inplace(scratch);

        if median.abs() < self.accuracy {
            return RobustnessUpdate::Converged { median };
        }

        let c = T::from(Self::TUNING_CONSTANT).unwrap_or_else(T::one);
        let cmad = c * median;
        for (w, &r) in weights.iter_mut().zip(residuals) {
            *w = self.bisquare_weight(r / cmad);
        }

        RobustnessUpdate::Updated { median }
    }

    /// Bisquare weight of a scaled residual, floored for severe outliers.
    ///
    /// # Formula
    ///
    /// w(u) = (1 - u^2)^2   if u < 1
    ///
    /// w(u) = floor         if u >= 1
    #[inline]
    fn bisquare_weight(&self, u: T) -> T {
        if u >= T::one() {
            return self.outlier_floor;
        }

        let tmp = T::one() - u * u;
        tmp * tmp
    }
}
