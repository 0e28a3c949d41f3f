//! Tricube kernel weighting for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module maps distances inside a window to the local regression
//! weights: the tricube kernel of the scaled distance, multiplied by the
//! sample's robustness weight and prior weight.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are scaled by the inverse window radius, so
//!   the farther window edge sits at `u = 1` and gets zero kernel weight.
//! * **Support**: The kernel is bounded on `[-1, 1]` and exactly zero outside.
//!
//! ## Invariants
//!
//! * Kernel values lie in `[0, 1]`, with `K(0) = 1`.
//! * Only indices inside the window are written.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights to sum to one.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

/// Tricube kernel: `K(u) = (1 - |u|^3)^3` for `|u| < 1`, else 0.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }

    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Fill `weights[left..=right]` with combined local weights and return their sum.
///
/// Each weight is `tricube(|x_k - x_current| * inv_radius) * robustness[k] * prior[k]`.
#[inline]
pub fn compute_window_weights<T: Float>(
    x: &[T],
    window: Window,
    x_current: T,
    inv_radius: T,
    robustness_weights: &[T],
    prior_weights: &[T],
    weights: &mut [T],
) -> T {
    let mut sum = T::zero();

    for k in window.left..=window.right {
        let u = (x[k] - x_current).abs() * inv_radius;
        let w_k = tricube(u) * robustness_weights[k] * prior_weights[k];
        weights[k] = w_k;
        sum = sum + w_k;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tricube_shape() {
        assert_eq!(tricube(0.0_f64), 1.0);
        assert_eq!(tricube(1.0_f64), 0.0);
        assert_eq!(tricube(-1.5_f64), 0.0);
        assert_relative_eq!(tricube(0.5_f64), 0.669_921_875);
        assert_relative_eq!(tricube(-0.5_f64), tricube(0.5_f64));
    }

    #[test]
    fn window_weights_combine_all_factors() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let robustness = [1.0, 0.5, 1.0, 1.0];
        let prior = [1.0, 1.0, 2.0, 1.0];
        let mut weights = [9.0; 4];
        let window = Window { left: 0, right: 2 };

        let sum = compute_window_weights(&x, window, 1.0, 1.0 / 1.5, &robustness, &prior, &mut weights);

        let edge = tricube(1.0 / 1.5);
        assert_relative_eq!(weights[0], edge);
        assert_relative_eq!(weights[1], 0.5);
        assert_relative_eq!(weights[2], 2.0 * edge);
        assert_eq!(weights[3], 9.0);
        assert_relative_eq!(sum, 3.0 * edge + 0.5);
    }
}
