//! Windowing primitives for LOESS smoothing.
//!
//! This module tracks the `[left, right]` interval of the `bw` nearest
//! neighbours of the point being fitted as a pass sweeps left to right over
//! sorted data. The interval only ever moves forward, so a whole pass costs
//! amortized O(n) regardless of the window size.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;

// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Window for the first point of a pass: `[0, window_size - 1]`.
    #[inline]
    pub fn initialize(window_size: usize) -> Self {
        debug_assert!(
            window_size >= 2,
            "initialize: window_size must be at least 2"
        );

        Self {
            left: 0,
            right: window_size - 1,
        }
    }

    // Slide forward while the next candidate on the right is at least as close
    // to `x[current]` as the current leftmost point. Ties advance, which keeps
    // the window moving across repeated x-values. Zero prior weights are
    // skipped when picking the next neighbour on either side.
    #[inline]
    pub fn advance<T: Float>(&mut self, x: &[T], prior_weights: &[T], current: usize) {
        let n = x.len();
        debug_assert!(current < n, "advance: current index out of bounds");

        let x_current = x[current];

        // Several slides per point are possible, so on irregular gaps the
        // windows differ from a tracker that moves at most once per point.
        while self.left < current {
            let next_right = next_nonzero(prior_weights, self.right);
            if next_right >= n {
                break;
            }

            let d_right = x[next_right] - x_current;
            let d_left = x_current - x[self.left];
            if d_right > d_left {
                break;
            }

            self.left = next_nonzero(prior_weights, self.left);
            self.right = next_right;
        }
    }

    // Inverse of the distance from `x_current` to the farther window edge.
    //
    // A zero distance (every point in the window shares `x_current`) maps to 1
    // so kernel arguments stay finite.
    #[inline]
    pub fn inverse_radius<T: Float>(&self, x: &[T], x_current: T) -> T {
        let d_left = x_current - x[self.left];
        let d_right = x[self.right] - x_current;
        let edge = if d_left > d_right {
            self.left
        } else {
            self.right
        };

        let radius = (x[edge] - x_current).abs();
        if radius == T::zero() {
            T::one()
        } else {
            T::one() / radius
        }
    }

    // Calculate window size `max(2, floor(bandwidth * n))`, capped at n.
    #[inline]
    pub fn calculate_span<T: Float>(n: usize, bandwidth: T) -> usize {
        let span = (bandwidth * T::from(n).unwrap_or_else(T::zero))
            .floor()
            .to_usize()
            .unwrap_or(0);
        usize::max(2, usize::min(n, span))
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    // Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// First index after `idx` whose prior weight is non-zero (or `len` if none).
#[inline]
fn next_nonzero<T: Float>(weights: &[T], idx: usize) -> usize {
    let mut j = idx + 1;
    while j < weights.len() && weights[j] == T::zero() {
        j += 1;
    }
    j
}

/// Run the tracker over a whole pass and record the window for every point.
///
/// The sequence depends only on `x`, the prior weights and `window_size`, so
/// it can be computed once, sequentially, before fanning per-point fits out
/// to worker threads.
#[cfg_attr(not(feature = "dev"), allow(dead_code))]
pub fn compute_windows<T: Float>(
    x: &[T],
    prior_weights: &[T],
    window_size: usize,
) -> Result<Vec<Window>, LoessError> {
    let n = x.len();
    if window_size < 2 || window_size > n {
        return Err(LoessError::InvalidParameter(format!(
            "window size {window_size} must be between 2 and {n}"
        )));
    }

    let mut windows = Vec::with_capacity(n);
    let mut window = Window::initialize(window_size);
    for i in 0..n {
        if i > 0 {
            window.advance(x, prior_weights, i);
        }
        windows.push(window);
    }

    Ok(windows)
}
