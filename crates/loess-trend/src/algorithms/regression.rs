//! Regression Logic
//!
//! ## Purpose
//!
//! This module fits one local weighted straight line per sample:
//! - Context for a single point fit (window, weights, fallback policy).
//! - Generic and SIMD-optimized accumulation of the weighted sums.
//! - A closed-form solver with a singularity guard on the x-variance.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use tracing::trace;
use wide::{f32x4, f64x2};

// Internal dependencies
use crate::math::kernel::compute_window_weights;
use crate::primitives::window::Window;

// ============================================================================
// Zero-Weight Fallback Policy
// ============================================================================

/// Policy for a window whose combined weights sum to zero.
///
/// This only happens when zero prior weights cover every point that the
/// kernel does not already zero out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWeightFallback {
    /// Unweighted mean of the window's y-values (default).
    #[default]
    UseLocalMean,

    /// The sample's own y-value.
    ReturnOriginal,

    /// Fail the call with a numerical instability error.
    Fail,
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Weighted sums `(W, X, Y, XY, X2)` of a window.
pub type WlsSums<T> = (T, T, T, T, T);

/// Scalar accumulation for 1D weighted least squares (generic Float).
#[inline]
pub fn accumulate_wls_scalar<T: Float>(x: &[T], y: &[T], weights: &[T]) -> WlsSums<T> {
    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxy = T::zero();
    let mut sum_wxx = T::zero();

    for ((&w, &x_val), &y_val) in weights.iter().zip(x).zip(y) {
        let wx = w * x_val;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y_val;
        sum_wxy = sum_wxy + wx * y_val;
        sum_wxx = sum_wxx + wx * x_val;
    }

    (sum_w, sum_wx, sum_wy, sum_wxy, sum_wxx)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation for 1D weighted least squares (f64).
#[inline]
pub fn accumulate_wls_simd_f64(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
    let mut s_w = f64x2::splat(0.0);
    let mut s_wx = f64x2::splat(0.0);
    let mut s_wy = f64x2::splat(0.0);
    let mut s_wxy = f64x2::splat(0.0);
    let mut s_wxx = f64x2::splat(0.0);

    let w_chunks = weights.chunks_exact(2);
    let x_chunks = x.chunks_exact(2);
    let y_chunks = y.chunks_exact(2);
    let tail = w_chunks.remainder().len();

    for ((w, xv), yv) in w_chunks.zip(x_chunks).zip(y_chunks) {
        let w = f64x2::new([w[0], w[1]]);
        let x_val = f64x2::new([xv[0], xv[1]]);
        let y_val = f64x2::new([yv[0], yv[1]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxy += wx * y_val;
        s_wxx += wx * x_val;
    }

    let (t_w, t_wx, t_wy, t_wxy, t_wxx) = accumulate_wls_scalar(
        &x[x.len() - tail..],
        &y[y.len() - tail..],
        &weights[weights.len() - tail..],
    );

    (
        s_w.reduce_add() + t_w,
        s_wx.reduce_add() + t_wx,
        s_wy.reduce_add() + t_wy,
        s_wxy.reduce_add() + t_wxy,
        s_wxx.reduce_add() + t_wxx,
    )
}

/// SIMD-optimized accumulation for 1D weighted least squares (f32).
#[inline]
pub fn accumulate_wls_simd_f32(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
    let mut s_w = f32x4::splat(0.0);
    let mut s_wx = f32x4::splat(0.0);
    let mut s_wy = f32x4::splat(0.0);
    let mut s_wxy = f32x4::splat(0.0);
    let mut s_wxx = f32x4::splat(0.0);

    let w_chunks = weights.chunks_exact(4);
    let x_chunks = x.chunks_exact(4);
    let y_chunks = y.chunks_exact(4);
    let tail = w_chunks.remainder().len();

    for ((w, xv), yv) in w_chunks.zip(x_chunks).zip(y_chunks) {
        let w = f32x4::new([w[0], w[1], w[2], w[3]]);
        let x_val = f32x4::new([xv[0], xv[1], xv[2], xv[3]]);
        let y_val = f32x4::new([yv[0], yv[1], yv[2], yv[3]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxy += wx * y_val;
        s_wxx += wx * x_val;
    }

    let (t_w, t_wx, t_wy, t_wxy, t_wxx) = accumulate_wls_scalar(
        &x[x.len() - tail..],
        &y[y.len() - tail..],
        &weights[weights.len() - tail..],
    );

    (
        s_w.reduce_add() + t_w,
        s_wx.reduce_add() + t_wx,
        s_wy.reduce_add() + t_wy,
        s_wxy.reduce_add() + t_wxy,
        s_wxx.reduce_add() + t_wxx,
    )
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific weighted least squares accumulation.
pub trait WLSSolver: Float + Debug {
    /// Accumulate weighted sums over equal-length slices.
    #[inline]
    fn accumulate_wls(x: &[Self], y: &[Self], weights: &[Self]) -> WlsSums<Self> {
        accumulate_wls_scalar(x, y, weights)
    }
}

impl WLSSolver for f64 {
    #[inline]
    fn accumulate_wls(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
        accumulate_wls_simd_f64(x, y, weights)
    }
}

impl WLSSolver for f32 {
    #[inline]
    fn accumulate_wls(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
        accumulate_wls_simd_f32(x, y, weights)
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Local straight-line fit (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Solve the weighted normal equations from accumulated sums.
    ///
    /// Returns `None` when the total weight is not positive. When the weighted
    /// x-variance is below `tol` in magnitude the slope is forced to zero and
    /// the fit degenerates to the weighted mean of y. Zero variance always
    /// degenerates, even when `tol` has underflowed to zero.
    pub fn from_sums(sums: WlsSums<T>, tol: T) -> Option<Self> {
        let (sum_w, sum_wx, sum_wy, sum_wxy, sum_wxx) = sums;
        if sum_w <= T::zero() {
            return None;
        }

        let mean_x = sum_wx / sum_w;
        let mean_y = sum_wy / sum_w;
        let mean_xy = sum_wxy / sum_w;
        let mean_x2 = sum_wxx / sum_w;

        let variance = mean_x2 - mean_x * mean_x;
        let slope = if variance.abs() <= tol {
            trace!("degenerate local fit: x-variance below tolerance, slope forced to zero");
            T::zero()
        } else {
            (mean_xy - mean_x * mean_y) / variance
        };

        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit a single point.
pub struct RegressionContext<'a, T: Float> {
    /// Sorted x-values of the working set
    pub x: &'a [T],

    /// y-values aligned with `x`
    pub y: &'a [T],

    /// Index of the point to fit
    pub idx: usize,

    /// Window for the local fit
    pub window: Window,

    /// Robustness weights from the previous pass (all 1.0 on the first pass)
    pub robustness_weights: &'a [T],

    /// Caller-supplied prior weights
    pub prior_weights: &'a [T],

    /// Scratch slice receiving the combined weights
    pub weights: &'a mut [T],

    /// Singularity tolerance for the x-variance
    pub tolerance: T,

    /// Zero-weight fallback policy
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: WLSSolver> RegressionContext<'_, T> {
    /// Fit the local line and evaluate it at `x[idx]`.
    ///
    /// Returns `None` only when the window carries no weight and the
    /// fallback policy is `Fail`.
    pub fn fit(&mut self) -> Option<T> {
        let x_current = self.x[self.idx];
        let inv_radius = self.window.inverse_radius(self.x, x_current);

        compute_window_weights(
            self.x,
            self.window,
            x_current,
            inv_radius,
            self.robustness_weights,
            self.prior_weights,
            self.weights,
        );

        let range = self.window.left..=self.window.right;
        let sums = T::accumulate_wls(
            &self.x[range.clone()],
            &self.y[range.clone()],
            &self.weights[range],
        );

        match LinearFit::from_sums(sums, self.tolerance) {
            Some(model) => Some(model.predict(x_current)),
            None => self.fallback(),
        }
    }

    fn fallback(&self) -> Option<T> {
        trace!(idx = self.idx, "zero total weight in local window");
        match self.zero_weight_fallback {
            ZeroWeightFallback::UseLocalMean => {
                let window_y = &self.y[self.window.left..=self.window.right];
                let sum = window_y.iter().fold(T::zero(), |acc, &v| acc + v);
                Some(sum / T::from(window_y.len()).unwrap_or_else(T::one))
            }
            ZeroWeightFallback::ReturnOriginal => Some(self.y[self.idx]),
            ZeroWeightFallback::Fail => None,
        }
    }
}
