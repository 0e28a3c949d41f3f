//! Execution engine for LOESS smoothing operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates LOESS
//! smoothing. It runs the initial smoothing pass, computes residuals, checks
//! convergence and drives the robustness passes. The executor coordinates all
//! lower-level algorithms to produce fitted values for a prepared sample set.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and builder-based construction.
//! * Allocates working buffers once per call and reuses them across passes.
//! * Accepts an injected smoothing pass so extension crates can parallelize
//!   the per-point fits without touching the iteration logic.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input x-values are sorted (non-decreasing).
//! * All working buffers have the same length as the sample set.
//! * Robustness weights are always in `(0, 1]`.
//! * Window size is at least 2 and at most n.
//! * Robustness passes run strictly one after another.
//!
//! ## Non-goals
//!
//! * This module does not validate or prepare input data (handled by `validator` and `samples`).
//! * This module does not undo centering or merge duplicates (handled by `output`).
//! * This module does not handle parallel execution directly (handled by extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, WLSSolver, ZeroWeightFallback};
use crate::algorithms::robustness::{BisquareUpdater, RobustnessUpdate};
use crate::engine::validator::Validator;
use crate::primitives::buffer::LoessBuffer;
use crate::primitives::errors::LoessError;
use crate::primitives::samples::SampleSet;
use crate::primitives::window::Window;

// ============================================================================
// Type Definitions
// ============================================================================

/// Read-only inputs of one smoothing pass.
#[derive(Debug, Clone, Copy)]
pub struct SmoothPassInput<'a, T> {
    /// Working x-values (sorted).
    pub x: &'a [T],

    /// Working y-values aligned with `x`.
    pub y: &'a [T],

    /// Caller-supplied prior weights.
    pub prior_weights: &'a [T],

    /// Robustness weights from the previous pass.
    pub robustness_weights: &'a [T],

    /// Number of neighbours in every local window.
    pub window_size: usize,

    /// Singularity tolerance for the local x-variance.
    pub tolerance: T,

    /// Policy for windows without any weight.
    pub zero_weight_fallback: ZeroWeightFallback,
}

/// Signature for custom smooth pass function
#[doc(hidden)]
pub type SmoothPassFn<T> = fn(
    &SmoothPassInput<'_, T>, // pass inputs
    &mut [T],                // output (fitted)
) -> Result<(), LoessError>;

/// Output from LOESS execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Fitted values in working (possibly centered) coordinates.
    pub fitted: Vec<T>,

    /// Absolute residuals of the final pass.
    pub residuals: Vec<T>,

    /// Robustness weights used by the final pass.
    pub robustness_weights: Vec<T>,

    /// Number of robustness passes run after the initial pass.
    pub iterations_used: usize,

    /// Whether iteration stopped early on the median-residual check.
    pub converged: bool,

    /// Window size used by every pass.
    pub window_size: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for LOESS execution.
#[derive(Debug, Clone)]
pub struct LoessConfig<T> {
    /// Smoothing bandwidth, fraction of samples per local fit, in (0, 1].
    pub bandwidth: T,

    /// Number of robustness iterations (0 means initial fit only).
    pub iterations: usize,

    /// Convergence threshold and base of the singularity tolerance.
    pub accuracy: T,

    /// Robustness weight assigned to severe outliers.
    pub outlier_floor: T,

    /// Zero-weight fallback policy.
    pub zero_weight_fallback: ZeroWeightFallback,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom smooth pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

impl<T: Float> Default for LoessConfig<T> {
    fn default() -> Self {
        let accuracy = T::from(LoessExecutor::<T>::DEFAULT_ACCURACY).unwrap_or_else(T::epsilon);
        Self {
            bandwidth: T::from(LoessExecutor::<T>::DEFAULT_BANDWIDTH).unwrap_or_else(T::one),
            iterations: LoessExecutor::<T>::DEFAULT_ITERATIONS,
            accuracy,
            outlier_floor: accuracy,
            zero_weight_fallback: ZeroWeightFallback::default(),
            custom_smooth_pass: None,
        }
    }
}

/// Unified executor for LOESS smoothing operations.
#[derive(Debug, Clone)]
pub struct LoessExecutor<T: Float> {
    /// Smoothing bandwidth (0, 1].
    pub bandwidth: T,

    /// Number of robustness iterations.
    pub iterations: usize,

    /// Convergence threshold on the median residual.
    pub accuracy: T,

    /// Robustness weight floor for severe outliers.
    pub outlier_floor: T,

    /// Zero-weight fallback policy.
    pub zero_weight_fallback: ZeroWeightFallback,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom smooth pass function (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

impl<T: Float> Default for LoessExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessExecutor<T> {
    /// Default bandwidth.
    pub const DEFAULT_BANDWIDTH: f64 = 0.3;

    /// Default number of robustness iterations.
    pub const DEFAULT_ITERATIONS: usize = 2;

    /// Default accuracy (also the default outlier floor).
    pub const DEFAULT_ACCURACY: f64 = 1e-12;

    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self::from_config(&LoessConfig::default())
    }

    /// Create a new executor from a `LoessConfig`.
    pub fn from_config(config: &LoessConfig<T>) -> Self {
        Self {
            bandwidth: config.bandwidth,
            iterations: config.iterations,
            accuracy: config.accuracy,
            outlier_floor: config.outlier_floor,
            zero_weight_fallback: config.zero_weight_fallback,
            custom_smooth_pass: config.custom_smooth_pass,
        }
    }
}

// Setters used by extension crates and tests; the adapters go through `from_config`.
#[cfg_attr(not(feature = "dev"), allow(dead_code))]
impl<T: Float> LoessExecutor<T> {
    /// Set the smoothing bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, niter: usize) -> Self {
        self.iterations = niter;
        self
    }

    /// Set the convergence accuracy.
    pub fn accuracy(mut self, accuracy: T) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the robustness weight floor.
    pub fn outlier_floor(mut self, floor: T) -> Self {
        self.outlier_floor = floor;
        self
    }

    /// Set the zero weight fallback policy.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.zero_weight_fallback = policy;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom smooth pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, smooth_pass_fn: Option<SmoothPassFn<T>>) -> Self {
        self.custom_smooth_pass = smooth_pass_fn;
        self
    }
}

impl<T: Float> LoessExecutor<T> {
    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the initial pass and up to `iterations` robustness passes.
    ///
    /// Expects at least 3 prepared samples; smaller sets are answered by the
    /// adapters without smoothing.
    pub fn run(&self, samples: &SampleSet<T>) -> Result<ExecutorOutput<T>, LoessError>
    where
        T: WLSSolver,
    {
        let n = samples.len();
        let window_size = Window::calculate_span(n, self.bandwidth);
        Validator::validate_window_size(window_size, n)?;

        // Centered data is far better conditioned, so the guard can be tighter
        let tolerance = if samples.centered {
            self.accuracy * self.accuracy
        } else {
            self.accuracy
        };

        debug!(
            n,
            bandwidth = ?self.bandwidth,
            window_size,
            dropped = samples.dropped,
            "starting LOESS smoothing"
        );

        let mut buffer = LoessBuffer::with_capacity(n);
        buffer.prepare(n);
        let updater = BisquareUpdater::new(self.accuracy, self.outlier_floor);

        let mut iterations_used = 0;
        let mut converged = false;

        for iter in 0..=self.iterations {
            let input = SmoothPassInput {
                x: &samples.x,
                y: &samples.y,
                prior_weights: &samples.weights,
                robustness_weights: buffer.robustness_weights.as_slice(),
                window_size,
                tolerance,
                zero_weight_fallback: self.zero_weight_fallback,
            };

            match self.custom_smooth_pass {
                Some(callback) => callback(&input, buffer.fitted.as_mut_slice())?,
                None => Self::smooth_pass(
                    &input,
                    buffer.fitted.as_mut_slice(),
                    buffer.weights.as_mut_slice(),
                )?,
            }

            Self::compute_residuals(&samples.y, &buffer.fitted, buffer.residuals.as_mut_slice())?;

            if iter == self.iterations {
                break;
            }

            match updater.update(
                &buffer.residuals,
                buffer.robustness_weights.as_mut_slice(),
                buffer.median_scratch.as_mut_slice(),
            ) {
                RobustnessUpdate::Converged { median } => {
                    debug!(pass = iter, median = ?median, "median residual below accuracy, stopping");
                    converged = true;
                    break;
                }
                RobustnessUpdate::Updated { median } => {
                    debug!(pass = iter, median = ?median, "robustness weights updated");
                    iterations_used += 1;
                }
            }
        }

        Ok(ExecutorOutput {
            fitted: buffer.fitted.into_vec(),
            residuals: buffer.residuals.into_vec(),
            robustness_weights: buffer.robustness_weights.into_vec(),
            iterations_used,
            converged,
            window_size,
        })
    }

    // ========================================================================
    // Main Algorithmic Logic
    // ========================================================================

    /// Perform a single sequential smoothing pass over all points.
    pub fn smooth_pass(
        input: &SmoothPassInput<'_, T>,
        fitted: &mut [T],
        weights: &mut [T],
    ) -> Result<(), LoessError>
    where
        T: WLSSolver,
    {
        let mut window = Window::initialize(input.window_size);

        for (i, out) in fitted.iter_mut().enumerate() {
            if i > 0 {
                window.advance(input.x, input.prior_weights, i);
            }
            *out = Self::fit_point(input, i, window, weights)?;
        }

        Ok(())
    }

    /// Fit the local line for sample `idx` over `window`.
    ///
    /// `weights` is scratch indexed like `x`; only `window` is written.
    pub fn fit_point(
        input: &SmoothPassInput<'_, T>,
        idx: usize,
        window: Window,
        weights: &mut [T],
    ) -> Result<T, LoessError>
    where
        T: WLSSolver,
    {
        let mut ctx = RegressionContext {
            x: input.x,
            y: input.y,
            idx,
            window,
            robustness_weights: input.robustness_weights,
            prior_weights: input.prior_weights,
            weights,
            tolerance: input.tolerance,
            zero_weight_fallback: input.zero_weight_fallback,
        };

        ctx.fit().ok_or_else(|| {
            LoessError::NumericalInstability(format!(
                "local window of sample {idx} carries no weight"
            ))
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Compute `|y - fitted|`, rejecting non-finite fitted values or residuals.
    pub fn compute_residuals(y: &[T], fitted: &[T], residuals: &mut [T]) -> Result<(), LoessError> {
        for (i, ((r, &yi), &fi)) in residuals.iter_mut().zip(y).zip(fitted).enumerate() {
            if !fi.is_finite() {
                return Err(LoessError::NumericalInstability(format!(
                    "fitted value at index {i} is not finite"
                )));
            }

            *r = (yi - fi).abs();
            if !r.is_finite() {
                return Err(LoessError::NumericalInstability(format!(
                    "residual at index {i} is not finite"
                )));
            }
        }
        Ok(())
    }
}
