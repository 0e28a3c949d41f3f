//! Batch adapter for LOESS trend smoothing.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete
//! sample set in memory, prepares it, runs the executor and assembles the
//! smoothed trend curve.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire dataset in one call.
//! * **Preparation**: Filters, sorts and centers, or checks strict ordering,
//!   depending on the input policy.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, prepares, executes and assembles.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Trivial inputs**: One or two samples are returned unchanged.
//!
//! ## Invariants
//!
//! * Length checks run before anything else.
//! * Output x-values are strictly increasing once at least three samples are
//!   smoothed; the one- and two-sample path returns sorted, unmerged input.
//! * A failed call never returns partial output.
//!
//! ## Non-goals
//!
//! * This adapter does not keep state between calls.
//! * This adapter does not interpolate at x-values outside the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::{WLSSolver, ZeroWeightFallback};
use crate::engine::executor::{LoessConfig, LoessExecutor, SmoothPassFn};
use crate::engine::output::{LoessResult, assemble_points};
use crate::engine::validator::Validator;
use crate::primitives::errors::LoessError;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Input Policy
// ============================================================================

/// How raw input samples are prepared before smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Drop non-finite samples, sort by x and mean-center both axes (default).
    #[default]
    Lenient,

    /// Reject non-finite samples and require strictly increasing x; no centering.
    Strict,
}

// ============================================================================
// Batch LOESS Builder
// ============================================================================

/// Builder for batch LOESS processor.
#[derive(Debug, Clone)]
pub struct BatchLoessBuilder<T: Float> {
    /// Smoothing bandwidth (fraction of samples per local fit)
    pub bandwidth: T,

    /// Number of robustness iterations
    pub iterations: usize,

    /// Convergence threshold on the median residual
    pub accuracy: T,

    /// Robustness weight for severe outliers (defaults to `accuracy`)
    pub outlier_floor: Option<T>,

    /// Input preparation policy
    pub input_policy: InputPolicy,

    /// Policy for handling zero-weight neighborhoods
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Whether to return robustness weights
    pub return_robustness_weights: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchLoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchLoessBuilder<T> {
    /// Create a new batch LOESS builder with default parameters.
    fn new() -> Self {
        let defaults = LoessConfig::<T>::default();
        Self {
            bandwidth: defaults.bandwidth,
            iterations: defaults.iterations,
            accuracy: defaults.accuracy,
            outlier_floor: None,
            input_policy: InputPolicy::default(),
            zero_weight_fallback: defaults.zero_weight_fallback,
            compute_residuals: false,
            return_robustness_weights: false,
            custom_smooth_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the smoothing bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the convergence accuracy.
    pub fn accuracy(mut self, accuracy: T) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the robustness weight floor for severe outliers.
    pub fn outlier_floor(mut self, floor: T) -> Self {
        self.outlier_floor = Some(floor);
        self
    }

    /// Set the input preparation policy.
    pub fn input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Set the zero-weight fallback policy.
    pub fn zero_weight_fallback(mut self, fallback: ZeroWeightFallback) -> Self {
        self.zero_weight_fallback = fallback;
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.compute_residuals = enabled;
        self
    }

    /// Enable returning robustness weights in the result.
    pub fn return_robustness_weights(mut self, enabled: bool) -> Self {
        self.return_robustness_weights = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom smooth pass function.
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchLoess<T>, LoessError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_bandwidth(self.bandwidth)?;
        Validator::validate_iterations(self.iterations)?;
        Validator::validate_positive(self.accuracy, "accuracy")?;
        if let Some(floor) = self.outlier_floor {
            Validator::validate_positive(floor, "outlier_floor")?;
        }

        Ok(BatchLoess { config: self })
    }
}

// ============================================================================
// Batch LOESS Processor
// ============================================================================

/// Batch LOESS processor.
#[derive(Debug, Clone)]
pub struct BatchLoess<T: Float> {
    config: BatchLoessBuilder<T>,
}

impl<T: WLSSolver> BatchLoess<T> {
    /// Smooth `(x, y)` samples with unit prior weights.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LoessResult<T>, LoessError> {
        self.run(x, y, None)
    }

    /// Smooth `(x, y)` samples with per-sample prior weights.
    ///
    /// Samples with zero weight are skipped when the local window advances.
    pub fn fit_weighted(&self, x: &[T], y: &[T], weights: &[T]) -> Result<LoessResult<T>, LoessError> {
        self.run(x, y, Some(weights))
    }

    fn run(&self, x: &[T], y: &[T], weights: Option<&[T]>) -> Result<LoessResult<T>, LoessError> {
        let samples = self.prepare(x, y, weights)?;
        if samples.is_empty() {
            return Err(LoessError::InsufficientData);
        }
        let n = samples.len();

        // Nothing to regress on: hand the prepared samples back unchanged
        if n <= 2 {
            debug!(n, "too few samples to smooth, returning input");
            return Ok(LoessResult {
                x: samples.x_original,
                y: samples.y_original,
                residuals: self.config.compute_residuals.then(|| vec![T::zero(); n]),
                robustness_weights: self.config.return_robustness_weights.then(|| vec![T::one(); n]),
                iterations_used: 0,
                converged: false,
                bandwidth_used: self.config.bandwidth,
                window_size: n,
                dropped: samples.dropped,
            });
        }

        let config = LoessConfig {
            bandwidth: self.config.bandwidth,
            iterations: self.config.iterations,
            accuracy: self.config.accuracy,
            outlier_floor: self.config.outlier_floor.unwrap_or(self.config.accuracy),
            zero_weight_fallback: self.config.zero_weight_fallback,
            // ++++++++++++++++++++++++++++++++++++++
            // +               DEV                  +
            // ++++++++++++++++++++++++++++++++++++++
            custom_smooth_pass: self.config.custom_smooth_pass,
        };

        let output = LoessExecutor::from_config(&config).run(&samples)?;
        let (xs, ys) = assemble_points(&samples.x_original, &output.fitted, samples.y_mean);

        Ok(LoessResult {
            x: xs,
            y: ys,
            residuals: self.config.compute_residuals.then_some(output.residuals),
            robustness_weights: self
                .config
                .return_robustness_weights
                .then_some(output.robustness_weights),
            iterations_used: output.iterations_used,
            converged: output.converged,
            bandwidth_used: self.config.bandwidth,
            window_size: output.window_size,
            dropped: samples.dropped,
        })
    }

    /// Validate raw input and build the working sample set.
    fn prepare(&self, x: &[T], y: &[T], weights: Option<&[T]>) -> Result<SampleSet<T>, LoessError> {
        Validator::validate_lengths(x, y, weights)?;
        if let Some(w) = weights {
            Validator::validate_weights(w)?;
        }

        match self.config.input_policy {
            InputPolicy::Lenient => Ok(SampleSet::lenient(x, y, weights)),
            InputPolicy::Strict => {
                Validator::validate_finite(x, y)?;
                Validator::validate_strictly_increasing(x)?;
                Ok(SampleSet::strict(x, y, weights))
            }
        }
    }
}
