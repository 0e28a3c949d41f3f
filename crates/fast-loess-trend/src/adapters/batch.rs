//! Batch adapter for LOESS smoothing with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter of the extension crate.
//! It wraps the `loess-trend` batch builder, injects the parallel smoothing
//! pass and accepts any [`LoessInput`] container.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, preparation and assembly stay in `loess-trend`.
//! * **Parallelism**: Adds parallel per-point fits via `rayon` (on by default).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parallel and sequential execution produce identical results.
//!
//! ## Non-goals
//!
//! * This adapter does not parallelize across robustness iterations.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::smooth_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;
use tracing::debug;

// Export dependencies from loess-trend crate
use loess_trend::internals::adapters::batch::{BatchLoess, BatchLoessBuilder, InputPolicy};
use loess_trend::internals::algorithms::regression::{WLSSolver, ZeroWeightFallback};
use loess_trend::internals::engine::output::LoessResult;
use loess_trend::internals::primitives::errors::LoessError;

// Internal dependencies
use crate::input::LoessInput;

// ============================================================================
// Extended Batch LOESS Builder
// ============================================================================

/// Builder for batch LOESS processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchLoessBuilder<T: Float> {
    /// Base builder from the loess-trend crate
    pub base: BatchLoessBuilder<T>,
}

impl<T: Float> Default for ParallelBatchLoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchLoessBuilder<T> {
    /// Create a new batch builder with default parameters and parallel execution.
    fn new() -> Self {
        let base = BatchLoessBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the smoothing bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.base = self.base.iterations(iterations);
        self
    }

    /// Set the convergence accuracy.
    pub fn accuracy(mut self, accuracy: T) -> Self {
        self.base = self.base.accuracy(accuracy);
        self
    }

    /// Set the robustness weight for severe outliers.
    pub fn outlier_floor(mut self, floor: T) -> Self {
        self.base = self.base.outlier_floor(floor);
        self
    }

    /// Set the input preparation policy.
    pub fn input_policy(mut self, policy: InputPolicy) -> Self {
        self.base = self.base.input_policy(policy);
        self
    }

    /// Set the zero-weight fallback policy.
    pub fn zero_weight_fallback(mut self, fallback: ZeroWeightFallback) -> Self {
        self.base = self.base.zero_weight_fallback(fallback);
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.base = self.base.compute_residuals(enabled);
        self
    }

    /// Enable returning robustness weights in the result.
    pub fn return_robustness_weights(mut self, enabled: bool) -> Self {
        self.base = self.base.return_robustness_weights(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchLoess<T>, LoessError> {
        // Reuse the validation centralized in loess-trend
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchLoess { config: self })
    }
}

// ============================================================================
// Extended Batch LOESS Processor
// ============================================================================

/// Batch LOESS processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchLoess<T: Float> {
    config: ParallelBatchLoessBuilder<T>,
}

impl<T: WLSSolver + Send + Sync> ParallelBatchLoess<T> {
    /// Smooth `(x, y)` samples with unit prior weights.
    pub fn fit<I1, I2>(&self, x: &I1, y: &I2) -> Result<LoessResult<T>, LoessError>
    where
        I1: LoessInput<T> + ?Sized,
        I2: LoessInput<T> + ?Sized,
    {
        let x_slice = x.as_loess_slice()?;
        let y_slice = y.as_loess_slice()?;

        self.processor()?.fit(x_slice, y_slice)
    }

    /// Smooth `(x, y)` samples with per-sample prior weights.
    pub fn fit_weighted<I1, I2, I3>(&self, x: &I1, y: &I2, weights: &I3) -> Result<LoessResult<T>, LoessError>
    where
        I1: LoessInput<T> + ?Sized,
        I2: LoessInput<T> + ?Sized,
        I3: LoessInput<T> + ?Sized,
    {
        let x_slice = x.as_loess_slice()?;
        let y_slice = y.as_loess_slice()?;
        let w_slice = weights.as_loess_slice()?;

        self.processor()?.fit_weighted(x_slice, y_slice, w_slice)
    }

    // Configure the base builder with the parallel pass if enabled
    fn processor(&self) -> Result<BatchLoess<T>, LoessError> {
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_smooth_pass(smooth_pass_parallel);
            } else {
                builder.custom_smooth_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_smooth_pass = None;
        }

        debug!(parallel = builder.custom_smooth_pass.is_some(), "configured batch processor");

        builder.build()
    }
}
