//! High-level API for LOESS trend smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the smoothing parameters and hands the configuration to
//! an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to adapter builders, so
//!   extension crates can plug in their own adapters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LoessBuilder`] via `Loess::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.iterations()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. Call `.build()?` and then `.fit(&x, &y)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchLoessBuilder;
use crate::engine::executor::SmoothPassFn;

// Publicly re-exported types
pub use crate::adapters::batch::InputPolicy;
pub use crate::algorithms::regression::{WLSSolver, ZeroWeightFallback};
pub use crate::engine::output::LoessResult;
pub use crate::primitives::errors::LoessError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Fluent builder for configuring LOESS parameters.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T> {
    /// Smoothing bandwidth, fraction of samples per local fit (0..1].
    pub bandwidth: Option<T>,

    /// Robustness iterations after the initial pass.
    pub iterations: Option<usize>,

    /// Convergence threshold on the median residual.
    pub accuracy: Option<T>,

    /// Robustness weight for severe outliers.
    pub outlier_floor: Option<T>,

    /// Input preparation policy (default: Lenient).
    pub input_policy: Option<InputPolicy>,

    /// Behavior when local neighborhood weights are zero (default: UseLocalMean).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    /// Return per-sample residuals.
    pub compute_residuals: Option<bool>,

    /// Return final robustness weights.
    pub return_robustness_weights: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: LoessAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            iterations: None,
            accuracy: None,
            outlier_floor: None,
            input_policy: None,
            zero_weight_fallback: None,
            compute_residuals: None,
            return_robustness_weights: None,
            custom_smooth_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing bandwidth (fraction of samples in each local fit).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the number of robustness iterations (default 2).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the convergence accuracy (default 1e-12).
    pub fn accuracy(mut self, accuracy: T) -> Self {
        if self.accuracy.is_some() {
            self.duplicate_param = Some("accuracy");
        }
        self.accuracy = Some(accuracy);
        self
    }

    /// Set the robustness weight given to severe outliers (default: the accuracy).
    pub fn outlier_floor(mut self, floor: T) -> Self {
        if self.outlier_floor.is_some() {
            self.duplicate_param = Some("outlier_floor");
        }
        self.outlier_floor = Some(floor);
        self
    }

    /// Set how raw samples are prepared.
    pub fn input_policy(mut self, policy: InputPolicy) -> Self {
        if self.input_policy.is_some() {
            self.duplicate_param = Some("input_policy");
        }
        self.input_policy = Some(policy);
        self
    }

    /// Set behavior for handling zero-weight neighborhoods.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        if self.zero_weight_fallback.is_some() {
            self.duplicate_param = Some("zero_weight_fallback");
        }
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Include final robustness weights in output.
    pub fn return_robustness_weights(mut self) -> Self {
        self.return_robustness_weights = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom smooth pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait LoessAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`LoessBuilder`] into a specialized execution builder.
    fn convert(builder: LoessBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> LoessAdapter<T> for Batch {
    type Output = BatchLoessBuilder<T>;

    fn convert(builder: LoessBuilder<T>) -> Self::Output {
        let mut result = BatchLoessBuilder::default();

        if let Some(bandwidth) = builder.bandwidth {
            result.bandwidth = bandwidth;
        }
        if let Some(iterations) = builder.iterations {
            result.iterations = iterations;
        }
        if let Some(accuracy) = builder.accuracy {
            result.accuracy = accuracy;
        }
        result.outlier_floor = builder.outlier_floor;
        if let Some(policy) = builder.input_policy {
            result.input_policy = policy;
        }
        if let Some(zwf) = builder.zero_weight_fallback {
            result.zero_weight_fallback = zwf;
        }

        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        if let Some(rw) = builder.return_robustness_weights {
            result.return_robustness_weights = rw;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(sp) = builder.custom_smooth_pass {
            result.custom_smooth_pass = Some(sp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_parameter_fails_build() {
        let err = LoessBuilder::<f64>::new()
            .bandwidth(0.3)
            .bandwidth(0.5)
            .adapter(Batch)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            LoessError::DuplicateParameter {
                parameter: "bandwidth"
            }
        );
    }

    #[test]
    fn settings_reach_the_batch_builder() {
        let batch = LoessBuilder::<f64>::new()
            .bandwidth(0.5)
            .iterations(4)
            .outlier_floor(1e-6)
            .input_policy(InputPolicy::Strict)
            .return_residuals()
            .adapter(Batch);

        assert_eq!(batch.bandwidth, 0.5);
        assert_eq!(batch.iterations, 4);
        assert_eq!(batch.outlier_floor, Some(1e-6));
        assert_eq!(batch.input_policy, InputPolicy::Strict);
        assert!(batch.compute_residuals);
        assert!(!batch.return_robustness_weights);
    }
}
