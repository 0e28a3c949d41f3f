//! Input validation for LOESS configuration and data.
//!
//! ## Purpose
//!
//! This module checks configuration parameters and input data before any
//! smoothing work starts: array lengths, prior weights, finiteness and
//! ordering under the strict policy, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Length checks run before any value is inspected.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;

/// Upper bound on the number of robustness iterations.
pub const MAX_ITERATIONS: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LOESS configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Check that `y` and the optional weights have the same length as `x`.
    pub fn validate_lengths<T>(x: &[T], y: &[T], weights: Option<&[T]>) -> Result<(), LoessError> {
        let n = x.len();
        if y.len() != n {
            return Err(LoessError::MismatchedLength {
                field: "y",
                expected: n,
                got: y.len(),
            });
        }

        if let Some(w) = weights {
            if w.len() != n {
                return Err(LoessError::MismatchedLength {
                    field: "weights",
                    expected: n,
                    got: w.len(),
                });
            }
        }

        Ok(())
    }

    /// Check that every prior weight is finite and non-negative.
    pub fn validate_weights<T: Float>(weights: &[T]) -> Result<(), LoessError> {
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < T::zero() {
                return Err(LoessError::InvalidInput(format!(
                    "weights[{}]={} must be finite and non-negative",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Check that every coordinate is finite (strict policy).
    pub fn validate_finite<T: Float>(x: &[T], y: &[T]) -> Result<(), LoessError> {
        for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
            if !xi.is_finite() {
                return Err(LoessError::InvalidInput(format!(
                    "x[{}]={} is not finite",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !yi.is_finite() {
                return Err(LoessError::InvalidInput(format!(
                    "y[{}]={} is not finite",
                    i,
                    yi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Check that `x` is strictly increasing (strict policy).
    pub fn validate_strictly_increasing<T: Float>(x: &[T]) -> Result<(), LoessError> {
        if x.windows(2).all(|pair| pair[0] < pair[1]) {
            Ok(())
        } else {
            Err(LoessError::InvalidInput(
                "x values must be strictly increasing".into(),
            ))
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing bandwidth, a fraction in `(0, 1]`.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), LoessError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() || bandwidth > T::one() {
            return Err(LoessError::InvalidParameter(format!(
                "bandwidth must be in (0, 1], got {}",
                bandwidth.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate a threshold that must be finite and strictly positive.
    pub fn validate_positive<T: Float>(value: T, name: &str) -> Result<(), LoessError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(LoessError::InvalidParameter(format!(
                "{} must be finite and positive, got {}",
                name,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate the number of robustness iterations.
    ///
    /// # Notes
    ///
    /// * 0 iterations means initial fit only (no robustness).
    pub fn validate_iterations(iterations: usize) -> Result<(), LoessError> {
        if iterations > MAX_ITERATIONS {
            return Err(LoessError::InvalidParameter(format!(
                "iterations must be at most {MAX_ITERATIONS}, got {iterations}"
            )));
        }
        Ok(())
    }

    /// Validate the number of neighbours per local fit against the sample count.
    pub fn validate_window_size(window_size: usize, n: usize) -> Result<(), LoessError> {
        if window_size < 2 || window_size > n {
            return Err(LoessError::InvalidParameter(format!(
                "window size {window_size} must be between 2 and {n}"
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LoessError> {
        if let Some(param) = duplicate_param {
            return Err(LoessError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
