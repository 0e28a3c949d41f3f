//! Error types for LOESS trend smoothing.
//!
//! ## Purpose
//!
//! This module defines every failure a smoothing call can surface: bad input
//! data, bad parameters, and numerical breakdown detected mid-computation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending field, lengths or values.
//! * **Deferred**: Builder misuse is recorded and reported at `build()`.
//! * **No-std**: Uses `alloc` strings when the standard library is absent.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input errors**: Empty data, mismatched lengths, ordering, non-finite values.
//! 2. **Parameter errors**: Bandwidth, accuracy, outlier floor, iteration cap, window size.
//! 3. **Numerical errors**: A fitted value or residual became non-finite.
//!
//! ## Invariants
//!
//! * Every failure is synchronous and leaves no partial result behind.
//! * Retrying with identical input yields the identical error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LOESS smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LoessError {
    /// No samples were supplied, or every sample was dropped as non-finite.
    InsufficientData,

    /// A parallel array does not have the same length as `x`.
    MismatchedLength {
        /// Name of the mismatched array (`"y"` or `"weights"`).
        field: &'static str,
        /// Number of elements in the `x` array.
        expected: usize,
        /// Number of elements in the mismatched array.
        got: usize,
    },

    /// Input data violates a requirement (ordering, finiteness, weight sign).
    InvalidInput(String),

    /// A configuration parameter is out of range.
    InvalidParameter(String),

    /// A fitted value or residual became non-finite during smoothing.
    NumericalInstability(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LoessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientData => write!(f, "Insufficient data: no finite samples supplied"),
            Self::MismatchedLength {
                field,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: x has {expected} points, {field} has {got}"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Self::NumericalInstability(msg) => write!(f, "Numerical instability: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LoessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_length_names_the_field() {
        let err = LoessError::MismatchedLength {
            field: "weights",
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "Length mismatch: x has 3 points, weights has 2"
        );
    }

    #[test]
    fn monotonicity_message_is_preserved() {
        let err = LoessError::InvalidInput("x values must be strictly increasing".into());
        assert!(err.to_string().ends_with("x values must be strictly increasing"));
    }
}
