//! Input abstractions for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module lets `fit` accept several data containers (slices, vectors,
//! ndarray arrays) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every container is viewed as a borrowed slice.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before any work.
//!
//! ## Invariants
//!
//! * Returned slices cover all elements of the container, in order.
//!
//! ## Non-goals
//!
//! * This module does not filter, sort or reshape data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from loess-trend crate
use loess_trend::internals::primitives::errors::LoessError;

/// Trait for types that can be used as input for LOESS smoothing.
pub trait LoessInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_loess_slice(&self) -> Result<&[T], LoessError>;
}

impl<T: Float> LoessInput<T> for [T] {
    fn as_loess_slice(&self) -> Result<&[T], LoessError> {
        Ok(self)
    }
}

impl<T: Float> LoessInput<T> for Vec<T> {
    fn as_loess_slice(&self) -> Result<&[T], LoessError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> LoessInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_loess_slice(&self) -> Result<&[T], LoessError> {
        self.as_slice().ok_or_else(|| {
            LoessError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
