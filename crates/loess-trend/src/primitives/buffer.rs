//! Working memory for LOESS smoothing passes.
//!
//! ## Purpose
//!
//! This module holds the per-call scratch space of a smoothing request. All
//! slots are allocated once when a call starts and reused by every robustness
//! pass, so the passes themselves never touch the allocator.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: One `LoessBuffer` owns every per-sample array of a call.
//! * **Reuse**: Slots are refilled in place; capacity only grows.
//! * **Thread scratch**: Parallel passes keep their own kernel-weight scratch per worker.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **LoessBuffer**: Fitted values, residuals, robustness weights and scratch arrays.
//!
//! ## Invariants
//!
//! * After `prepare(n)` every slot has length `n`.
//! * Robustness weights start at 1 for every call.
//!
//! ## Non-goals
//!
//! * Buffers are never shared between smoothing calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::{One, Zero};

// ============================================================================
// Slot
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone, Default)]
pub struct Slot<T>(Vec<T>);

impl<T: Clone> Slot<T> {
    /// Create an empty slot with the given capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Resize to `n` and fill every element with `val`, reusing capacity.
    #[inline]
    pub fn fill_to(&mut self, n: usize, val: T) {
        if self.0.len() == n {
            self.0.fill(val);
        } else {
            self.0.clear();
            self.0.resize(n, val);
        }
    }

    /// Consume the slot and return the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// LoessBuffer
// ============================================================================

/// Working memory for the LOESS executor.
#[derive(Debug, Clone, Default)]
pub struct LoessBuffer<T> {
    /// Fitted values of the latest pass (centered coordinates).
    pub fitted: Slot<T>,

    /// Absolute residuals `|y - fitted|` of the latest pass.
    pub residuals: Slot<T>,

    /// Robustness weights feeding the next pass.
    pub robustness_weights: Slot<T>,

    /// Kernel weights scratch for the sequential pass.
    pub weights: Slot<T>,

    /// Scratch copy of the residuals for median selection.
    pub median_scratch: Slot<T>,
}

impl<T: Zero + One + Clone> LoessBuffer<T> {
    /// Create a buffer pre-allocated for `n` samples.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            fitted: Slot::new(n),
            residuals: Slot::new(n),
            robustness_weights: Slot::new(n),
            weights: Slot::new(n),
            median_scratch: Slot::new(n),
        }
    }

    /// Reset every slot for a call over `n` samples.
    pub fn prepare(&mut self, n: usize) {
        self.fitted.fill_to(n, T::zero());
        self.residuals.fill_to(n, T::zero());
        self.robustness_weights.fill_to(n, T::one());
        self.weights.fill_to(n, T::zero());
        self.median_scratch.fill_to(n, T::zero());
    }
}
