//! High-level API for LOESS smoothing with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of the extension crate.
//! It re-uses the `loess-trend` builder and swaps in a `Batch` marker that
//! produces the parallel batch builder.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `loess-trend` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Parallelism is available with the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LoessBuilder`] via `Loess::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.iterations()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::ParallelBatchLoessBuilder;

// Import base marker type for delegation
use loess_trend::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use loess_trend::internals::adapters::batch::InputPolicy;
pub use loess_trend::internals::algorithms::regression::ZeroWeightFallback;
pub use loess_trend::internals::api::{LoessAdapter, LoessBuilder};
pub use loess_trend::internals::engine::output::LoessResult;
pub use loess_trend::internals::primitives::errors::LoessError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> LoessAdapter<T> for Batch {
    type Output = ParallelBatchLoessBuilder<T>;

    fn convert(builder: LoessBuilder<T>) -> Self::Output {
        // Parallel unless the caller opted out
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseBatch as LoessAdapter<T>>::convert(builder).parallel(parallel);

        ParallelBatchLoessBuilder { base }
    }
}
