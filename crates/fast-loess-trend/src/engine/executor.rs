//! Parallel execution engine for LOESS smoothing operations.
//!
//! ## Purpose
//!
//! This module provides the parallel smoothing pass that is injected into
//! the `loess-trend` execution engine. It spreads the per-point local fits of
//! one pass across CPU cores, which pays off for long series.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential smoothing pass.
//! * **Windows first**: The forward-only window tracker is inherently
//!   sequential, so every window of the pass is computed up front.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Optimization**: Reuses one kernel-weight buffer per worker.
//!
//! ## Invariants
//!
//! * Input x-values are sorted.
//! * Each point is fitted with the same arithmetic as the sequential pass, so
//!   results are bit-identical.
//!
//! ## Non-goals
//!
//! * This module does not handle the iteration loop (handled by `loess_trend::executor`).
//! * This module does not validate or prepare input data.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from loess-trend crate
use loess_trend::internals::algorithms::regression::WLSSolver;
use loess_trend::internals::engine::executor::{LoessExecutor, SmoothPassInput};
use loess_trend::internals::primitives::errors::LoessError;
use loess_trend::internals::primitives::window::compute_windows;

// ============================================================================
// Parallel Smoothing Function
// ============================================================================

/// Perform a single smoothing pass over all points in parallel.
#[cfg(feature = "cpu")]
pub fn smooth_pass_parallel<T>(input: &SmoothPassInput<'_, T>, fitted: &mut [T]) -> Result<(), LoessError>
where
    T: WLSSolver + Send + Sync,
{
    let n = input.x.len();
    if n == 0 {
        return Ok(());
    }

    let windows = compute_windows(input.x, input.prior_weights, input.window_size)?;

    fitted
        .par_iter_mut()
        .zip(windows.par_iter())
        .enumerate()
        .try_for_each_init(
            || vec![T::zero(); n],
            |weights, (i, (out, &window))| {
                *out = LoessExecutor::fit_point(input, i, window, weights)?;
                Ok(())
            },
        )
}
