//! # loess-trend: Robust LOESS Trend Smoothing for Rust
//!
//! Robust locally weighted linear regression (LOESS) for noisy, irregularly
//! sampled one-dimensional series, such as physiological measurements taken
//! at uneven intervals. The result is a trend curve that follows the local
//! shape of the data while discounting isolated outliers.
//!
//! ## What is LOESS?
//!
//! At each sample, LOESS fits a weighted straight line through its nearest
//! neighbours, with tricube weights that fall off smoothly with distance. A
//! few robustness passes then re-weight every sample by the bisquare of its
//! residual, so spikes lose their pull on the curve.
//!
//! ## Quick Start
//!
//! ```rust
//! use loess_trend::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! // Build the model
//! let model = Loess::new()
//!     .bandwidth(0.5)     // Use 50% of the samples in each local fit
//!     .iterations(2)      // 2 robustness iterations
//!     .return_residuals()
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 8
//!   Bandwidth:   0.5
//!   Window size: 4
//!   Iterations:  2
//!
//! Smoothed Data:
//!        X     Y_smooth
//! ---------------------
//!     1.00     2.019621
//!     2.00     4.002502
//!     3.00     5.999591
//!     4.00     8.098614
//!     5.00    10.038855
//!     6.00    12.028748
//!     7.00    13.898293
//!     8.00    15.779907
//! ```
//!
//! ### One-shot smoothing
//!
//! For `(x, y)` pairs, [`smooth`] runs the lenient pipeline with the default
//! accuracy:
//!
//! ```rust
//! use loess_trend::prelude::*;
//!
//! let samples = [(2.0, 1.0), (1.0, 3.0), (f64::NAN, 0.0), (4.0, 5.0), (3.0, 7.0)];
//! let trend = smooth(&samples, 0.5, 2, None)?;
//!
//! // The NaN sample is dropped and the rest come back sorted by x
//! let xs: Vec<f64> = trend.iter().map(|p| p.0).collect();
//! assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Input policies
//!
//! - **`Lenient`** (default): non-finite samples are dropped, the rest are
//!   stably sorted by x and both axes are centered on their means before
//!   fitting. Equal x-values are merged in the output.
//! - **`Strict`**: every value must be finite and x strictly increasing,
//!   otherwise the call fails with `InvalidInput`. No centering.
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<LoessResult<T>, LoessError>`. Failures are
//! synchronous and never carry partial output:
//!
//! ```rust
//! use loess_trend::prelude::*;
//!
//! let model = Loess::<f64>::new().input_policy(Strict).adapter(Batch).build()?;
//!
//! match model.fit(&[1.0, 0.0], &[0.0, 1.0]) {
//!     Ok(result) => println!("Smoothed: {:?}", result.y),
//!     Err(e) => eprintln!("Fitting failed: {}", e),
//! }
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! loess-trend = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - local regression and robustness weights.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for LOESS smoothing.
mod api;

use crate::api::{Batch, LoessBuilder, LoessError, WLSSolver};

/// Smooth `(x, y)` pairs and return the merged trend curve.
///
/// Uses the lenient input policy and the default accuracy. `weights`, when
/// given, are per-sample prior weights aligned with `samples`.
///
/// # Errors
///
/// Fails with `InsufficientData` when no finite sample remains, and with
/// `InvalidParameter` for a bandwidth outside `(0, 1]` or too many
/// iterations.
pub fn smooth<T: WLSSolver>(
    samples: &[(T, T)],
    bandwidth: T,
    max_iterations: usize,
    weights: Option<&[T]>,
) -> Result<Vec<(T, T)>, LoessError> {
    let (x, y): (Vec<T>, Vec<T>) = samples.iter().copied().unzip();

    let model = LoessBuilder::new()
        .bandwidth(bandwidth)
        .iterations(max_iterations)
        .adapter(Batch)
        .build()?;

    let result = match weights {
        Some(w) => model.fit_weighted(&x, &y, w)?,
        None => model.fit(&x, &y)?,
    };

    Ok(result.points().collect())
}

// Standard LOESS prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch,
        InputPolicy::Lenient,
        InputPolicy::Strict,
        LoessBuilder as Loess, LoessError, LoessResult,
        ZeroWeightFallback::Fail,
        ZeroWeightFallback::ReturnOriginal,
        ZeroWeightFallback::UseLocalMean,
    };
    pub use crate::smooth;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
