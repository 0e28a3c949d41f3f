//! # fast-loess-trend: Parallel LOESS Trend Smoothing
//!
//! Multi-threaded extension of [`loess_trend`]. The smoothing semantics are
//! exactly those of the core crate; only the per-point local fits of each
//! pass are spread across CPU cores with `rayon`, and inputs may come from
//! slices, vectors or `ndarray` arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_loess_trend::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::linspace(0.0, 10.0, 200);
//! let y = x.mapv(|v: f64| v.sin() + 0.05 * v);
//!
//! let model = Loess::new()
//!     .bandwidth(0.2)
//!     .iterations(2)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.len(), 200);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Parallel execution
//!
//! Parallel execution is the default. It can be switched off per model:
//!
//! ```rust
//! use fast_loess_trend::prelude::*;
//!
//! let x: Vec<f64> = (0..50).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sqrt()).collect();
//!
//! let parallel = Loess::new().adapter(Batch).build()?.fit(&x, &y)?;
//! let sequential = Loess::new().adapter(Batch).parallel(false).build()?.fit(&x, &y)?;
//!
//! assert_eq!(parallel.y, sequential.y);
//! # Result::<(), LoessError>::Ok(())
//! ```

// Layer 4: Engine - parallel smoothing pass.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for LOESS smoothing.
mod api;

// Input data handling.
mod input;

pub use crate::input::LoessInput;

// Standard fast-loess-trend prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch,
        InputPolicy::{Lenient, Strict},
        LoessBuilder as Loess, LoessError, LoessResult,
        ZeroWeightFallback::{Fail, ReturnOriginal, UseLocalMean},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
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
