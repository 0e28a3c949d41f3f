//! Layer 3: Algorithms
//!
//! This layer implements the core logic for local weighted regression and
//! robustness re-weighting. It contains the "business logic" of LOESS but is
//! orchestrated by the engine layer.

// Local weighted regression implementations.
pub mod regression;

// Robustness weight updates for outlier downweighting.
pub mod robustness;
