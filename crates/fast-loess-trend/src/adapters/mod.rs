//! Layer 5: Adapters
//!
//! This layer wraps the `loess-trend` batch adapter with parallel execution
//! and flexible input containers.

// Batch adapter with parallel execution.
pub mod batch;
