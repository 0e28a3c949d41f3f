//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for LOESS smoothing.
//! It distributes the per-point fits of a pass across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
