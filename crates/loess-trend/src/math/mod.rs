//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions used by LOESS:
//! - The tricube kernel for distance-based weighting
//! - Median selection for residual scale
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Median selection.
pub mod median;
