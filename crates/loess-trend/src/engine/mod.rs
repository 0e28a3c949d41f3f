//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (windows, buffers) and algorithms (regression, robustness).
//! It owns the pass loop and the convergence check.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for LOESS smoothing.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for LOESS operations.
pub mod output;
