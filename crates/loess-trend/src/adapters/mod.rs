//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine for user-facing execution modes. The crate
//! ships the in-memory batch adapter; extension crates build on it.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for LOESS smoothing.
pub mod batch;
