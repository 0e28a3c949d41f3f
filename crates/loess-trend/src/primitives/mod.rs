//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every other layer:
//! errors, prepared samples, windows and working buffers. It has zero
//! internal dependencies within the crate apart from `errors`.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Filtering, sorting and centering of input samples.
pub mod samples;

/// Windowing logic.
pub mod window;

/// Buffer management.
pub mod buffer;
