//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types used throughout the crate:
//! - The crate error enum (`MiError`)
//! - The per-level sample container (`LevelSamples`)
//! - The undersized-chunk policy (`UndersizedChunkPolicy`)
//!
//! These carry no statistical logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Estimator seam
//!   ↓
//! Layer 3: Sampling
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for validation, aggregation, and collaborator failures.
pub mod errors;

/// Per-level sample container and undersized-chunk policy.
pub mod samples;
