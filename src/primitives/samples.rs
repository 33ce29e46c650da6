//! Per-level sample container and undersized-chunk policy.
//!
//! ## Purpose
//!
//! This module defines the data carried from the subsampler to the
//! aggregation functions: one [`LevelSamples`] per split level, holding
//! the per-chunk MI estimates in bits, plus the policy controlling what
//! happens to chunks too small for the requested k-NN query.
//!
//! ## Key concepts
//!
//! * **Split level**: a partition count `s` defining how many near-equal
//!   chunks the shuffled dataset is divided into for one round.
//! * **Undersized chunk**: a chunk whose row count does not exceed the
//!   neighbor count `k`; a k-NN query of neighborhood size `k` needs
//!   strictly more than `k` rows.
//!
//! ## Invariants
//!
//! * Under [`UndersizedChunkPolicy::ZeroFill`], `values.len() == splits`.
//! * Under [`UndersizedChunkPolicy::Exclude`], `values.len() <= splits`.
//!
//! ## Non-goals
//!
//! * This module does not compute MI values or variances (handled by
//!   `sampling` and `math`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// LevelSamples
// ============================================================================

/// Per-chunk MI estimates for one split level, in bits.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSamples<T> {
    /// Partition count the level was generated with.
    pub splits: usize,

    /// One MI estimate per retained chunk, in bits.
    pub values: Vec<T>,
}

// ============================================================================
// UndersizedChunkPolicy
// ============================================================================

/// Policy for chunks with too few rows to support the k-NN query.
///
/// The zero-fill behavior keeps every per-level vector at exactly `splits`
/// entries but biases the downstream mean and pooled variance toward zero
/// whenever `k` is large relative to the smallest chunk size. The
/// exclusion behavior removes the chunk from the vector and from every
/// downstream denominator instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndersizedChunkPolicy {
    /// Record a zero for the chunk, keeping the vector length at `splits`.
    #[default]
    ZeroFill,

    /// Drop the chunk from the vector and all downstream denominators.
    Exclude,
}
