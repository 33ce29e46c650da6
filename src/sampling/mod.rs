//! Layer 3: Sampling
//!
//! # Purpose
//!
//! This layer turns the dataset into randomized chunk-level MI estimates:
//! - Permutation drawing and split-boundary computation
//! - Scratch-buffer row gathering
//! - The per-(k, split) subsampler driving the external estimator

/// Permutations, split boundaries, and row gathering.
pub mod partition;

/// The per-(k, split) subsampler.
pub mod subsampler;
