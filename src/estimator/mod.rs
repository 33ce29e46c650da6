//! Layer 4: Estimator seam
//!
//! ## Purpose
//!
//! This module defines the interface to the external k-NN mutual
//! information estimator. The crate orchestrates subsampling and
//! aggregation; the actual neighbor-distance statistics (ball-tree or
//! kd-tree search, digamma bias correction) live behind this trait in a
//! collaborator supplied by the caller.
//!
//! ## Design notes
//!
//! * **Options travel with the implementor**: estimator-specific knobs
//!   (metric, tree kind, noise jitter) are fields of the implementing
//!   type, not a parallel parameter bag.
//! * **Closures qualify**: a blanket impl covers plain functions and
//!   closures of the matching shape, which keeps tests and quick
//!   experiments free of wrapper types.
//!
//! ## Key concepts
//!
//! * **Contract**: called only with strictly more rows than `neighbors`;
//!   must return exactly one value per feature, in natural-log units.
//!
//! ## Non-goals
//!
//! * This crate ships no estimator implementation of its own.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MiError;

// ============================================================================
// ContinuousMiEstimator
// ============================================================================

/// External continuous-feature mutual information estimator.
///
/// Implementors receive one chunk of the dataset and return the estimated
/// MI between each feature column and the targets.
pub trait ContinuousMiEstimator<T: Float> {
    /// Estimate per-feature MI for one chunk, in natural-log units.
    ///
    /// # Arguments
    ///
    /// - `x_chunk`: flattened row-major feature rows, `features` columns
    /// - `y_chunk`: one target per row
    /// - `features`: number of feature columns
    /// - `neighbors`: neighbor count `k`; always less than the row count
    ///
    /// # Errors
    ///
    /// Implementors should report their own failures as
    /// [`MiError::EstimatorFailure`]; any error aborts the whole
    /// estimation run.
    fn continuous_mi(
        &self,
        x_chunk: &[T],
        y_chunk: &[T],
        features: usize,
        neighbors: usize,
    ) -> Result<Vec<T>, MiError>;
}

impl<T, F> ContinuousMiEstimator<T> for F
where
    T: Float,
    F: Fn(&[T], &[T], usize, usize) -> Result<Vec<T>, MiError>,
{
    fn continuous_mi(
        &self,
        x_chunk: &[T],
        y_chunk: &[T],
        features: usize,
        neighbors: usize,
    ) -> Result<Vec<T>, MiError> {
        self(x_chunk, y_chunk, features, neighbors)
    }
}
