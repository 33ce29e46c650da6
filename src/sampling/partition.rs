//! Randomized partitioning primitives.
//!
//! ## Purpose
//!
//! This module provides the three mechanical pieces of a subsampling
//! round: drawing a uniform random permutation of the row indices,
//! computing near-equal split boundaries, and gathering a chunk's rows
//! into scratch buffers through the permuted indices.
//!
//! ## Design notes
//!
//! * **Injectable randomness**: the permutation is drawn from a
//!   caller-supplied `rand::Rng`, so the whole pipeline is deterministic
//!   under a fixed generator.
//! * **Integer boundaries**: boundary `j` is `(j * n) / splits`, the
//!   integer rendering of linear interpolation over `[0, n]`.
//! * **Scratch reuse**: `gather_rows` clears and refills caller-owned
//!   buffers to avoid per-chunk allocations.
//!
//! ## Invariants
//!
//! * The `splits` ranges exactly and disjointly cover `0..n`.
//! * Any two chunk sizes differ by at most 1.
//!
//! ## Non-goals
//!
//! * This module does not call the MI estimator (see `subsampler`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Permutation
// ============================================================================

/// Draw a uniform random permutation of `0..n`.
pub fn permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

// ============================================================================
// Split Boundaries
// ============================================================================

/// Compute `splits + 1` boundary indices over `[0, n]`.
///
/// Boundary `j` is `(j * n) / splits`, producing `splits` contiguous
/// ranges whose sizes are as equal as possible.
pub fn split_bounds(n: usize, splits: usize) -> Vec<usize> {
    (0..=splits).map(|j| j * n / splits).collect()
}

// ============================================================================
// Row Gathering
// ============================================================================

/// Gather the rows and targets selected by `indices` into scratch buffers.
///
/// `x` is flattened row-major with `features` columns; `cx` receives the
/// selected rows in index order, `cy` the matching targets. Both buffers
/// are cleared first.
pub fn gather_rows<T: Float>(
    x: &[T],
    y: &[T],
    features: usize,
    indices: &[usize],
    cx: &mut Vec<T>,
    cy: &mut Vec<T>,
) {
    cx.clear();
    cy.clear();
    for &i in indices {
        cx.extend_from_slice(&x[i * features..(i + 1) * features]);
        cy.push(y[i]);
    }
}
