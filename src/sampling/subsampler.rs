//! Repeated randomized subsampling around the external MI estimator.
//!
//! ## Purpose
//!
//! This module produces, for one neighbor count and a full split schedule,
//! one vector of per-chunk MI estimates per split level: the raw material
//! for the mean and pooled-variance aggregation.
//!
//! ## Design notes
//!
//! * **Fresh permutations**: every split level draws its own permutation;
//!   none is reused across levels or neighbor counts.
//! * **Per-feature averaging**: the estimator returns one value per
//!   feature (nats); chunks carry their feature-averaged scalar.
//! * **Bits**: every chunk value is converted from nats to bits by
//!   dividing by ln 2.
//! * **Scratch reuse**: one pair of chunk buffers serves all chunks of all
//!   levels.
//!
//! ## Key concepts
//!
//! * **Undersized chunk**: `chunk_len <= k` cannot support the k-NN query;
//!   the configured [`UndersizedChunkPolicy`] decides between a zero
//!   placeholder and exclusion.
//!
//! ## Invariants
//!
//! * The output holds exactly one [`LevelSamples`] per schedule entry, in
//!   schedule order.
//! * Under `ZeroFill` each vector has exactly `splits` entries.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `engine`) and does
//!   not aggregate the vectors (handled by `math::pooling`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::estimator::ContinuousMiEstimator;
use crate::math::moments;
use crate::primitives::errors::MiError;
use crate::primitives::samples::{LevelSamples, UndersizedChunkPolicy};
use crate::sampling::partition::{gather_rows, permutation, split_bounds};

// ============================================================================
// Subsampler
// ============================================================================

/// Run one neighbor count through the whole split schedule.
///
/// For each split count `s`: shuffle the row indices, cut them into `s`
/// near-equal contiguous chunks, estimate MI on every chunk that has more
/// than `neighbors` rows, and collect the feature-averaged values in bits.
///
/// The caller is responsible for input validation; `x` must be flattened
/// row-major with `features` columns and `x.len() == y.len() * features`.
#[allow(clippy::too_many_arguments)]
pub fn subsample_levels<T, E, R>(
    x: &[T],
    y: &[T],
    features: usize,
    neighbors: usize,
    schedule: &[usize],
    policy: UndersizedChunkPolicy,
    estimator: &E,
    rng: &mut R,
) -> Result<Vec<LevelSamples<T>>, MiError>
where
    T: Float,
    E: ContinuousMiEstimator<T>,
    R: Rng + ?Sized,
{
    let n = y.len();
    let ln_2 = T::from(core::f64::consts::LN_2).unwrap();

    let mut levels = Vec::with_capacity(schedule.len());
    let mut chunk_x: Vec<T> = Vec::with_capacity(x.len());
    let mut chunk_y: Vec<T> = Vec::with_capacity(n);

    for &splits in schedule {
        let perm = permutation(n, rng);
        let bounds = split_bounds(n, splits);
        let mut values = Vec::with_capacity(splits);

        for range in bounds.windows(2) {
            let indices = &perm[range[0]..range[1]];

            // A k-NN query needs strictly more rows than neighbors.
            if indices.len() <= neighbors {
                match policy {
                    UndersizedChunkPolicy::ZeroFill => values.push(T::zero()),
                    UndersizedChunkPolicy::Exclude => {}
                }
                continue;
            }

            gather_rows(x, y, features, indices, &mut chunk_x, &mut chunk_y);

            let per_feature =
                estimator.continuous_mi(&chunk_x, &chunk_y, features, neighbors)?;
            if per_feature.len() != features {
                return Err(MiError::EstimatorContract {
                    expected: features,
                    got: per_feature.len(),
                });
            }

            values.push(moments::mean(&per_feature) / ln_2);
        }

        levels.push(LevelSamples { splits, values });
    }

    Ok(levels)
}
