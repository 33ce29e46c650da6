//! Per-neighbor-count orchestration.
//!
//! ## Purpose
//!
//! This module runs the full pipeline for every requested neighbor count:
//! subsample across the whole split schedule, take the overall mean, pool
//! the within-level variances into a standard error, and file both under
//! the neighbor count.
//!
//! ## Design notes
//!
//! * **Independence**: neighbor counts share nothing — no permutation, no
//!   intermediate state — so a caller could parallelize over them without
//!   synchronization.
//! * **Transience**: all per-level vectors are dropped before the next
//!   neighbor count begins.
//!
//! ## Invariants
//!
//! * The output mappings hold exactly one entry per requested neighbor
//!   count.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (the API layer runs `Validator`
//!   first).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::engine::output::MiResult;
use crate::estimator::ContinuousMiEstimator;
use crate::math::pooling;
use crate::primitives::errors::MiError;
use crate::primitives::samples::UndersizedChunkPolicy;
use crate::sampling::subsampler;

// ============================================================================
// Estimation Plan
// ============================================================================

/// Borrowed view of one estimation run's configuration.
#[derive(Debug, Clone, Copy)]
pub struct EstimationPlan<'a> {
    /// Candidate k values for the k-NN estimator.
    pub neighbor_counts: &'a [usize],

    /// Partition counts per subsampling round.
    pub split_schedule: &'a [usize],

    /// Number of feature columns in the flattened x slice.
    pub features: usize,

    /// Handling of chunks too small for the k-NN query.
    pub undersized_chunks: UndersizedChunkPolicy,
}

// ============================================================================
// Run Loop
// ============================================================================

/// Execute the plan against validated data.
pub fn run<T, E, R>(
    x: &[T],
    y: &[T],
    plan: &EstimationPlan<'_>,
    estimator: &E,
    rng: &mut R,
) -> Result<MiResult<T>, MiError>
where
    T: Float,
    E: ContinuousMiEstimator<T>,
    R: Rng + ?Sized,
{
    let mut means = BTreeMap::new();
    let mut errors = BTreeMap::new();

    for &k in plan.neighbor_counts {
        let levels = subsampler::subsample_levels(
            x,
            y,
            plan.features,
            k,
            plan.split_schedule,
            plan.undersized_chunks,
            estimator,
            rng,
        )?;

        means.insert(k, pooling::overall_mean(&levels));
        errors.insert(k, pooling::pooled_std_error(&levels)?);
    }

    Ok(MiResult {
        means,
        errors,
        samples: y.len(),
    })
}
