//! Pooled-variance aggregation across split levels.
//!
//! ## Purpose
//!
//! This module combines the per-level chunk estimates into the two scalars
//! reported per neighbor count: the overall mean and a pooled,
//! degrees-of-freedom-weighted standard error.
//!
//! ## Design notes
//!
//! * **Formula**: with group sizes `m_i` and per-group variances `var_i`,
//!
//!   ```text
//!   var_hat = sum_i [ (m_i - 1)/m_i * var_i ] / sum_i (m_i - 1)
//!   ```
//!
//!   an ANOVA-style pooled variance that discounts levels with few
//!   partitions relative to levels with many, normalized by the total
//!   pooled degrees of freedom.
//! * **First-level exclusion**: the first split level is excluded from the
//!   variance computation positionally — a single-chunk level has no
//!   within-level variance signal, and by convention the schedule starts
//!   with the full dataset as one chunk.
//! * **ddof fallback**: groups of size 1 fall back to population variance
//!   (`ddof = 0`); their pooling weight `(m - 1)/m` is zero anyway.
//!
//! ## Key concepts
//!
//! * **Degrees of freedom**: each group contributes `m_i - 1` to the
//!   denominator, so a level with more partitions weighs proportionally
//!   more.
//!
//! ## Invariants
//!
//! * `pooled_variance >= 0` whenever it is defined.
//! * A zero pooled-degrees-of-freedom denominator is surfaced as
//!   [`MiError::DegenerateSchedule`], never returned as NaN.
//!
//! ## Non-goals
//!
//! * This module does not generate the per-level vectors (see `sampling`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments;
use crate::primitives::errors::MiError;
use crate::primitives::samples::LevelSamples;

// ============================================================================
// Overall Mean
// ============================================================================

/// Mean of every chunk estimate across every level, first level included.
///
/// This is the point estimate for one neighbor count. Returns zero when no
/// chunk estimate was retained at all.
pub fn overall_mean<T: Float>(levels: &[LevelSamples<T>]) -> T {
    let count = levels.iter().map(|l| l.values.len()).sum::<usize>();
    if count == 0 {
        return T::zero();
    }

    let sum = levels
        .iter()
        .flat_map(|l| l.values.iter().copied())
        .fold(T::zero(), |a, b| a + b);

    sum / T::from(count).unwrap()
}

// ============================================================================
// Pooled Variance
// ============================================================================

/// Pool the within-level variances, weighted by degrees of freedom.
///
/// The first level is excluded. Group sizes are taken from the retained
/// vectors, so excluded undersized chunks shrink the denominators they no
/// longer belong to.
pub fn pooled_variance<T: Float>(levels: &[LevelSamples<T>]) -> Result<T, MiError> {
    let mut weighted = T::zero();
    let mut dof = 0usize;

    for level in levels.iter().skip(1) {
        let m = level.values.len();
        if m == 0 {
            continue;
        }

        let ddof = if m > 1 { 1 } else { 0 };
        let var = moments::variance(&level.values, ddof);

        let m_t = T::from(m).unwrap();
        weighted = weighted + (m_t - T::one()) / m_t * var;
        dof += m - 1;
    }

    if dof == 0 {
        return Err(MiError::DegenerateSchedule);
    }

    Ok(weighted / T::from(dof).unwrap())
}

/// Square root of the pooled variance: the standard-error estimate.
pub fn pooled_std_error<T: Float>(levels: &[LevelSamples<T>]) -> Result<T, MiError> {
    pooled_variance(levels).map(Float::sqrt)
}
