//! Mean and variance helpers.
//!
//! ## Purpose
//!
//! This module provides the elementary moment computations used by the
//! aggregation step: the arithmetic mean and the sample variance with a
//! caller-chosen `ddof` (delta degrees of freedom).
//!
//! ## Design notes
//!
//! * **Two-pass variance**: mean first, then squared deviations; the
//!   per-level vectors are short, so numerical shortcuts buy nothing.
//! * **Guards**: empty input and `len <= ddof` return zero rather than
//!   dividing by zero; callers decide whether that case is an error.
//!
//! ## Invariants
//!
//! * `variance(v, ddof) >= 0` for any finite input.
//!
//! ## Non-goals
//!
//! * This module does not pool variances across groups (see `pooling`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Compute the arithmetic mean of a slice.
///
/// Returns zero for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let sum = vals.iter().copied().fold(T::zero(), |a, b| a + b);
    sum / T::from(vals.len()).unwrap()
}

/// Compute the variance of a slice with the given delta degrees of freedom.
///
/// # Formula
///
/// ```text
/// var = sum((v_i - mean)^2) / (n - ddof)
/// ```
///
/// `ddof = 1` gives the Bessel-corrected sample variance, `ddof = 0` the
/// population variance. Returns zero when `n <= ddof`.
#[inline]
pub fn variance<T: Float>(vals: &[T], ddof: usize) -> T {
    let n = vals.len();
    if n == 0 || n <= ddof {
        return T::zero();
    }

    let m = mean(vals);
    let ss = vals
        .iter()
        .map(|&v| (v - m) * (v - m))
        .fold(T::zero(), |a, b| a + b);

    ss / T::from(n - ddof).unwrap()
}
