//! # miest — Bias-aware k-NN Mutual Information Estimation for Rust
//!
//! Estimates the mutual information (MI) between each of several continuous
//! input features and a continuous target, together with a standard-error
//! estimate, using repeated randomized subsampling around a Kraskov-type
//! k-nearest-neighbor MI estimator.
//!
//! ## What does it do?
//!
//! Plain k-NN MI estimates carry a sample-size-dependent bias and give no
//! uncertainty. This crate probes both by re-estimating MI on randomized
//! partitions of the data at several granularities:
//!
//! 1. For each partition count `s` in a *split schedule* (conventionally
//!    starting at 1, the full dataset), shuffle the samples and cut them
//!    into `s` near-equal contiguous chunks.
//! 2. Estimate MI on every chunk via an external k-NN estimator, average
//!    the per-feature values, and convert to bits.
//! 3. Report the mean of all chunk estimates as the point estimate, and a
//!    pooled, degrees-of-freedom-weighted standard deviation across
//!    partition levels as the standard error (a jackknife-style scheme in
//!    the spirit of Holmes & Nemenman, 2019).
//!
//! The k-NN MI computation itself is **not** implemented here. It is a
//! collaborator supplied by the caller through the
//! [`ContinuousMiEstimator`](estimator::ContinuousMiEstimator) trait; this
//! crate orchestrates the subsampling and the statistical aggregation.
//!
//! ## Quick Start
//!
//! ```rust
//! use miest_rs::prelude::*;
//!
//! // A stand-in collaborator: any real k-NN MI estimator works here.
//! // It receives one flattened row-major chunk plus its targets and must
//! // return one MI value per feature, in natural-log units (nats).
//! let estimator = |_x: &[f64], _y: &[f64], features: usize, _k: usize| -> Result<Vec<f64>, MiError> {
//!     Ok(vec![0.5; features])
//! };
//!
//! let x: Vec<f64> = (0..200).map(|i| (i as f64) * 0.01).collect();
//! let y: Vec<f64> = (0..100).map(|i| (i as f64) * 0.02).collect();
//!
//! let model = MutualInfo::new()
//!     .neighbor_counts(&[3, 5])
//!     .split_schedule(&[1, 2, 4])
//!     .features(2)
//!     .seed(42)
//!     .estimator(estimator)
//!     .build()?;
//!
//! let result = model.estimate(&x, &y)?;
//!
//! // One mean and one standard error per requested neighbor count.
//! assert_eq!(result.means.len(), 2);
//! assert_eq!(result.errors.len(), 2);
//! println!("{}", result);
//! # Result::<(), MiError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults; only the estimator is
//! mandatory.
//!
//! | Parameter            | Default     | Range            | Description                                          |
//! |----------------------|-------------|------------------|------------------------------------------------------|
//! | **neighbor_counts**  | `[3]`       | positive ints    | Candidate k values for the k-NN estimator            |
//! | **split_schedule**   | `[1, 2, 4]` | positive ints    | Partition counts per subsampling round               |
//! | **features**         | 1           | [1, ∞)           | Number of feature columns in the flattened x slice   |
//! | **seed**             | entropy     | any `u64`        | Seed for reproducible permutations                   |
//! | **undersized_chunks**| `ZeroFill`  | 2 policies       | Handling of chunks too small for the k-NN query      |
//!
//! > **Note:** the first split-schedule entry is conventionally 1 (no
//! > subsampling). The schedule must contain at least one later entry with
//! > two or more partitions, otherwise there is no within-level variance
//! > signal and [`MiError::DegenerateSchedule`](prelude::MiError) is raised.
//!
//! ## Data layout
//!
//! Feature rows are passed as a single flattened row-major slice:
//! `x.len() == y.len() * features`, with row `i` occupying
//! `x[i * features .. (i + 1) * features]`. The dataset is borrowed
//! read-only for the duration of a call; all chunk buffers are transient.
//!
//! ## Undersized chunks
//!
//! A chunk with no more rows than `k` cannot support a k-NN query of that
//! neighborhood size. Two policies are available:
//!
//! - `ZeroFill` (default): record a zero for the chunk, keeping the
//!   per-level vector at exactly `s` entries. This biases the mean and the
//!   pooled variance toward zero when `k` is large relative to the
//!   smallest chunk — a documented property of the method.
//! - `Exclude`: drop the chunk from the per-level vector and from every
//!   downstream denominator.
//!
//! ## Randomness
//!
//! Permutations are drawn from a `Xoshiro256PlusPlus` generator. Provide a
//! seed via [`seed`](api::MiBuilder::seed) for reproducible runs, inject
//! your own generator through
//! [`estimate_with_rng`](api::MiModel::estimate_with_rng), or let `std`
//! builds seed from OS entropy. Without `std`, a seed is required.
//!
//! ## Result and Error Handling
//!
//! [`estimate`](api::MiModel::estimate) returns
//! `Result<MiResult<T>, MiError>`:
//!
//! ```rust
//! use miest_rs::prelude::*;
//! # let estimator = |_x: &[f64], _y: &[f64], f: usize, _k: usize| -> Result<Vec<f64>, MiError> { Ok(vec![0.1; f]) };
//! # let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
//! # let y = x.clone();
//!
//! let model = MutualInfo::new().seed(7).estimator(estimator).build()?;
//!
//! match model.estimate(&x, &y) {
//!     Ok(result) => println!("MI at k=3: {:.4} bits", result.means[&3]),
//!     Err(e) => eprintln!("estimation failed: {}", e),
//! }
//! # Result::<(), MiError>::Ok(())
//! ```
//!
//! Structurally invalid inputs (mismatched lengths, non-finite values,
//! empty neighbor lists, zero split counts) fail fast before any
//! computation; there is no partial-success mode.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments:
//!
//! ```toml
//! [dependencies]
//! miest_rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` there is no entropy source, so an explicit `.seed(...)`
//! is required; calling `estimate` without one returns
//! `MiError::MissingSeed`.
//!
//! ## References
//!
//! - Kraskov, A., Stögbauer, H. & Grassberger, P. (2004). "Estimating
//!   mutual information"
//! - Holmes, C. M. & Nemenman, I. (2019). "Estimation of mutual
//!   information for real-valued data with error bars and controlled bias"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the crate error enum (`MiError`), the per-level sample
// container (`LevelSamples`), and the undersized-chunk policy.
mod primitives;

// Layer 2: Math - pure statistical functions.
//
// Contains mean/variance helpers and the degrees-of-freedom-weighted
// pooled-variance combination across partition levels.
mod math;

// Layer 3: Sampling - randomized partitioning and chunk extraction.
//
// Contains permutation drawing, split-boundary computation, row
// gathering, and the per-(k, split) subsampler.
mod sampling;

// Layer 4: Estimator seam - the external collaborator interface.
//
// Contains the `ContinuousMiEstimator` trait the caller implements with a
// real k-NN MI estimator, plus a closure blanket impl for mocks.
mod estimator;

// Layer 5: Engine - validation, orchestration, and result assembly.
//
// Contains input validation, the per-neighbor-count run loop, and the
// `MiResult` output type.
mod engine;

// High-level fluent API.
//
// Provides the `MutualInfo` builder for configuring and running the
// estimation.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use miest_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        MiBuilder as MutualInfo, MiError, MiModel, MiModelBuilder, MiResult,
        UndersizedChunkPolicy,
        UndersizedChunkPolicy::{Exclude, ZeroFill},
    };
    pub use crate::estimator::ContinuousMiEstimator;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal statistical functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal sampling machinery.
    pub mod sampling {
        pub use crate::sampling::*;
    }
    /// Internal estimator seam.
    pub mod estimator {
        pub use crate::estimator::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
