//! High-level API for mutual information estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the estimation parameters, a typed
//! conversion step that binds the external k-NN MI estimator, and the
//! model type that runs the estimation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; only the estimator is mandatory.
//! * **Validated**: Configuration is validated during `build()`, data
//!   during `estimate()`.
//! * **Type-Safe**: The model is generic over the `Float` type and the
//!   estimator, so the collaborator is statically dispatched.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MiBuilder`] via `MutualInfo::new()`.
//! 2. Chain configuration methods (`.neighbor_counts()`, `.seed()`, …).
//! 3. Bind the collaborator via `.estimator(...)`.
//! 4. Call `.build()` to obtain a validated [`MiModel`].
//! 5. Call `.estimate(&x, &y)` (or `.estimate_with_rng`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::marker::PhantomData;

// External dependencies
use num_traits::Float;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

// Internal dependencies
use crate::engine::executor::{self, EstimationPlan};
use crate::engine::validator::Validator;
use crate::estimator::ContinuousMiEstimator;

// Publicly re-exported types
pub use crate::engine::output::MiResult;
pub use crate::primitives::errors::MiError;
pub use crate::primitives::samples::UndersizedChunkPolicy;

// ============================================================================
// MiBuilder
// ============================================================================

/// Fluent builder for configuring mutual information estimation.
#[derive(Debug, Clone, Default)]
pub struct MiBuilder {
    /// Candidate k values for the k-NN estimator (default: `[3]`).
    pub neighbor_counts: Option<Vec<usize>>,

    /// Partition counts per subsampling round (default: `[1, 2, 4]`).
    pub split_schedule: Option<Vec<usize>>,

    /// Number of feature columns in the flattened x slice (default: 1).
    pub features: Option<usize>,

    /// Seed for reproducible permutations (default: OS entropy on `std`).
    pub seed: Option<u64>,

    /// Handling of chunks too small for the k-NN query
    /// (default: `ZeroFill`).
    pub undersized_chunks: Option<UndersizedChunkPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MiBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate neighbor counts for the k-NN estimator.
    pub fn neighbor_counts(mut self, neighbor_counts: &[usize]) -> Self {
        if self.neighbor_counts.is_some() {
            self.duplicate_param = Some("neighbor_counts");
        }
        self.neighbor_counts = Some(neighbor_counts.to_vec());
        self
    }

    /// Set the split schedule (partition counts per subsampling round).
    ///
    /// The first entry is conventionally 1 (no subsampling); at least one
    /// later entry must be 2 or greater.
    pub fn split_schedule(mut self, split_schedule: &[usize]) -> Self {
        if self.split_schedule.is_some() {
            self.duplicate_param = Some("split_schedule");
        }
        self.split_schedule = Some(split_schedule.to_vec());
        self
    }

    /// Set the number of feature columns in the flattened x slice.
    pub fn features(mut self, features: usize) -> Self {
        if self.features.is_some() {
            self.duplicate_param = Some("features");
        }
        self.features = Some(features);
        self
    }

    /// Set the random seed for reproducible permutations.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the handling of chunks too small for the k-NN query.
    pub fn undersized_chunks(mut self, policy: UndersizedChunkPolicy) -> Self {
        if self.undersized_chunks.is_some() {
            self.duplicate_param = Some("undersized_chunks");
        }
        self.undersized_chunks = Some(policy);
        self
    }

    /// Bind the external MI estimator, transitioning to a typed model
    /// builder.
    pub fn estimator<T, E>(self, estimator: E) -> MiModelBuilder<T, E>
    where
        T: Float,
        E: ContinuousMiEstimator<T>,
    {
        MiModelBuilder {
            neighbor_counts: self.neighbor_counts,
            split_schedule: self.split_schedule,
            features: self.features,
            seed: self.seed,
            undersized_chunks: self.undersized_chunks,
            duplicate_param: self.duplicate_param,
            estimator,
            _marker: PhantomData,
        }
    }
}

// ============================================================================
// MiModelBuilder
// ============================================================================

/// Builder stage holding the bound estimator, ready for validation.
#[derive(Debug, Clone)]
pub struct MiModelBuilder<T, E> {
    neighbor_counts: Option<Vec<usize>>,
    split_schedule: Option<Vec<usize>>,
    features: Option<usize>,
    seed: Option<u64>,
    undersized_chunks: Option<UndersizedChunkPolicy>,
    duplicate_param: Option<&'static str>,
    estimator: E,
    _marker: PhantomData<T>,
}

impl<T, E> MiModelBuilder<T, E>
where
    T: Float,
    E: ContinuousMiEstimator<T>,
{
    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<MiModel<T, E>, MiError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let neighbor_counts = self.neighbor_counts.unwrap_or_else(|| vec![3]);
        let split_schedule = self.split_schedule.unwrap_or_else(|| vec![1, 2, 4]);
        let features = self.features.unwrap_or(1);

        Validator::validate_features(features)?;
        Validator::validate_neighbor_counts(&neighbor_counts)?;
        Validator::validate_split_schedule(&split_schedule)?;

        Ok(MiModel {
            neighbor_counts,
            split_schedule,
            features,
            seed: self.seed,
            undersized_chunks: self.undersized_chunks.unwrap_or_default(),
            estimator: self.estimator,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// MiModel
// ============================================================================

/// A validated, ready-to-run estimation model.
#[derive(Clone)]
pub struct MiModel<T, E> {
    neighbor_counts: Vec<usize>,
    split_schedule: Vec<usize>,
    features: usize,
    seed: Option<u64>,
    undersized_chunks: UndersizedChunkPolicy,
    estimator: E,
    _marker: PhantomData<T>,
}

impl<T, E> core::fmt::Debug for MiModel<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MiModel")
            .field("neighbor_counts", &self.neighbor_counts)
            .field("split_schedule", &self.split_schedule)
            .field("features", &self.features)
            .field("seed", &self.seed)
            .field("undersized_chunks", &self.undersized_chunks)
            .finish_non_exhaustive()
    }
}

impl<T, E> MiModel<T, E>
where
    T: Float,
    E: ContinuousMiEstimator<T>,
{
    /// Run the estimation, seeding from the configured seed or, on `std`,
    /// from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`MiError::MissingSeed`] when no seed was configured and
    /// the `std` feature is disabled.
    pub fn estimate(&self, x: &[T], y: &[T]) -> Result<MiResult<T>, MiError> {
        if let Some(seed) = self.seed {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            return self.estimate_with_rng(x, y, &mut rng);
        }

        #[cfg(feature = "std")]
        {
            let mut rng = Xoshiro256PlusPlus::from_entropy();
            self.estimate_with_rng(x, y, &mut rng)
        }
        #[cfg(not(feature = "std"))]
        {
            Err(MiError::MissingSeed)
        }
    }

    /// Run the estimation with an injected random number generator.
    ///
    /// Repeated calls with the same generator state and identical inputs
    /// produce identical outputs.
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        x: &[T],
        y: &[T],
        rng: &mut R,
    ) -> Result<MiResult<T>, MiError> {
        Validator::validate_inputs(x, y, self.features)?;

        let plan = EstimationPlan {
            neighbor_counts: &self.neighbor_counts,
            split_schedule: &self.split_schedule,
            features: self.features,
            undersized_chunks: self.undersized_chunks,
        };

        executor::run(x, y, &plan, &self.estimator, rng)
    }
}
