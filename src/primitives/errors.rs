//! Error types for mutual-information estimation.
//!
//! ## Purpose
//!
//! This module defines the single error enum surfaced by the crate. It
//! covers structural input validation, configuration problems detected at
//! build time, the degenerate-schedule condition found during variance
//! pooling, and failures reported by the external estimator.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Every variant corresponds to a condition detected
//!   before or during a single top-level call; there is no retry state.
//! * **no_std**: `Display` is hand-written against `core::fmt`;
//!   `std::error::Error` is implemented behind the `std` feature.
//!
//! ## Invariants
//!
//! * No variant is produced after external state has been mutated; a
//!   failed call leaves nothing to roll back.
//!
//! ## Non-goals
//!
//! * This module does not classify transient conditions — all failures
//!   stem from invalid static inputs or a misbehaving collaborator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors that can occur during mutual-information estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiError {
    /// The feature matrix or the target vector is empty.
    EmptyInput,

    /// The flattened feature slice does not hold one row per target.
    MismatchedInputs {
        /// Length of the flattened feature slice.
        x_len: usize,
        /// Number of target values.
        y_len: usize,
        /// Declared number of feature columns.
        features: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input data.
    InvalidNumericValue(String),

    /// The neighbor-count list is empty.
    EmptyNeighborCounts,

    /// A neighbor count of zero was requested.
    InvalidNeighborCount(usize),

    /// The split schedule is empty.
    EmptySplitSchedule,

    /// A split count of zero was requested.
    InvalidSplitCount(usize),

    /// The declared feature count is zero.
    InvalidFeatureCount(usize),

    /// No split level beyond the first has at least two partitions, so the
    /// pooled-variance denominator is zero.
    DegenerateSchedule,

    /// The external estimator returned the wrong number of per-feature
    /// values.
    EstimatorContract {
        /// Expected number of values (one per feature).
        expected: usize,
        /// Number of values actually returned.
        got: usize,
    },

    /// The external estimator reported a failure of its own.
    EstimatorFailure(String),

    /// No seed was provided and no entropy source is available (`std`
    /// feature disabled).
    MissingSeed,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for MiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiError::EmptyInput => write!(f, "Input arrays are empty"),
            MiError::MismatchedInputs {
                x_len,
                y_len,
                features,
            } => write!(
                f,
                "Length mismatch: x has {} values, expected {} ({} samples x {} features)",
                x_len,
                y_len * features,
                y_len,
                features
            ),
            MiError::InvalidNumericValue(what) => {
                write!(f, "Invalid numeric value: {}", what)
            }
            MiError::EmptyNeighborCounts => write!(f, "Neighbor-count list is empty"),
            MiError::InvalidNeighborCount(k) => {
                write!(f, "Invalid neighbor count: {} (must be at least 1)", k)
            }
            MiError::EmptySplitSchedule => write!(f, "Split schedule is empty"),
            MiError::InvalidSplitCount(s) => {
                write!(f, "Invalid split count: {} (must be at least 1)", s)
            }
            MiError::InvalidFeatureCount(d) => {
                write!(f, "Invalid feature count: {} (must be at least 1)", d)
            }
            MiError::DegenerateSchedule => write!(
                f,
                "Degenerate split schedule: no level beyond the first has at least 2 partitions"
            ),
            MiError::EstimatorContract { expected, got } => write!(
                f,
                "Estimator returned {} values, expected one per feature ({})",
                got, expected
            ),
            MiError::EstimatorFailure(why) => {
                write!(f, "External estimator failed: {}", why)
            }
            MiError::MissingSeed => write!(
                f,
                "A seed is required when the `std` feature is disabled"
            ),
            MiError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MiError {}
