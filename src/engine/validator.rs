//! Input validation for estimation configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions guarding the public API.
//! It checks structural requirements (lengths, finite values) and
//! configuration bounds (positive neighbor counts and split counts, a
//! non-degenerate schedule).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered,
//!   before any computation begins.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Data validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the subsampling or aggregation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MiError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimation configuration and input data.
///
/// Provides static methods returning `Result<(), MiError>`, failing fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate the flattened feature slice and target vector.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        features: usize,
    ) -> Result<(), MiError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(MiError::EmptyInput);
        }

        // Check 2: One row of `features` values per target
        if x.len() != y.len() * features {
            return Err(MiError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
                features,
            });
        }

        // Check 3: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(MiError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(MiError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate the number of feature columns.
    pub fn validate_features(features: usize) -> Result<(), MiError> {
        if features == 0 {
            return Err(MiError::InvalidFeatureCount(features));
        }
        Ok(())
    }

    /// Validate the neighbor-count list.
    pub fn validate_neighbor_counts(neighbor_counts: &[usize]) -> Result<(), MiError> {
        if neighbor_counts.is_empty() {
            return Err(MiError::EmptyNeighborCounts);
        }
        for &k in neighbor_counts {
            if k == 0 {
                return Err(MiError::InvalidNeighborCount(k));
            }
        }
        Ok(())
    }

    /// Validate the split schedule.
    ///
    /// Beyond positivity, the schedule must contain at least one entry
    /// after the first with two or more partitions; the first level is
    /// excluded from variance pooling, so without such an entry the
    /// pooled-variance denominator would be zero.
    pub fn validate_split_schedule(schedule: &[usize]) -> Result<(), MiError> {
        if schedule.is_empty() {
            return Err(MiError::EmptySplitSchedule);
        }
        for &s in schedule {
            if s == 0 {
                return Err(MiError::InvalidSplitCount(s));
            }
        }
        if !schedule.iter().skip(1).any(|&s| s >= 2) {
            return Err(MiError::DegenerateSchedule);
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MiError> {
        if let Some(param) = duplicate_param {
            return Err(MiError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
