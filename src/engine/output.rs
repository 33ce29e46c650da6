//! Estimation result type.
//!
//! ## Purpose
//!
//! This module defines [`MiResult`], the pair of mappings returned by a
//! successful estimation run, plus a human-readable `Display`
//! implementation.
//!
//! ## Invariants
//!
//! * `means` and `errors` hold identical key sets, equal to the requested
//!   neighbor counts.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only carries results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use core::fmt;
use num_traits::Float;

// ============================================================================
// MiResult
// ============================================================================

/// Per-neighbor-count mutual information estimates with error bars.
#[derive(Debug, Clone, PartialEq)]
pub struct MiResult<T> {
    /// Point estimate per neighbor count, in bits.
    pub means: BTreeMap<usize, T>,

    /// Pooled standard-error estimate per neighbor count, in bits.
    pub errors: BTreeMap<usize, T>,

    /// Number of samples the estimation ran on.
    pub samples: usize,
}

impl<T: Float + fmt::Display> fmt::Display for MiResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.samples)?;
        writeln!(f, "  Neighbor counts: {}", self.means.len())?;
        writeln!(f)?;
        writeln!(f, "Mutual Information (bits):")?;
        writeln!(f, "  {:>6} {:>12} {:>12}", "k", "MI", "Std_Err")?;
        writeln!(f, "  --------------------------------")?;
        for (k, mi) in &self.means {
            let se = self.errors.get(k).copied().unwrap_or_else(T::nan);
            writeln!(f, "  {:>6} {:>12.6} {:>12.6}", k, mi, se)?;
        }
        Ok(())
    }
}
