//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure statistical functions of the crate:
//! - Mean and `ddof`-parameterized variance
//! - Degrees-of-freedom-weighted pooled variance across split levels
//!
//! These are reusable building blocks with no sampling or orchestration
//! logic.

/// Mean and variance helpers.
pub mod moments;

/// Pooled-variance combination across split levels.
pub mod pooling;
