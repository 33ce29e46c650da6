//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer owns validation, the per-neighbor-count run loop, and the
//! result type:
//! - `Validator`: fail-fast checks for data and configuration
//! - `executor`: subsample → mean → pooled standard error, per `k`
//! - `MiResult`: the two mappings returned to the caller

/// Fail-fast input and configuration validation.
pub mod validator;

/// Result assembly and display.
pub mod output;

/// Per-neighbor-count orchestration.
pub mod executor;
