#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use miest_rs::internals::math::moments::{mean, variance};

// ============================================================================
// Mean
// ============================================================================

/// Test the mean of a simple slice.
#[test]
fn test_mean_simple() {
    let vals = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(mean(&vals), 2.5);
}

/// Test that the mean of an empty slice is zero.
#[test]
fn test_mean_empty() {
    let vals: [f64; 0] = [];
    assert_eq!(mean(&vals), 0.0);
}

/// Test the mean of a single element.
#[test]
fn test_mean_single() {
    assert_relative_eq!(mean(&[7.5]), 7.5);
}

/// Test the mean with negative values.
#[test]
fn test_mean_negative() {
    let vals = [-2.0, -1.0, 1.0, 2.0];
    assert_relative_eq!(mean(&vals), 0.0);
}

/// Test the mean with f32 values.
#[test]
fn test_mean_f32() {
    let vals: [f32; 3] = [1.0, 2.0, 6.0];
    assert_relative_eq!(mean(&vals), 3.0f32);
}

// ============================================================================
// Variance
// ============================================================================

/// Test the population variance (ddof = 0).
#[test]
fn test_variance_population() {
    // mean = 3, squared deviations = [4, 0, 4], var = 8/3
    let vals = [1.0, 3.0, 5.0];
    assert_relative_eq!(variance(&vals, 0), 8.0 / 3.0);
}

/// Test the Bessel-corrected sample variance (ddof = 1).
#[test]
fn test_variance_sample() {
    let vals = [1.0, 3.0, 5.0];
    assert_relative_eq!(variance(&vals, 1), 4.0);
}

/// Test that a constant slice has zero variance.
#[test]
fn test_variance_constant() {
    let vals = [2.5; 6];
    assert_eq!(variance(&vals, 0), 0.0);
    assert_eq!(variance(&vals, 1), 0.0);
}

/// Test that an empty slice yields zero rather than NaN.
#[test]
fn test_variance_empty() {
    let vals: [f64; 0] = [];
    assert_eq!(variance(&vals, 0), 0.0);
    assert_eq!(variance(&vals, 1), 0.0);
}

/// Test that `n <= ddof` yields zero rather than dividing by zero.
#[test]
fn test_variance_insufficient_length() {
    assert_eq!(variance(&[4.0], 1), 0.0);
    assert_eq!(variance(&[4.0, 5.0], 2), 0.0);
}

/// Test that the variance is non-negative for arbitrary finite data.
#[test]
fn test_variance_non_negative() {
    let vals = [0.3, -1.7, 2.9, 0.0, -0.4, 1.1];
    assert!(variance(&vals, 0) >= 0.0);
    assert!(variance(&vals, 1) >= 0.0);
}
