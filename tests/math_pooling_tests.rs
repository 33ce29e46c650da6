#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use miest_rs::internals::math::pooling::{overall_mean, pooled_std_error, pooled_variance};
use miest_rs::internals::primitives::errors::MiError;
use miest_rs::internals::primitives::samples::LevelSamples;

fn level(splits: usize, values: &[f64]) -> LevelSamples<f64> {
    LevelSamples {
        splits,
        values: values.to_vec(),
    }
}

// ============================================================================
// Overall Mean
// ============================================================================

/// Test that the overall mean flattens every level, first included.
#[test]
fn test_overall_mean_includes_first_level() {
    let levels = [level(1, &[6.0]), level(2, &[1.0, 2.0]), level(3, &[3.0, 4.0, 5.0])];
    // (6 + 1 + 2 + 3 + 4 + 5) / 6 = 3.5
    assert_relative_eq!(overall_mean(&levels), 3.5);
}

/// Test that the overall mean weights by chunk count, not by level.
#[test]
fn test_overall_mean_weights_by_chunk() {
    let levels = [level(1, &[0.0]), level(4, &[8.0, 8.0, 8.0, 8.0])];
    // The four-chunk level dominates: 32 / 5
    assert_relative_eq!(overall_mean(&levels), 6.4);
}

/// Test that the overall mean of no retained chunks is zero.
#[test]
fn test_overall_mean_no_values() {
    let levels = [level(1, &[]), level(2, &[])];
    assert_eq!(overall_mean(&levels), 0.0);
    assert_eq!(overall_mean::<f64>(&[]), 0.0);
}

// ============================================================================
// Pooled Variance
// ============================================================================

/// Test the pooled-variance formula on hand-computed groups.
#[test]
fn test_pooled_variance_formula() {
    let levels = [
        level(1, &[100.0]),
        level(2, &[1.0, 3.0]),
        level(4, &[2.0, 4.0, 6.0, 8.0]),
    ];
    // Group 1: m=2, var=2       -> weight (1/2)*2       = 1, dof 1
    // Group 2: m=4, var=20/3    -> weight (3/4)*(20/3)  = 5, dof 3
    // pooled = (1 + 5) / 4 = 1.5
    let var = pooled_variance(&levels).unwrap();
    assert_relative_eq!(var, 1.5);

    let se = pooled_std_error(&levels).unwrap();
    assert_relative_eq!(se, 1.5f64.sqrt());
}

/// Test that the first level never contributes to the variance.
#[test]
fn test_pooled_variance_excludes_first_level() {
    let spread = [level(1, &[-1000.0, 1000.0]), level(2, &[1.0, 3.0])];
    let tight = [level(1, &[0.0, 0.0]), level(2, &[1.0, 3.0])];
    assert_relative_eq!(
        pooled_variance(&spread).unwrap(),
        pooled_variance(&tight).unwrap()
    );
}

/// Test that single-chunk levels beyond the first carry zero weight.
#[test]
fn test_pooled_variance_single_chunk_level() {
    let with = [
        level(1, &[0.0]),
        level(1, &[42.0]),
        level(2, &[1.0, 3.0]),
    ];
    let without = [level(1, &[0.0]), level(2, &[1.0, 3.0])];
    assert_relative_eq!(
        pooled_variance(&with).unwrap(),
        pooled_variance(&without).unwrap()
    );
}

/// Test that levels with more chunks receive more degrees of freedom.
#[test]
fn test_pooled_variance_dof_weighting() {
    // Same per-group variance, but the larger group pulls the pooled
    // value toward its own weight (m-1)/m.
    let small_heavy = [
        level(1, &[0.0]),
        level(2, &[0.0, 2.0]),
        level(8, &[0.0; 8]),
    ];
    // Group 1: var=2, weight 1, dof 1. Group 2: var=0, dof 7.
    // pooled = 1 / 8
    assert_relative_eq!(pooled_variance(&small_heavy).unwrap(), 0.125);
}

/// Test that constant chunk values pool to exactly zero.
#[test]
fn test_pooled_variance_constant() {
    let levels = [level(1, &[1.0]), level(2, &[1.0, 1.0]), level(4, &[1.0; 4])];
    assert_eq!(pooled_variance(&levels).unwrap(), 0.0);
    assert_eq!(pooled_std_error(&levels).unwrap(), 0.0);
}

/// Test that zero pooled degrees of freedom is an error, not NaN.
#[test]
fn test_pooled_variance_degenerate() {
    // Only the first level has chunks.
    let first_only = [level(4, &[1.0, 2.0, 3.0, 4.0])];
    assert_eq!(
        pooled_variance(&first_only),
        Err(MiError::DegenerateSchedule)
    );

    // Later levels exist but are single-chunk or empty.
    let no_signal = [level(1, &[1.0]), level(1, &[2.0]), level(2, &[])];
    assert_eq!(pooled_variance(&no_signal), Err(MiError::DegenerateSchedule));

    assert_eq!(pooled_variance::<f64>(&[]), Err(MiError::DegenerateSchedule));
}
