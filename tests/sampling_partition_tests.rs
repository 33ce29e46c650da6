#![cfg(feature = "dev")]

use miest_rs::internals::sampling::partition::{gather_rows, permutation, split_bounds};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

// ============================================================================
// Permutation
// ============================================================================

/// Test that a permutation contains each index exactly once.
#[test]
fn test_permutation_is_valid() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let perm = permutation(50, &mut rng);

    assert_eq!(perm.len(), 50);
    let mut sorted = perm.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<usize>>());
}

/// Test that the same generator state yields the same permutation.
#[test]
fn test_permutation_deterministic() {
    let mut a = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut b = Xoshiro256PlusPlus::seed_from_u64(42);
    assert_eq!(permutation(30, &mut a), permutation(30, &mut b));
}

/// Test that different seeds yield different permutations.
#[test]
fn test_permutation_seed_sensitivity() {
    let mut a = Xoshiro256PlusPlus::seed_from_u64(1);
    let mut b = Xoshiro256PlusPlus::seed_from_u64(2);
    assert_ne!(permutation(30, &mut a), permutation(30, &mut b));
}

/// Test the degenerate sizes.
#[test]
fn test_permutation_small() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    assert!(permutation(0, &mut rng).is_empty());
    assert_eq!(permutation(1, &mut rng), vec![0]);
}

// ============================================================================
// Split Boundaries
// ============================================================================

/// Test a hand-computed boundary vector.
#[test]
fn test_split_bounds_example() {
    assert_eq!(split_bounds(10, 3), vec![0, 3, 6, 10]);
    assert_eq!(split_bounds(10, 1), vec![0, 10]);
    assert_eq!(split_bounds(7, 4), vec![0, 1, 3, 5, 7]);
}

/// Test that boundaries exactly cover `0..n` with near-equal chunks.
#[test]
fn test_split_bounds_coverage_and_balance() {
    for n in [7usize, 10, 100] {
        for splits in 1..=5usize {
            let bounds = split_bounds(n, splits);

            assert_eq!(bounds.len(), splits + 1);
            assert_eq!(bounds[0], 0);
            assert_eq!(bounds[splits], n);

            let sizes: Vec<usize> =
                bounds.windows(2).map(|w| w[1] - w[0]).collect();
            assert_eq!(sizes.iter().sum::<usize>(), n);

            let min = sizes.iter().min().unwrap();
            let max = sizes.iter().max().unwrap();
            assert!(max - min <= 1, "n={} splits={} sizes={:?}", n, splits, sizes);
        }
    }
}

/// Test more splits than samples: empty chunks are allowed here.
#[test]
fn test_split_bounds_more_splits_than_samples() {
    let bounds = split_bounds(2, 4);
    assert_eq!(bounds, vec![0, 0, 1, 1, 2]);
}

// ============================================================================
// Row Gathering
// ============================================================================

/// Test gathering rows through permuted indices.
#[test]
fn test_gather_rows_selects_rows() {
    // 4 rows of 2 features
    let x = [10.0, 11.0, 20.0, 21.0, 30.0, 31.0, 40.0, 41.0];
    let y = [1.0, 2.0, 3.0, 4.0];

    let mut cx = Vec::new();
    let mut cy = Vec::new();
    gather_rows(&x, &y, 2, &[2, 0], &mut cx, &mut cy);

    assert_eq!(cx, vec![30.0, 31.0, 10.0, 11.0]);
    assert_eq!(cy, vec![3.0, 1.0]);
}

/// Test that scratch buffers are cleared between calls.
#[test]
fn test_gather_rows_reuses_buffers() {
    let x = [1.0, 2.0, 3.0];
    let y = [10.0, 20.0, 30.0];

    let mut cx = Vec::new();
    let mut cy = Vec::new();
    gather_rows(&x, &y, 1, &[0, 1, 2], &mut cx, &mut cy);
    gather_rows(&x, &y, 1, &[1], &mut cx, &mut cy);

    assert_eq!(cx, vec![2.0]);
    assert_eq!(cy, vec![20.0]);
}
