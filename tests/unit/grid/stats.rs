use super::*;

fn grid(cols: Vec<Vec<u32>>) -> ActivityGrid {
    ActivityGrid::from_counts(cols).unwrap()
}

#[test]
fn empty_and_all_zero_grids_are_degenerate() {
    assert_eq!(
        NormalizationBounds::compute(&ActivityGrid::default()),
        NormalizationBounds::DEGENERATE
    );
    assert_eq!(
        NormalizationBounds::compute(&grid(vec![vec![0; 7]; 3])),
        NormalizationBounds::DEGENERATE
    );
}

#[test]
fn two_values_clamp_high_above_low() {
    let b = NormalizationBounds::compute(&grid(vec![vec![0, 0, 5, 0, 0, 0, 12]]));
    assert_eq!(b.low, 5.0);
    assert_eq!(b.high, 6.0);
    assert_eq!(b.max, 12.0);
}

#[test]
fn percentiles_use_index_ranks() {
    // 1..=21 -> n = 21, low rank floor(0.1 * 20) = 2, high rank floor(0.95 * 20) = 19.
    let vals: Vec<u32> = (1..=21).rev().collect();
    let b = NormalizationBounds::compute(&grid(vec![vals]));
    assert_eq!(b.low, 3.0);
    assert_eq!(b.high, 20.0);
    assert_eq!(b.max, 21.0);
}

#[test]
fn outlier_does_not_move_high_bound() {
    let mut vals = vec![4u32; 30];
    vals.push(500);
    let b = NormalizationBounds::compute(&grid(vec![vals]));
    assert_eq!(b.high, 5.0);
    assert_eq!(b.max, 500.0);
}

#[test]
fn zero_count_has_zero_height_for_any_bounds() {
    for (lo, hi) in [(0.0, 1.0), (5.0, 6.0), (100.0, 3.0)] {
        assert_eq!(height_from_count(0, lo, hi), 0.0);
    }
}

#[test]
fn height_is_monotonic_within_bounds() {
    let (lo, hi) = (3.0, 20.0);
    let mut prev = height_from_count(3, lo, hi);
    for c in 4..=20 {
        let h = height_from_count(c, lo, hi);
        assert!(h >= prev);
        prev = h;
    }
    assert_eq!(height_from_count(3, lo, hi), MIN_TREE_HEIGHT_PX);
    assert_eq!(height_from_count(20, lo, hi), MAX_TREE_HEIGHT_PX);
    assert_eq!(height_from_count(900, lo, hi), MAX_TREE_HEIGHT_PX);
}

#[test]
fn bounds_height_matches_free_function() {
    let b = NormalizationBounds {
        low: 5.0,
        high: 6.0,
        max: 12.0,
    };
    assert_eq!(b.height_for(5), 28.0);
    assert_eq!(b.height_for(12), 128.0);
}
