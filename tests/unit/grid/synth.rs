use super::*;

#[test]
fn same_seed_same_grid() {
    let a = synthetic_grid(42, 53, 7).unwrap();
    let b = synthetic_grid(42, 53, 7).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.columns(), 53);
    assert_eq!(a.rows(), 7);
}

#[test]
fn different_seeds_diverge() {
    let a = synthetic_grid(1, 53, 7).unwrap();
    let b = synthetic_grid(2, 53, 7).unwrap();
    assert_ne!(a, b);
}

#[test]
fn produces_some_activity_within_expected_range() {
    let g = synthetic_grid(42, 53, 7).unwrap();
    assert!(g.active_cells() > 0);
    assert!(g.cells().all(|c| c.count <= 21 + 18 + 22));
}

#[test]
fn rejects_empty_shape() {
    assert!(synthetic_grid(0, 0, 7).is_err());
    assert!(synthetic_grid(0, 53, 0).is_err());
}
