use super::*;

#[test]
fn anchor_is_bottom_center_of_cell() {
    let l = GridLayout::default();
    let p = l.anchor(0, 0);
    assert_eq!(p.x, 98.0);
    assert!((p.y - (250.0 + 16.0 * 0.92)).abs() < 1e-9);

    let q = l.anchor(2, 6);
    assert_eq!(q.x, 90.0 + 32.0 + 8.0);
    assert!((q.y - (250.0 + 96.0 + 16.0 * 0.92)).abs() < 1e-9);
}

#[test]
fn bounds_cover_all_cells() {
    let r = GridLayout::default().bounds(53, 7);
    assert_eq!(r.x0, 90.0);
    assert_eq!(r.y0, 250.0);
    assert_eq!(r.x1, 90.0 + 53.0 * 16.0);
    assert_eq!(r.y1, 250.0 + 7.0 * 16.0);
}
