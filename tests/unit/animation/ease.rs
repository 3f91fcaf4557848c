use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn monotonic_on_unit_interval() {
    let mut prev = ease_out_cubic(0.0);
    for i in 1..=100 {
        let v = ease_out_cubic(f64::from(i) / 100.0);
        assert!(v >= prev, "ease_out_cubic decreased at step {i}");
        prev = v;
    }
}

#[test]
fn decelerates() {
    let first_half = ease_out_cubic(0.5) - ease_out_cubic(0.0);
    let second_half = ease_out_cubic(1.0) - ease_out_cubic(0.5);
    assert!(first_half > second_half);
}
