use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
}

#[test]
fn clamp01_handles_out_of_range_and_nan() {
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(28.0, 128.0, 0.0), 28.0);
    assert_eq!(lerp(28.0, 128.0, 1.0), 128.0);
}
