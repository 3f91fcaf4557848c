use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn outermost_outline_is_zero_and_inner_outlines_grow_quadratically() {
    let params = VignetteParams::default();
    let c = canvas(200, 100);
    let mask = outline_mask(c, &params);

    // Step 0 sits on the border with alpha 0.
    assert_eq!(mask[0], 0);
    // Step 1: inset trunc(1 * 200 * 0.012) = 2, value trunc(255 / 676) = 0.
    // Step 3: inset trunc(3 * 2.4) = 7, value trunc(255 * 9 / 676) = 3.
    assert_eq!(mask[(7 * 200 + 100) as usize], 3);
    // Step 10: inset 24, value trunc(255 * 100 / 676) = 37.
    assert_eq!(mask[(24 * 200 + 100) as usize], 37);
}

#[test]
fn outline_loop_stops_before_inverting() {
    let params = VignetteParams::default();
    let c = canvas(20, 10);
    let mask = outline_mask(c, &params);
    // Inset per step is trunc(i * 0.24): it reaches 5 (h - 5 <= 5) at i = 21, so the deepest
    // drawn step is 20 with inset 4.
    let deepest = (255.0 * (20.0f64 / 26.0).powi(2)) as u8;
    assert_eq!(mask[(4 * 20 + 10) as usize], deepest);
    assert!(mask.iter().all(|&m| m <= deepest));
}

#[test]
fn blurred_mask_is_deeper_inside_than_at_edges() {
    let params = VignetteParams {
        blur_sigma: 2.0,
        ..VignetteParams::default()
    };
    let mask = vignette_mask(canvas(120, 80), &params).unwrap();
    assert_eq!(mask.len(), 120 * 80);
    assert!(mask[25 * 120 + 60] > mask[2 * 120 + 60]);
}

#[test]
fn apply_darkens_colour_by_mask_and_keeps_alpha() {
    let params = VignetteParams {
        blur_sigma: 2.0,
        ..VignetteParams::default()
    };
    let c = canvas(120, 80);
    let mask = vignette_mask(c, &params).unwrap();
    let mut frame: Vec<u8> = [200u8, 200, 200, 255].repeat(120 * 80);
    apply_vignette(&mut frame, &mask).unwrap();

    for (px, &m) in frame.chunks_exact(4).zip(mask.iter()) {
        let want = ((200.0 * (1.0 - f64::from(m) / 255.0)) as i32) as u8;
        assert!(px[0].abs_diff(want) <= 1, "mask {m}: got {} want {want}", px[0]);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }

    let (i, &m) = mask.iter().enumerate().max_by_key(|&(_, m)| *m).unwrap();
    assert!(m > 0);
    assert!(frame[i * 4] < 200);
}

#[test]
fn full_mask_strength_darkens_without_a_fixed_cap() {
    let mut frame = vec![200u8, 100, 50, 255, 200, 100, 50, 255];
    apply_vignette(&mut frame, &[40, 255]).unwrap();
    // 200 * 215 / 255 = 168.6, matching a mask-weighted blend toward black.
    assert_eq!(&frame[..4], &[169, 84, 42, 255]);
    assert_eq!(&frame[4..], &[0, 0, 0, 255]);
}

#[test]
fn apply_rejects_mismatched_mask() {
    let mut frame = vec![0u8; 16];
    assert!(apply_vignette(&mut frame, &[0u8; 3]).is_err());
}

#[test]
fn mask_is_deterministic() {
    let params = VignetteParams::default();
    let c = canvas(64, 48);
    assert_eq!(
        vignette_mask(c, &params).unwrap(),
        vignette_mask(c, &params).unwrap()
    );
}
