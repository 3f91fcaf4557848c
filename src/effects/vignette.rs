use crate::{
    effects::blur,
    foundation::{
        core::Canvas,
        error::{ForestError, ForestResult},
        math::mul_div255_u8,
    },
};

/// Parameters of the nested-rectangle vignette approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VignetteParams {
    /// Number of nested outlines.
    pub steps: u32,
    /// Inset growth per step, as a fraction of the longer canvas side.
    pub inset_frac: f64,
    /// Outline thickness in pixels.
    pub outline_px: u32,
    /// Gaussian sigma applied to the outline mask.
    pub blur_sigma: f32,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            steps: 26,
            inset_frac: 0.012,
            outline_px: 3,
            blur_sigma: 18.0,
        }
    }
}

/// Single-channel vignette mask before blurring.
///
/// Outline `i` sits `trunc(i * max(w, h) * inset_frac)` pixels in from every edge with value
/// `trunc(255 * (i / steps)^2)`. Later outlines overwrite earlier ones. Stops as soon as the inset
/// rectangle would invert.
pub fn outline_mask(canvas: Canvas, params: &VignetteParams) -> Vec<u8> {
    let w = canvas.width as i64;
    let h = canvas.height as i64;
    let mut mask = vec![0u8; (w * h) as usize];
    let longest = w.max(h) as f64;
    let steps = params.steps.max(1);

    for i in 0..steps {
        let t = f64::from(i) / f64::from(steps);
        let value = (255.0 * t * t) as u8;
        let inset = (f64::from(i) * longest * params.inset_frac) as i64;
        if w - inset <= inset || h - inset <= inset {
            break;
        }
        stroke_rect(
            &mut mask,
            (w, h),
            (inset, inset, w - inset, h - inset),
            i64::from(params.outline_px),
            value,
        );
    }
    mask
}

/// Set every pixel within `thickness` of the inclusive rectangle edge to `value`.
fn stroke_rect(
    mask: &mut [u8],
    (w, h): (i64, i64),
    (x0, y0, x1, y1): (i64, i64, i64, i64),
    thickness: i64,
    value: u8,
) {
    let mut fill = |ax: i64, ay: i64, bx: i64, by: i64| {
        for y in ay.max(0)..=by.min(h - 1) {
            for x in ax.max(0)..=bx.min(w - 1) {
                mask[(y * w + x) as usize] = value;
            }
        }
    };
    let t = thickness.max(1) - 1;
    fill(x0, y0, x1, y0 + t);
    fill(x0, y1 - t, x1, y1);
    fill(x0, y0, x0 + t, y1);
    fill(x1 - t, y0, x1, y1);
}

/// Blurred single-channel vignette mask, one byte per pixel.
///
/// Only depends on the canvas size, so callers build it once and apply it to every frame.
pub fn vignette_mask(canvas: Canvas, params: &VignetteParams) -> ForestResult<Vec<u8>> {
    let mask = outline_mask(canvas, params);
    let radius = blur::radius_for_sigma(params.blur_sigma);
    blur::blur_u8(&mask, canvas.width, canvas.height, 1, radius, params.blur_sigma)
}

/// Blend the colour channels of a premultiplied RGBA8 buffer toward black by `m / 255`.
///
/// Alpha is left untouched, so opaque frames stay opaque.
pub fn apply_vignette(dst: &mut [u8], mask: &[u8]) -> ForestResult<()> {
    if dst.len() != mask.len() * 4 {
        return Err(ForestError::render(
            "apply_vignette expects one mask byte per RGBA pixel",
        ));
    }
    for (px, &m) in dst.chunks_exact_mut(4).zip(mask.iter()) {
        if m == 0 {
            continue;
        }
        let keep = 255 - u16::from(m);
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), keep);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/vignette.rs"]
mod tests;
