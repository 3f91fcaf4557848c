use crate::foundation::math::clamp01;

/// Decelerating cubic curve `1 - (1 - t)^3`; `t` is clamped to `[0, 1]` first.
///
/// Shared by the growth-over-time curve and the height-by-activity curve.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp01(t);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
