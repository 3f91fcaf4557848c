use crate::foundation::error::{ForestError, ForestResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel, with the source scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Source-over of two equally sized premultiplied RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ForestResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ForestError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Destination surface description for [`over_at`].
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    /// Destination width in pixels.
    pub dst_width: u32,
    /// Destination height in pixels.
    pub dst_height: u32,
    /// Left edge of the source in destination space (may be negative).
    pub x: i32,
    /// Top edge of the source in destination space (may be negative).
    pub y: i32,
}

/// Source-over of a smaller premultiplied image at an offset, clipped to the destination.
pub fn over_at(
    dst: &mut [u8],
    src: &[u8],
    src_width: u32,
    src_height: u32,
    at: Placement,
) -> ForestResult<()> {
    let dst_len = (at.dst_width as usize) * (at.dst_height as usize) * 4;
    let src_len = (src_width as usize) * (src_height as usize) * 4;
    if dst.len() != dst_len || src.len() != src_len {
        return Err(ForestError::render(
            "over_at expects buffers matching their declared sizes",
        ));
    }

    let dw = i64::from(at.dst_width);
    let dh = i64::from(at.dst_height);
    let x0 = i64::from(at.x).max(0);
    let y0 = i64::from(at.y).max(0);
    let x1 = (i64::from(at.x) + i64::from(src_width)).min(dw);
    let y1 = (i64::from(at.y) + i64::from(src_height)).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    for y in y0..y1 {
        let sy = (y - i64::from(at.y)) as usize;
        for x in x0..x1 {
            let sx = (x - i64::from(at.x)) as usize;
            let si = (sy * src_width as usize + sx) * 4;
            let di = (y as usize * at.dst_width as usize + x as usize) * 4;
            let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
            if s[3] == 0 {
                continue;
            }
            let d = [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]];
            dst[di..di + 4].copy_from_slice(&over(d, s, 1.0));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
