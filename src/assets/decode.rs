use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::ForestResult;

/// Near-white transparency key.
///
/// A pixel is keyed out when every RGB channel is at least `min_channel` and the spread between
/// its largest and smallest channel is at most `max_spread`. Tinted anti-aliased edges survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WhiteKey {
    /// Minimum value of every RGB channel.
    pub min_channel: u8,
    /// Maximum allowed `max(rgb) - min(rgb)`.
    pub max_spread: u8,
}

impl Default for WhiteKey {
    fn default() -> Self {
        Self {
            min_channel: 252,
            max_spread: 6,
        }
    }
}

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_rgba8(bytes: &[u8]) -> ForestResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Force near-white, visible pixels to zero alpha (straight-alpha input).
pub fn remove_white_background(img: &mut RgbaImage, key: WhiteKey) {
    for px in img.pixels_mut() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let mn = r.min(g).min(b);
        let mx = r.max(g).max(b);
        if mn >= key.min_channel && mx - mn <= key.max_spread {
            px.0[3] = 0;
        }
    }
}

/// Crop to the bounding box of non-zero alpha, grown by `pad` pixels and clamped to the image.
///
/// Fully transparent images are returned unchanged.
pub fn trim_to_alpha(img: &RgbaImage, pad: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[3] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => (x, y, x + 1, y + 1),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
        });
    }

    let Some((x0, y0, x1, y1)) = bbox else {
        return img.clone();
    };
    let x0 = x0.saturating_sub(pad);
    let y0 = y0.saturating_sub(pad);
    let x1 = x1.saturating_add(pad).min(w);
    let y1 = y1.saturating_add(pad).min(h);

    image::imageops::crop_imm(img, x0, y0, x1 - x0, y1 - y0).to_image()
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = (((*c as u16).min(a) * 255 + a / 2) / a) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
