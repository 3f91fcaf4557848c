use crate::foundation::error::{ForestError, ForestResult};

/// Kernel radius covering three standard deviations.
pub fn radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (3.0 * sigma).ceil() as u32
}

/// Separable Gaussian blur over an interleaved 8-bit buffer with `channels` channels per pixel.
///
/// Edges clamp. Weights are Q16 fixed point and sum to exactly one, so constant regions stay
/// constant.
pub fn blur_u8(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    radius: u32,
    sigma: f32,
) -> ForestResult<Vec<u8>> {
    if channels == 0 {
        return Err(ForestError::validation("blur needs at least one channel"));
    }
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| ForestError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ForestError::render(
            "blur_u8 expects src matching width*height*channels",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let dims = Dims {
        width: width as i64,
        height: height as i64,
        channels,
    };
    horizontal_pass(src, &mut tmp, dims, &kernel);
    vertical_pass(&tmp, &mut out, dims, &kernel);
    Ok(out)
}

#[derive(Clone, Copy)]
struct Dims {
    width: i64,
    height: i64,
    channels: usize,
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ForestResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ForestError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(ForestError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], d: Dims, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let mut acc = vec![0u64; d.channels];
    for y in 0..d.height {
        for x in 0..d.width {
            acc.fill(0);
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i64 - radius).clamp(0, d.width - 1);
                let idx = ((y * d.width + sx) as usize) * d.channels;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * d.width + x) as usize) * d.channels;
            for (c, &a) in acc.iter().enumerate() {
                dst[out_idx + c] = q16_to_u8(a);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], d: Dims, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let mut acc = vec![0u64; d.channels];
    for y in 0..d.height {
        for x in 0..d.width {
            acc.fill(0);
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i64 - radius).clamp(0, d.height - 1);
                let idx = ((sy * d.width + x) as usize) * d.channels;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * d.width + x) as usize) * d.channels;
            for (c, &a) in acc.iter().enumerate() {
                dst[out_idx + c] = q16_to_u8(a);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
