use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::FrameIndex,
        error::{ForestError, ForestResult},
    },
    render::frame::FrameRGBA,
};

/// Quantizer speed passed to the GIF encoder (1 = best, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Straight-alpha RGBA8 copy of a frame.
pub fn to_straight_rgba8(frame: &FrameRGBA) -> Vec<u8> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    data
}

pub fn ensure_parent_dir(path: &Path) -> ForestResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write one frame as a PNG.
pub fn write_png(path: impl AsRef<Path>, frame: &FrameRGBA) -> ForestResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &to_straight_rgba8(frame),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Animated GIF sink: loops forever, every frame shown for `1000 / fps` ms.
pub struct GifSink {
    out_path: PathBuf,
    cfg: Option<SinkConfig>,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    frames_written: u64,
}

impl GifSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            cfg: None,
            encoder: None,
            frames_written: 0,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> ForestResult<()> {
        cfg.validate()?;
        ensure_parent_dir(&self.out_path)?;
        let file = File::create(&self.out_path)
            .with_context(|| format!("create gif '{}'", self.out_path.display()))?;

        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .with_context(|| "set gif repeat")?;

        self.cfg = Some(cfg);
        self.encoder = Some(encoder);
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ForestResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg, self.encoder.as_mut()) else {
            return Err(ForestError::render("gif push_frame called before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ForestError::validation(format!(
                "frame {} is {}x{}, gif expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let buf = RgbaImage::from_raw(frame.width, frame.height, to_straight_rgba8(frame))
            .ok_or_else(|| ForestError::render("frame buffer does not match its size"))?;
        let delay = Delay::from_numer_denom_ms(1000, cfg.fps);
        encoder
            .encode_frame(Frame::from_parts(buf, 0, 0, delay))
            .with_context(|| format!("encode gif frame {}", idx.0))?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> ForestResult<()> {
        // Dropping the encoder writes the GIF trailer.
        drop(self.encoder.take());
        tracing::info!(
            path = %self.out_path.display(),
            frames = self.frames_written,
            "gif written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
