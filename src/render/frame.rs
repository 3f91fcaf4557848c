use crate::foundation::{
    core::Canvas,
    error::{ForestError, ForestResult},
};

/// One composited frame.
///
/// `data` is tightly packed RGBA8, row-major, `width * height * 4` bytes. Frames produced by the
/// renderer are premultiplied; sinks convert to straight alpha before encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub(crate) fn from_premul(canvas: Canvas, data: Vec<u8>) -> ForestResult<Self> {
        if data.len() != canvas.rgba_len()? {
            return Err(ForestError::render(format!(
                "frame buffer has {} bytes, expected {}x{}x4",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }

    /// RGBA8 value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
