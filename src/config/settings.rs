use std::{fs::File, io::BufReader, path::Path};

use crate::{
    assets::sprites::SpriteBankOpts,
    effects::vignette::VignetteParams,
    foundation::{
        core::Canvas,
        error::{ForestError, ForestResult},
    },
    render::{
        sequencer::{RenderOpts, RenderThreading},
        text::TitleText,
    },
    scene::{layout::GridLayout, palette::BackgroundKind},
};

/// On-disk run configuration.
///
/// JSON object; every field is optional and unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForestConfig {
    /// Columns kept from the activity grid.
    pub weeks: usize,
    /// Rows per column.
    pub days: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub frames: u32,
    /// Playback rate handed to the encoder.
    pub fps: u32,
    pub background: BackgroundKind,
    pub seed: u64,
    pub title: String,
    pub subtitle: String,
    /// File-name prefix of the sprites to load.
    pub sprite_prefix: String,
    pub layout: GridLayout,
}

impl Default for ForestConfig {
    fn default() -> Self {
        let text = TitleText::default();
        Self {
            weeks: 53,
            days: 7,
            canvas_width: 1280,
            canvas_height: 720,
            frames: 16,
            fps: 12,
            background: BackgroundKind::Misty,
            seed: 42,
            title: text.title,
            subtitle: text.subtitle,
            sprite_prefix: "A".to_string(),
            layout: GridLayout::default(),
        }
    }
}

impl ForestConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ForestResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ForestError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ForestResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ForestError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ForestResult<()> {
        Canvas::new(self.canvas_width, self.canvas_height)?;
        let positive = [
            ("frames", self.frames as usize),
            ("fps", self.fps as usize),
            ("weeks", self.weeks),
            ("days", self.days),
            ("layout.cell_px", self.layout.cell_px as usize),
        ];
        for (name, v) in positive {
            if v == 0 {
                return Err(ForestError::validation(format!("{name} must be >= 1")));
            }
        }
        Ok(())
    }

    /// Render parameters for this configuration, with the given threading.
    pub fn render_opts(&self, threading: RenderThreading) -> ForestResult<RenderOpts> {
        self.validate()?;
        Ok(RenderOpts {
            canvas: Canvas::new(self.canvas_width, self.canvas_height)?,
            frame_count: self.frames,
            seed: self.seed,
            background: self.background,
            text: TitleText {
                title: self.title.clone(),
                subtitle: self.subtitle.clone(),
            },
            layout: self.layout,
            vignette: VignetteParams::default(),
            threading,
        })
    }

    pub fn sprite_bank_opts(&self) -> SpriteBankOpts {
        SpriteBankOpts {
            prefix: self.sprite_prefix.clone(),
            ..SpriteBankOpts::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
