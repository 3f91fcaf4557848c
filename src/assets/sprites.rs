use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::{
    assets::decode::{self, WhiteKey},
    foundation::error::{ForestError, ForestResult},
};

/// A prepared tree sprite: background keyed out, trimmed, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct Sprite {
    /// File stem the sprite was loaded from.
    pub name: String,
    /// Premultiplied RGBA8 pixels.
    pub image: RgbaImage,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Sprite {
    /// Prepare a sprite from a decoded straight-alpha image.
    pub fn prepare(name: impl Into<String>, mut img: RgbaImage, opts: &SpriteBankOpts) -> Self {
        decode::remove_white_background(&mut img, opts.white_key);
        let mut img = decode::trim_to_alpha(&img, opts.pad_px);
        decode::premultiply_rgba8_in_place(&mut img);
        let (width, height) = img.dimensions();
        Self {
            name: name.into(),
            image: img,
            width,
            height,
        }
    }
}

/// Options controlling sprite discovery and preparation.
#[derive(Clone, Debug)]
pub struct SpriteBankOpts {
    /// Only `.png` files whose stem starts with this prefix are loaded.
    pub prefix: String,
    /// Padding kept around the trimmed alpha bounding box.
    pub pad_px: u32,
    /// Background transparency key.
    pub white_key: WhiteKey,
}

impl Default for SpriteBankOpts {
    fn default() -> Self {
        Self {
            prefix: "A".to_string(),
            pad_px: 2,
            white_key: WhiteKey::default(),
        }
    }
}

/// Immutable, ordered sprite collection.
///
/// Order is lexicographic by file name so index-based selection is reproducible.
#[derive(Clone, Debug)]
pub struct SpriteBank {
    sprites: Vec<Sprite>,
}

impl SpriteBank {
    /// Load every matching sprite in `dir`.
    ///
    /// Returns [`ForestError::NoSprites`] when nothing matches.
    #[tracing::instrument(skip(dir, opts), fields(sprite_dir = %dir.as_ref().display()))]
    pub fn load(dir: impl AsRef<Path>, opts: &SpriteBankOpts) -> ForestResult<Self> {
        let dir = dir.as_ref();
        let paths = sprite_paths(dir, &opts.prefix)?;

        let mut sprites = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("read sprite '{}'", path.display()))?;
            let img = decode::decode_rgba8(&bytes).map_err(|e| {
                ForestError::validation(format!("sprite '{}': {e}", path.display()))
            })?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let sprite = Sprite::prepare(name, img, opts);
            tracing::debug!(
                name = %sprite.name,
                width = sprite.width,
                height = sprite.height,
                "sprite prepared"
            );
            sprites.push(sprite);
        }

        let bank = Self::from_sprites(sprites).map_err(|_| {
            ForestError::no_sprites(format!("no sprites found in '{}'", dir.display()))
        })?;
        tracing::info!(count = bank.len(), "sprites loaded");
        Ok(bank)
    }

    /// Build a bank from already prepared sprites.
    pub fn from_sprites(sprites: Vec<Sprite>) -> ForestResult<Self> {
        if sprites.is_empty() {
            return Err(ForestError::no_sprites("sprite bank is empty"));
        }
        Ok(Self { sprites })
    }

    /// Number of sprites (always at least one).
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Never true for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Sprite for a conceptual choice slot, wrapping modulo the bank size.
    pub fn get_wrapped(&self, choice: usize) -> &Sprite {
        &self.sprites[choice % self.sprites.len()]
    }

    /// Sprites in load order.
    pub fn as_slice(&self) -> &[Sprite] {
        &self.sprites
    }
}

fn sprite_paths(dir: &Path, prefix: &str) -> ForestResult<Vec<PathBuf>> {
    let rd = std::fs::read_dir(dir).map_err(|e| {
        ForestError::no_sprites(format!("read sprite dir '{}': {e}", dir.display()))
    })?;

    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("list sprite dir '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        let matches_prefix = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(prefix));
        if is_png && matches_prefix {
            out.push(path);
        }
    }
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sprites.rs"]
mod tests;
