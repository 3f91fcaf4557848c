use std::sync::Arc;

use image::{RgbaImage, imageops};
use resvg::tiny_skia;

use crate::{
    assets::sprites::Sprite,
    effects::{
        composite::{Placement, over_at, over_in_place},
        vignette::{VignetteParams, vignette_mask},
    },
    foundation::{
        core::{Canvas, Point, Rgba8Premul},
        error::{ForestError, ForestResult},
        math::lerp,
    },
    render::text::{TitleText, title_layer},
    scene::{layout::GridLayout, palette::BackgroundKind},
};

/// Grid guide stroke, straight RGBA.
const GRID_STROKE: [u8; 4] = [230, 251, 255, 20];
/// Contact shadow under each sprite, straight RGBA.
const SHADOW: [u8; 4] = [0, 0, 0, 70];

const MIN_DRAW_HEIGHT_PX: f64 = 2.0;
const MIN_GROWTH: f64 = 0.05;

/// One sprite placement on a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteDraw {
    pub column: usize,
    pub row: usize,
    pub index: usize,
    pub count: u32,
    /// Conceptual slot picked by the selector.
    pub slot: usize,
    /// Index into the sprite bank, already wrapped to its length.
    pub sprite: usize,
    pub flip: bool,
    /// Bottom-center point of the sprite.
    pub anchor: Point,
    /// Fully grown height in pixels.
    pub target_height: f64,
    pub growth: f64,
}

impl SpriteDraw {
    /// Drawn size in fractional pixels, before truncation.
    pub fn draw_size(&self, sprite: &Sprite) -> (f64, f64) {
        let g = self.growth.clamp(MIN_GROWTH, 1.0);
        let h = (self.target_height * g).max(MIN_DRAW_HEIGHT_PX);
        let w = f64::from(sprite.width) * h / f64::from(sprite.height.max(1));
        (w, h)
    }
}

/// Layers that do not depend on the frame index.
///
/// `base` holds background, title and grid guides; `vignette` is the blurred mask applied last.
#[derive(Clone, Debug)]
pub struct StaticLayers {
    pub canvas: Canvas,
    pub base: Vec<u8>,
    pub vignette: Vec<u8>,
}

/// Inputs for [`StaticLayers::build`].
#[derive(Clone, Debug)]
pub struct SceneStyle<'a> {
    pub background: BackgroundKind,
    pub text: &'a TitleText,
    pub layout: GridLayout,
    pub vignette: VignetteParams,
}

impl StaticLayers {
    #[tracing::instrument(skip(style, fontdb), fields(background = %style.background))]
    pub fn build(
        canvas: Canvas,
        columns: usize,
        rows: usize,
        style: &SceneStyle<'_>,
        fontdb: Arc<usvg::fontdb::Database>,
    ) -> ForestResult<Self> {
        let mut base = vec![0u8; canvas.rgba_len()?];
        let (top, bottom) = style.background.gradient();
        fill_vertical_gradient(&mut base, canvas, top, bottom)?;

        let text = title_layer(canvas, style.text, fontdb)?;
        over_in_place(&mut base, &text, 1.0)?;

        draw_grid_overlay(&mut base, canvas, &style.layout, columns, rows)?;

        let vignette = vignette_mask(canvas, &style.vignette)?;
        Ok(Self {
            canvas,
            base,
            vignette,
        })
    }
}

/// Opaque top-to-bottom gradient. Each row uses `t = y / max(1, h - 1)` with channels truncated.
pub fn fill_vertical_gradient(
    dst: &mut [u8],
    canvas: Canvas,
    top: Rgba8Premul,
    bottom: Rgba8Premul,
) -> ForestResult<()> {
    if dst.len() != canvas.rgba_len()? {
        return Err(ForestError::render("gradient target does not match canvas"));
    }
    let denom = f64::from(canvas.height.saturating_sub(1).max(1));
    let row_len = canvas.width as usize * 4;
    for (y, row) in dst.chunks_exact_mut(row_len).enumerate() {
        let t = y as f64 / denom;
        let mut px = [255u8; 4];
        let ends = top.to_array().into_iter().zip(bottom.to_array());
        for (out, (a, b)) in px[..3].iter_mut().zip(ends) {
            *out = lerp(f64::from(a), f64::from(b), t) as u8;
        }
        for out in row.chunks_exact_mut(4) {
            out.copy_from_slice(&px);
        }
    }
    Ok(())
}

fn pixmap_mut(dst: &mut [u8], canvas: Canvas) -> ForestResult<tiny_skia::PixmapMut<'_>> {
    tiny_skia::PixmapMut::from_bytes(dst, canvas.width, canvas.height)
        .ok_or_else(|| ForestError::render("buffer is not a valid pixmap for the canvas"))
}

fn solid_paint(rgba: [u8; 4], anti_alias: bool) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = anti_alias;
    paint
}

/// One-pixel guide lines on every cell boundary of a `columns x rows` grid.
pub fn draw_grid_overlay(
    dst: &mut [u8],
    canvas: Canvas,
    layout: &GridLayout,
    columns: usize,
    rows: usize,
) -> ForestResult<()> {
    if columns == 0 || rows == 0 {
        return Ok(());
    }
    let bounds = layout.bounds(columns, rows);
    let cell = f64::from(layout.cell_px);

    let mut pb = tiny_skia::PathBuilder::new();
    // Offset by half a pixel so each line lands on one pixel column/row.
    for c in 0..=columns {
        let x = (bounds.x0 + c as f64 * cell + 0.5) as f32;
        pb.move_to(x, bounds.y0 as f32);
        pb.line_to(x, bounds.y1 as f32);
    }
    for r in 0..=rows {
        let y = (bounds.y0 + r as f64 * cell + 0.5) as f32;
        pb.move_to(bounds.x0 as f32, y);
        pb.line_to(bounds.x1 as f32, y);
    }
    let Some(path) = pb.finish() else {
        return Ok(());
    };

    let mut pixmap = pixmap_mut(dst, canvas)?;
    let stroke = tiny_skia::Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(
        &path,
        &solid_paint(GRID_STROKE, false),
        &stroke,
        tiny_skia::Transform::identity(),
        None,
    );
    Ok(())
}

/// Draw `sprite` for one cell: contact shadow first, then the scaled sprite anchored bottom-center.
pub fn draw_sprite(
    dst: &mut [u8],
    canvas: Canvas,
    sprite: &Sprite,
    draw: &SpriteDraw,
) -> ForestResult<()> {
    if draw.target_height <= 0.0 || !draw.target_height.is_finite() {
        return Ok(());
    }
    let (w, h) = draw.draw_size(sprite);
    let (x, y) = (draw.anchor.x, draw.anchor.y);

    draw_shadow(dst, canvas, x, y, w)?;

    let scaled = scale_sprite(&sprite.image, draw.flip, w, h);
    over_at(
        dst,
        scaled.as_raw(),
        scaled.width(),
        scaled.height(),
        Placement {
            dst_width: canvas.width,
            dst_height: canvas.height,
            x: (x - w / 2.0) as i32,
            y: (y - h) as i32,
        },
    )
}

fn draw_shadow(dst: &mut [u8], canvas: Canvas, x: f64, y: f64, w: f64) -> ForestResult<()> {
    let rect = tiny_skia::Rect::from_ltrb(
        (x - w * 0.22) as f32,
        (y - 2.0) as f32,
        (x + w * 0.22) as f32,
        (y + w * 0.10) as f32,
    );
    let Some(oval) = rect.and_then(tiny_skia::PathBuilder::from_oval) else {
        return Ok(());
    };
    let mut pixmap = pixmap_mut(dst, canvas)?;
    pixmap.fill_path(
        &oval,
        &solid_paint(SHADOW, true),
        tiny_skia::FillRule::Winding,
        tiny_skia::Transform::identity(),
        None,
    );
    Ok(())
}

/// Flip (optionally) then Lanczos-resize a premultiplied sprite to `trunc(w) x trunc(h)`.
fn scale_sprite(src: &RgbaImage, flip: bool, w: f64, h: f64) -> RgbaImage {
    let tw = (w as u32).max(1);
    let th = (h as u32).max(1);
    let mut out = if flip {
        let flipped = imageops::flip_horizontal(src);
        imageops::resize(&flipped, tw, th, imageops::FilterType::Lanczos3)
    } else {
        imageops::resize(src, tw, th, imageops::FilterType::Lanczos3)
    };
    // Keep color <= alpha after Lanczos ringing.
    for px in out.pixels_mut() {
        let a = px[3];
        for c in 0..3 {
            px[c] = px[c].min(a);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
