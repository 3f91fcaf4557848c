use rayon::prelude::*;

use crate::{
    animation::ease::ease_out_cubic,
    assets::sprites::SpriteBank,
    effects::vignette::{VignetteParams, apply_vignette},
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{Canvas, FrameIndex},
        error::{ForestError, ForestResult},
    },
    grid::{model::ActivityGrid, stats::NormalizationBounds},
    render::{
        compositor::{SceneStyle, SpriteDraw, StaticLayers, draw_sprite},
        frame::FrameRGBA,
        text::{TitleText, system_fontdb},
    },
    scene::{layout::GridLayout, palette::BackgroundKind, select::select},
};

/// Width of the sliding window of cells still growing behind the reveal front.
pub const DAYS_PER_STEP: usize = 14;

/// Reveal front and growth window for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealWindow {
    /// Cells with `index < reveal` are eligible to be drawn.
    pub reveal: usize,
    /// Cells with `index < block_start` are fully grown.
    pub block_start: usize,
}

impl RevealWindow {
    /// `reveal = floor((frame + 1) / frame_count * total_cells)`.
    ///
    /// Once the whole grid is revealed the growth window closes, so the final frame always shows
    /// every tree fully grown.
    pub fn for_frame(frame: FrameIndex, frame_count: u32, total_cells: usize) -> Self {
        let n = u128::from(frame_count.max(1));
        let f = (u128::from(frame.0) + 1).min(n);
        let reveal = (f * total_cells as u128 / n) as usize;
        let block_start = if reveal >= total_cells {
            reveal
        } else {
            reveal.saturating_sub(DAYS_PER_STEP)
        };
        Self {
            reveal,
            block_start,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.reveal
    }

    /// Growth factor in `[0, 1]` for a revealed cell.
    pub fn growth(&self, index: usize) -> f64 {
        if index < self.block_start {
            return 1.0;
        }
        let span = DAYS_PER_STEP.saturating_sub(1).max(1) as f64;
        ease_out_cubic((index - self.block_start) as f64 / span)
    }
}

/// Per-frame state of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellState {
    pub column: usize,
    pub row: usize,
    pub count: u32,
    pub index: usize,
    pub revealed: bool,
    /// Zero for unrevealed cells.
    pub growth: f64,
}

/// Every cell of `grid` in iteration order (column outer, row inner) under `window`.
pub fn cell_states(
    grid: &ActivityGrid,
    window: RevealWindow,
) -> impl Iterator<Item = CellState> + '_ {
    grid.cells().map(move |cell| {
        let revealed = window.is_revealed(cell.index);
        CellState {
            column: cell.column,
            row: cell.row,
            count: cell.count,
            index: cell.index,
            revealed,
            growth: if revealed {
                window.growth(cell.index)
            } else {
                0.0
            },
        }
    })
}

/// Everything needed to composite one frame, in back-to-front draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub frame: FrameIndex,
    pub window: RevealWindow,
    pub draws: Vec<SpriteDraw>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render frames on a rayon pool.
    pub parallel: bool,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Explicit render parameters. Nothing is read from global state.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOpts {
    pub canvas: Canvas,
    pub frame_count: u32,
    /// Drives every sprite and orientation choice.
    pub seed: u64,
    pub background: BackgroundKind,
    pub text: TitleText,
    pub layout: GridLayout,
    pub vignette: VignetteParams,
    pub threading: RenderThreading,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1280,
                height: 720,
            },
            frame_count: 16,
            seed: 42,
            background: BackgroundKind::default(),
            text: TitleText::default(),
            layout: GridLayout::default(),
            vignette: VignetteParams::default(),
            threading: RenderThreading::default(),
        }
    }
}

impl RenderOpts {
    pub fn validate(&self) -> ForestResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.frame_count == 0 {
            return Err(ForestError::validation("frame count must be >= 1"));
        }
        if self.layout.cell_px == 0 {
            return Err(ForestError::validation("grid cell size must be >= 1"));
        }
        if self.threading.threads == Some(0) {
            return Err(ForestError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Renders the frames of one grid with one sprite bank.
///
/// Inputs are borrowed read-only and the frame-independent layers are built once, so any frame can
/// be rendered in any order, or concurrently, with identical results.
pub struct ForestRenderer<'a> {
    grid: &'a ActivityGrid,
    sprites: &'a SpriteBank,
    opts: RenderOpts,
    bounds: NormalizationBounds,
    layers: StaticLayers,
}

impl<'a> ForestRenderer<'a> {
    #[tracing::instrument(
        skip_all,
        fields(
            columns = grid.columns(),
            rows = grid.rows(),
            frames = opts.frame_count,
            seed = opts.seed
        )
    )]
    pub fn new(
        grid: &'a ActivityGrid,
        sprites: &'a SpriteBank,
        opts: RenderOpts,
    ) -> ForestResult<Self> {
        opts.validate()?;
        if sprites.is_empty() {
            return Err(ForestError::no_sprites("sprite bank is empty"));
        }

        let bounds = NormalizationBounds::compute(grid);
        let style = SceneStyle {
            background: opts.background,
            text: &opts.text,
            layout: opts.layout,
            vignette: opts.vignette,
        };
        let layers = StaticLayers::build(
            opts.canvas,
            grid.columns(),
            grid.rows(),
            &style,
            system_fontdb(),
        )?;
        tracing::info!(
            sprites = sprites.len(),
            active_cells = grid.active_cells(),
            "renderer ready"
        );

        Ok(Self {
            grid,
            sprites,
            opts,
            bounds,
            layers,
        })
    }

    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    pub fn bounds(&self) -> NormalizationBounds {
        self.bounds
    }

    pub fn frame_count(&self) -> u32 {
        self.opts.frame_count
    }

    fn check_frame(&self, frame: FrameIndex) -> ForestResult<()> {
        if frame.0 >= u64::from(self.opts.frame_count) {
            return Err(ForestError::validation(format!(
                "frame {} out of range (frame count {})",
                frame.0, self.opts.frame_count
            )));
        }
        Ok(())
    }

    /// Sprites to draw on `frame`, in grid iteration order.
    pub fn plan_frame(&self, frame: FrameIndex) -> ForestResult<FramePlan> {
        self.check_frame(frame)?;
        let window =
            RevealWindow::for_frame(frame, self.opts.frame_count, self.grid.total_cells());

        let draws = cell_states(self.grid, window)
            .filter(|cell| cell.revealed && cell.count > 0)
            .map(|cell| {
                let choice = select(cell.count, cell.index, self.opts.seed);
                SpriteDraw {
                    column: cell.column,
                    row: cell.row,
                    index: cell.index,
                    count: cell.count,
                    slot: choice.slot,
                    sprite: choice.slot % self.sprites.len(),
                    flip: choice.flip,
                    anchor: self.opts.layout.anchor(cell.column, cell.row),
                    target_height: self.bounds.height_for(cell.count),
                    growth: cell.growth,
                }
            })
            .collect();

        Ok(FramePlan {
            frame,
            window,
            draws,
        })
    }

    /// Composite one frame: static base, sprites in plan order, then the vignette.
    pub fn render_frame(&self, frame: FrameIndex) -> ForestResult<FrameRGBA> {
        let plan = self.plan_frame(frame)?;
        let canvas = self.layers.canvas;
        let mut data = self.layers.base.clone();
        for draw in &plan.draws {
            draw_sprite(&mut data, canvas, self.sprites.get_wrapped(draw.sprite), draw)?;
        }
        apply_vignette(&mut data, &self.layers.vignette)?;

        tracing::debug!(frame = frame.0, sprites = plan.draws.len(), "frame rendered");
        FrameRGBA::from_premul(canvas, data)
    }

    /// All frames in order, on a rayon pool when threading is enabled.
    #[tracing::instrument(skip(self), fields(frames = self.opts.frame_count, parallel = self.opts.threading.parallel))]
    pub fn render_frames(&self) -> ForestResult<Vec<FrameRGBA>> {
        let n = u64::from(self.opts.frame_count);
        if !self.opts.threading.parallel {
            return (0..n).map(|f| self.render_frame(FrameIndex(f))).collect();
        }

        let pool = build_thread_pool(self.opts.threading.threads)?;
        let rendered = pool.install(|| {
            (0..n)
                .into_par_iter()
                .map(|f| self.render_frame(FrameIndex(f)))
                .collect::<Vec<_>>()
        });
        rendered.into_iter().collect()
    }

    /// Render every frame into `sink` in order.
    pub fn stream_to(&self, sink: &mut dyn FrameSink, fps: u32) -> ForestResult<()> {
        sink.begin(SinkConfig {
            width: self.opts.canvas.width,
            height: self.opts.canvas.height,
            fps,
        })?;
        if self.opts.threading.parallel {
            for (i, frame) in self.render_frames()?.iter().enumerate() {
                sink.push_frame(FrameIndex(i as u64), frame)?;
            }
        } else {
            for f in 0..u64::from(self.opts.frame_count) {
                let frame = self.render_frame(FrameIndex(f))?;
                sink.push_frame(FrameIndex(f), &frame)?;
            }
        }
        sink.end()
    }
}

/// Render `opts.frame_count` frames of `grid` with `sprites`.
pub fn render_frames(
    grid: &ActivityGrid,
    sprites: &SpriteBank,
    opts: RenderOpts,
) -> ForestResult<Vec<FrameRGBA>> {
    ForestRenderer::new(grid, sprites, opts)?.render_frames()
}

fn build_thread_pool(threads: Option<usize>) -> ForestResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ForestError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequencer.rs"]
mod tests;
