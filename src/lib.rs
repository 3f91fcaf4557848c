//! gitforest renders a per-day activity grid as an animated forest.
//!
//! Each active day becomes a tree sprite whose height encodes its activity. Trees are revealed
//! across frames in grid order and grow in along a sliding window behind the reveal front.
//!
//! - Load a [`SpriteBank`] and an [`ActivityGrid`] (or [`synthetic_grid`])
//! - Create a [`ForestRenderer`] from [`RenderOpts`]
//! - Render single frames or stream every frame into a [`FrameSink`] such as [`GifSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod grid;
pub(crate) mod render;
pub(crate) mod scene;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Rgba8Premul};
pub use crate::foundation::error::{ForestError, ForestResult};

pub use crate::animation::ease::ease_out_cubic;
pub use crate::assets::decode::{WhiteKey, decode_rgba8, remove_white_background, trim_to_alpha};
pub use crate::assets::sprites::{Sprite, SpriteBank, SpriteBankOpts};
pub use crate::config::settings::ForestConfig;
pub use crate::effects::vignette::VignetteParams;
pub use crate::encode::gif::{GifSink, to_straight_rgba8, write_png};
pub use crate::encode::meta::{GridSource, RenderMeta};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::grid::model::{ActivityGrid, GridCell};
pub use crate::grid::stats::{
    MAX_TREE_HEIGHT_PX, MIN_TREE_HEIGHT_PX, NormalizationBounds, height_from_count,
};
pub use crate::grid::synth::synthetic_grid;
pub use crate::render::compositor::SpriteDraw;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::sequencer::{
    CellState, DAYS_PER_STEP, FramePlan, ForestRenderer, RenderOpts, RenderThreading,
    RevealWindow, cell_states, render_frames,
};
pub use crate::render::text::TitleText;
pub use crate::scene::layout::GridLayout;
pub use crate::scene::palette::BackgroundKind;
pub use crate::scene::select::{Bucket, SpriteChoice, select};
