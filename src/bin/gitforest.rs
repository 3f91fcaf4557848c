use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gitforest::{
    ActivityGrid, BackgroundKind, ForestConfig, ForestRenderer, FrameIndex, FrameSink, GifSink,
    GridSource, RenderMeta, RenderThreading, SinkConfig, SpriteBank, synthetic_grid, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "gitforest", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full animation: forest.gif, forest.png (last frame) and meta.json.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Run configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Activity grid JSON (array of columns). A synthetic grid is used when omitted.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Directory holding the tree sprites.
    #[arg(long)]
    sprites: PathBuf,

    /// Override the configured seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured frame count.
    #[arg(long)]
    frames: Option<u32>,

    /// Override the configured background (misty, sunrise, twilight, night, paper, minimal, fog).
    #[arg(long)]
    background: Option<BackgroundKind>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

/// Everything a render needs, resolved from config file, flags and inputs.
struct Scene {
    cfg: ForestConfig,
    grid: ActivityGrid,
    source: GridSource,
    sprites: SpriteBank,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<Scene> {
    let mut cfg = match &args.config {
        Some(path) => ForestConfig::from_path(path)?,
        None => ForestConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    if let Some(background) = args.background {
        cfg.background = background;
    }
    cfg.validate()?;

    let (grid, source) = match &args.grid {
        Some(path) => (
            ActivityGrid::from_path(path)?.fit(cfg.weeks, cfg.days)?,
            GridSource::File {
                path: path.display().to_string(),
            },
        ),
        None => (
            synthetic_grid(cfg.seed, cfg.weeks, cfg.days)?,
            GridSource::Synthetic { seed: cfg.seed },
        ),
    };
    tracing::info!(
        columns = grid.columns(),
        rows = grid.rows(),
        active = grid.active_cells(),
        ?source,
        "activity grid ready"
    );

    let sprites = SpriteBank::load(&args.sprites, &cfg.sprite_bank_opts())?;
    Ok(Scene {
        cfg,
        grid,
        source,
        sprites,
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let opts = scene.cfg.render_opts(threading)?;
    let renderer = ForestRenderer::new(&scene.grid, &scene.sprites, opts)?;
    let frames = renderer.render_frames()?;

    let gif_path = args.out_dir.join("forest.gif");
    let mut gif = GifSink::new(&gif_path);
    gif.begin(SinkConfig {
        width: scene.cfg.canvas_width,
        height: scene.cfg.canvas_height,
        fps: scene.cfg.fps,
    })?;
    for (i, frame) in frames.iter().enumerate() {
        gif.push_frame(FrameIndex(i as u64), frame)?;
    }
    gif.end()?;
    eprintln!("wrote {}", gif_path.display());

    let png_path = args.out_dir.join("forest.png");
    if let Some(last) = frames.last() {
        write_png(&png_path, last)?;
        eprintln!("wrote {}", png_path.display());
    }

    let meta_path = args.out_dir.join("meta.json");
    let names = scene.sprites.as_slice().iter().map(|s| s.name.clone()).collect();
    RenderMeta::new(
        scene.source.clone(),
        &scene.cfg,
        &scene.grid,
        renderer.bounds(),
        names,
    )
    .write(&meta_path)?;
    eprintln!("wrote {}", meta_path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let opts = scene.cfg.render_opts(RenderThreading::default())?;
    let renderer = ForestRenderer::new(&scene.grid, &scene.sprites, opts)?;
    let frame = renderer.render_frame(FrameIndex(args.frame))?;

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
