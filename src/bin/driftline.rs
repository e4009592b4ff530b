use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use driftline::assets::decode::unpremultiply_rgba8_in_place;
use driftline::{
    CpuBackend, CpuSettings, DataProvider, Engine, EngineConfig, FramePlan, FrameRGBA,
    JsonFileProvider, LayerKind, LayerToggles, Point, RenderLoop, Rgba, ScriptedHost, Window,
    execute_plan,
};

#[derive(Parser, Debug)]
#[command(name = "driftline", version)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one composed frame as a PNG.
    Frame(FrameArgs),
    /// Sweep the pointer across the window and write a PNG sequence.
    Sweep(SweepArgs),
    /// Print the planned scene of one frame as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Dataset JSON with `dates`, `temperature`, `precipitation`, `price` and `sentiment` arrays.
    #[arg(long)]
    data: PathBuf,

    /// Engine config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels. The canvas is bottom-aligned inside it.
    #[arg(long, default_value_t = 700)]
    window_height: u32,

    /// Seed for the cloud fields.
    #[arg(long)]
    seed: Option<u64>,

    /// Font for axis labels; the system sans-serif family is used when unset.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Cloud sprite image.
    #[arg(long)]
    cloud: Option<PathBuf>,

    /// Indicator sprite image.
    #[arg(long)]
    indicator: Option<PathBuf>,

    /// Enabled layers: weather, harvest, wave, sentiment.
    #[arg(long, value_delimiter = ',', default_value = "weather")]
    layers: Vec<String>,

    /// Background color (#rrggbb).
    #[arg(long, default_value = "#0b1a2a")]
    background: String,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Host clock of the frame in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Scroll position as a fraction of the scrollable range.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Pointer position in window pixels, `x,y`.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<Point>,

    /// Frames to run before the captured one so eased state can settle.
    #[arg(long, default_value_t = 0)]
    settle: u32,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Directory for `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Host clock step per frame in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    session: SessionArgs,

    #[command(flatten)]
    view: ViewArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let result = match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Dump(args) => cmd_dump(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("driftline: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

impl SessionArgs {
    fn window(&self) -> Window {
        Window::new(f64::from(self.width), f64::from(self.window_height))
    }

    fn config(&self) -> anyhow::Result<EngineConfig> {
        let mut cfg = match &self.config {
            Some(path) => EngineConfig::from_path(path)?,
            None => EngineConfig::default(),
        };
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(font) = &self.font {
            cfg.font_path = Some(font.clone());
        }
        if let Some(cloud) = &self.cloud {
            cfg.cloud_sprite = Some(cloud.clone());
        }
        if let Some(indicator) = &self.indicator {
            cfg.indicator_sprite = Some(indicator.clone());
        }
        Ok(cfg)
    }

    fn toggles(&self) -> anyhow::Result<LayerToggles> {
        let kinds = self
            .layers
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| LayerKind::parse(s).with_context(|| format!("unknown layer '{s}'")))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(LayerToggles::from_kinds(kinds))
    }

    fn engine(&self) -> anyhow::Result<Engine> {
        let cfg = self.config()?;
        let dataset = JsonFileProvider::new(&self.data).load()?;
        let mut engine = Engine::new(dataset, cfg, self.window())?;
        engine.set_toggles(self.toggles()?);
        Ok(engine)
    }

    fn backend(&self, cfg: &EngineConfig) -> anyhow::Result<CpuBackend> {
        let backend = CpuBackend::new(CpuSettings {
            background: Some(Rgba::from_hex(&self.background)?),
        });
        match &cfg.font_path {
            Some(path) => Ok(backend.with_font_file(path)?),
            None => Ok(backend),
        }
    }
}

/// Advance `engine` to the frame described by `view` and plan it.
fn plan_view(engine: &mut Engine, view: &ViewArgs, window: Window) -> FramePlan {
    engine.jump_to(view.scroll);
    if let Some(p) = view.pointer {
        engine.pointer_move(p, window);
        // Hold the requested scroll; the pointer only aims the indicator here.
        engine.jump_to(view.scroll);
    }
    for i in 0..view.settle {
        let t = view.time_ms - f64::from(view.settle - i) * 16.0;
        engine.frame(t, window);
        engine.jump_to(view.scroll);
    }
    engine.frame(view.time_ms, window)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let window = args.session.window();
    let mut engine = args.session.engine()?;
    let mut backend = args.session.backend(engine.config())?;
    let plan = plan_view(&mut engine, &args.view, window);
    let frame = execute_plan(&mut backend, &plan)?;
    write_png(&args.out, frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames > 0, "--frames must be > 0");
    let window = args.session.window();
    let engine = args.session.engine()?;
    let backend = args.session.backend(engine.config())?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let out_dir = args.out_dir.clone();
    let mut host = ScriptedHost::pointer_sweep(
        window,
        args.frames,
        0.0,
        args.frame_ms,
        Box::new(move |i: u64, _plan: &FramePlan, frame: FrameRGBA| {
            let path = out_dir.join(format!("frame_{i:05}.png"));
            write_png(&path, frame).map_err(driftline::DriftlineError::from)
        }),
    );
    let report = RenderLoop::new(engine, backend).run(&mut host)?;
    eprintln!(
        "wrote {} frames to {}",
        report.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let window = args.session.window();
    let mut engine = args.session.engine()?;
    let plan = plan_view(&mut engine, &args.view, window);
    let json = serde_json::to_string_pretty(&plan.summary())?;
    println!("{json}");
    Ok(())
}

fn write_png(path: &Path, mut frame: FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut frame.data);
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
