use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollax", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report discovered targets and their captured snapshots.
    Inspect(InspectArgs),
    /// Simulate a scroll sweep and emit one JSON line per step.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Selector to discover targets with.
    #[arg(long, default_value = scrollax::DEFAULT_SELECTOR)]
    selector: String,

    /// Default speed for targets without an override.
    #[arg(long, default_value_t = scrollax::DEFAULT_SPEED)]
    speed: i32,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Selector to discover targets with.
    #[arg(long, default_value = scrollax::DEFAULT_SELECTOR)]
    selector: String,

    /// Default speed for targets without an override.
    #[arg(long, default_value_t = scrollax::DEFAULT_SPEED)]
    speed: i32,

    /// First scroll offset of the sweep.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset of the sweep (inclusive).
    #[arg(long)]
    to: f64,

    /// Scroll offset increment per step.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<scrollax::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: scrollax::Scene = serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn make_engine(
    scene: &scrollax::Scene,
    selector: String,
    speed: i32,
) -> anyhow::Result<scrollax::Engine> {
    let config = scrollax::EngineConfig {
        selector,
        default_speed: scrollax::Speed::new(speed),
    };
    Ok(scrollax::Engine::new(scene, config)?)
}

/// Gate status for the scene's viewport, as a desktop embedder would see
/// it at load time.
fn report_device_gate(scene: &scrollax::Scene) {
    let profile = scrollax::DeviceProfile {
        orientation_api: false,
        viewport_width: scene.viewport.width,
    };
    eprintln!(
        "effect {} at width {}",
        if profile.supports_effect() {
            "enabled"
        } else {
            "disabled"
        },
        scene.viewport.width,
    );
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let engine = make_engine(&scene, args.selector, args.speed)?;

    eprintln!("{} target(s)", engine.targets().len());
    report_device_gate(&scene);

    serde_json::to_writer_pretty(std::io::stdout().lock(), engine.targets())
        .with_context(|| "write target report")?;
    println!();
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct TraceStep {
    scroll: f64,
    offsets: Vec<TraceOffset>,
}

#[derive(Debug, serde::Serialize)]
struct TraceOffset {
    node: scrollax::NodeId,
    y: Option<i32>,
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if args.step <= 0.0 {
        anyhow::bail!("--step must be > 0");
    }

    let mut scene = read_scene_json(&args.in_path)?;
    let mut engine = make_engine(&scene, args.selector, args.speed)?;
    report_device_gate(&scene);

    let mut scroll = args.from;
    while scroll <= args.to {
        scene.set_scroll_offset(scroll);
        engine.handle(&mut scene, scrollax::ViewportEvent::Frame)?;

        let offsets = engine
            .targets()
            .iter()
            .map(|t| TraceOffset {
                node: t.node,
                y: scene.transform_of(t.node).map(|tr| tr.y),
            })
            .collect();
        let line = serde_json::to_string(&TraceStep { scroll, offsets })
            .with_context(|| "serialize trace step")?;
        println!("{line}");

        scroll += args.step;
    }

    Ok(())
}
