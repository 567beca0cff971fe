use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "loopstrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive the engine headlessly and print the projection after each settle.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Items JSON: an array of { id, image_ref, alt_text }.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of advance cycles to simulate.
    #[arg(long, default_value_t = 6)]
    cycles: u32,

    /// Viewport width in px.
    #[arg(long, default_value_t = 1200.0)]
    viewport: f64,

    /// Config JSON overriding the default tunables.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct CycleReport {
    cycle: u32,
    center: usize,
    center_item: Option<usize>,
    frames: Vec<loopstrip::SlotFrame>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open items '{}'", args.in_path.display()))?;
    let items: Vec<loopstrip::Item> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse items JSON")?;

    let cfg = match &args.config {
        None => loopstrip::CarouselConfig::default(),
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse config JSON")?
        }
    };

    let interval = cfg.autoplay_interval_ms;
    let duration = cfg.transition_duration_ms;
    let mut engine = loopstrip::CarouselEngine::new(&items, cfg, args.viewport, 0)?;

    let mut reports = Vec::with_capacity(args.cycles as usize);
    let mut now = 0u64;
    for cycle in 0..args.cycles {
        now += interval;
        let update = engine.poll(now);
        if update.needs_render {
            now += duration;
            let mut update = engine.transition_finished();
            while update.wants_frame_ticks {
                update = engine.frame_tick();
            }
        }
        reports.push(CycleReport {
            cycle,
            center: engine.center(),
            center_item: engine.center_item_index(),
            frames: engine.frames(),
        });
    }
    engine.stop();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    eprintln!("simulated {} cycles", args.cycles);
    Ok(())
}
