use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::info;
use versics::{ParticleHandle, SolverConfig, Vec2, World, WorldConfig};

mod scenes;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Example {
    /// Rope anchored at one end carrying a braced box.
    Swing,
    /// Cloth hanging from its top corners.
    Cloth,
    /// Rope dragged across the box by a pinned end, then released.
    Drag,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(value_enum, default_value = "swing")]
    example: Example,
    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 300)]
    frames: usize,
    /// Log positions every N frames.
    #[arg(long, default_value_t = 30)]
    report_every: usize,
    /// JSON file with optional `world` and `solver` sections.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DemoConfig {
    world: WorldConfig,
    solver: SolverConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let mut world = World::from_config(config.world)?;
    let body = match args.example {
        Example::Swing => scenes::swing(config.solver)?,
        Example::Cloth => scenes::cloth(12, 10, 20.0, Vec2::new(280.0, 60.0), config.solver)?,
        Example::Drag => scenes::rope(10, 25.0, Vec2::new(100.0, world.bounds().height), config.solver)?,
    };
    let idx = world.add_body(body);
    info!(example = ?args.example, frames = args.frames, "running example");

    // The drag example grabs whatever sits under the cursor's start point
    let grabbed = match args.example {
        Example::Drag => world.closest_particle_within(Vec2::new(100.0, world.bounds().height), 10.0),
        _ => None,
    };
    if let Some(handle) = grabbed {
        info!(body = handle.body, particle = handle.particle, "grabbed particle");
    }

    let report_every = args.report_every.max(1);
    for frame in 0..args.frames {
        if let Some(handle) = grabbed {
            drag(&mut world, handle, frame, args.frames)?;
        }
        world.step();

        if frame % report_every == 0 {
            report(&world, idx, frame);
        }
    }

    let body = world.body(idx).context("example body vanished")?;
    info!(link_error = body.link_error(), "simulation finished");
    Ok(())
}

/// Sweeps a grabbed particle along a circle and lets go halfway through the run.
fn drag(world: &mut World, handle: ParticleHandle, frame: usize, frames: usize) -> Result<()> {
    let bounds = world.bounds();
    let center = Vec2::new(bounds.width * 0.5, bounds.height * 0.5);
    let release = frames / 2;
    let body = world.body_mut(handle.body).context("grabbed body vanished")?;

    if frame < release {
        let angle = frame as f64 * 0.05;
        let target = center + Vec2::new(angle.cos(), angle.sin()) * (bounds.width * 0.3);
        body.pin(handle.particle, target)?;
    } else if frame == release && body.is_locked(handle.particle) {
        body.unpin(handle.particle)?;
        info!(frame, particle = handle.particle, "released particle");
    }
    Ok(())
}

fn report(world: &World, idx: usize, frame: usize) {
    let Some(body) = world.body(idx) else {
        return;
    };
    let positions = body.positions();
    let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
        return;
    };
    info!(
        frame,
        first_x = first.x,
        first_y = first.y,
        last_x = last.x,
        last_y = last.y,
        link_error = body.link_error(),
        "frame"
    );
}
