//! Headless driver: builds a procedural world, releases a flock into it and
//! runs a fixed number of ticks.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use flock::{init_logging, seeded_flock, HeightField, NeighbourPolicy, SimulationConfig, World};

/// Ticks between progress reports.
const REPORT_INTERVAL: u64 = 100;

/// Runs a terrain-aware flocking simulation without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of ticks to run
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the terrain and flock seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the sea level
    #[arg(long, allow_hyphen_values = true)]
    sea_level: Option<f32>,

    /// Let boids pick themselves as their closest neighbour
    #[arg(long)]
    legacy_neighbours: bool,

    /// Write the final boid positions to stdout as JSON
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Snapshot {
    ticks: u64,
    sea_level: f32,
    positions: Vec<[f32; 3]>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let terrain = HeightField::perlin(
        config.terrain_size,
        config.terrain_size,
        terrain_seed(config.seed),
        config.z_scale,
    )
    .context("failed to build terrain")?;
    let world = World::new(&terrain, config.xy_scale, config.sea_level())
        .context("invalid world parameters")?;
    info!(
        "terrain {size}x{size}, heights {:.2}..{:.2}, sea level {:.2}",
        terrain.min_height(),
        terrain.max_height(),
        world.sea_level(),
        size = config.terrain_size,
    );

    let mut flock = seeded_flock(&config.spawn, config.xy_scale, config.seed)
        .with_policy(config.neighbour_policy);
    info!(
        "released {} boids ({:?}), running {} ticks of {:.4}s",
        flock.len(),
        flock.policy(),
        config.ticks,
        config.dt
    );

    for tick in 1..=config.ticks {
        flock.update(config.dt, &world);
        if tick % REPORT_INTERVAL == 0 {
            debug!("tick {tick}: centroid {:?}", flock.centroid());
        }
    }

    let over_water = flock
        .iter()
        .filter(|boid| boid.is_over_water(&world))
        .count();
    info!(
        "finished: centroid {:?}, {over_water} of {} boids over water",
        flock.centroid(),
        flock.len()
    );

    if args.dump {
        let snapshot = Snapshot {
            ticks: config.ticks,
            sea_level: world.sea_level(),
            positions: flock.positions().map(|p| p.to_array()).collect(),
        };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &snapshot)
            .context("failed to serialise snapshot")?;
        writeln!(stdout).context("failed to write snapshot")?;
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(level) = args.sea_level {
        config.sea_level = Some(level);
    }
    if args.legacy_neighbours {
        config.neighbour_policy = NeighbourPolicy::IncludeSelf;
    }

    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn terrain_seed(seed: u64) -> u32 {
    u32::try_from(seed & u64::from(u32::MAX)).unwrap_or_default()
}
