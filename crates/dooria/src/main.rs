//! Dooria maze generator
//!
//! Generates a level, prints it, and runs it through an in-memory placer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dooria_core::level::{MazeConfig, Placement, Placer, build};
use dooria_core::maze::generate;
use dooria_core::{CELL_SIZE, GameRng, PlacementFailed};

#[derive(Parser, Debug)]
#[command(name = "dooria", about = "Generate a Dooria maze level")]
struct Args {
    /// JSON file with maze scaling settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level number used to scale the configured size
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Row count, overriding the configured size (odd)
    #[arg(long)]
    rows: Option<usize>,

    /// Column count, overriding the configured size (odd)
    #[arg(long)]
    cols: Option<usize>,

    /// Exit count, overriding the configuration
    #[arg(short, long)]
    exits: Option<usize>,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the maze as JSON instead of the character grid
    #[arg(long)]
    json: bool,
}

/// Keeps every placement in memory, handing back its index
#[derive(Default)]
struct PlacementLog {
    placed: Vec<Placement>,
}

impl Placer for PlacementLog {
    type Handle = usize;

    fn place(&mut self, placement: Placement) -> Result<usize, PlacementFailed> {
        self.placed.push(placement);
        Ok(self.placed.len() - 1)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<MazeConfig> {
    let Some(path) = path else {
        return Ok(MazeConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: MazeConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let params = config.params_for_level(args.level)?;
    let rows = args.rows.unwrap_or(params.rows);
    let cols = args.cols.unwrap_or(params.cols);
    let exits = args.exits.unwrap_or(config.exit_count);

    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(
        "level {} ({rows}x{cols}, {exits} exits, trap density {:.2}, seed {})",
        params.level,
        params.trap_density,
        rng.seed()
    );

    let maze = generate(rows, cols, exits, &mut rng).context("generating maze")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&maze)?);
    } else {
        println!("{maze}");
    }

    let mut log = PlacementLog::default();
    let report = build(&maze, &mut log).context("building level")?;
    info!(
        "placed {} floors, {} obstructions, {} doors, {} spawn",
        report.floors, report.obstructions, report.doors, report.spawns
    );

    if let Some(Placement::Spawn { cell }) = log
        .placed
        .iter()
        .find(|p| matches!(p, Placement::Spawn { .. }))
    {
        let [x, y, z] = cell.world_position(CELL_SIZE);
        info!("player starts at {cell} (world {x}, {y}, {z})");
    }

    Ok(())
}
