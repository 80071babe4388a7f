//! Dungeon generator - prints one freshly generated floor

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use delve::config::{export_default_config, DEFAULT_CONFIG_PATH};
use delve::render::render_dungeon;
use delve::{generate_dungeon, GameConfig, GenerationMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Connect rooms and place doors once, after all rooms are placed
    Deferred,
    /// Reconnect and redo doors after every placement attempt
    Incremental,
}

impl From<Mode> for GenerationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Deferred => GenerationMode::Deferred,
            Mode::Incremental => GenerationMode::Incremental,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Generate and print a room-and-corridor dungeon")]
struct Args {
    /// Seed for the generator; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// RON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured generation mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Write the default config to this path and exit
    #[arg(long, value_name = "PATH")]
    export_config: Option<PathBuf>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(path) = args.export_config {
        export_default_config(&path)
            .with_context(|| format!("exporting config to {}", path.display()))?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = GameConfig::load(&args.config)?.dungeon;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Generating dungeon with seed {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let dungeon = generate_dungeon(&mut rng, &config);

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_dungeon(&dungeon.grid).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
