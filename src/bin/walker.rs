//! Field-of-view walker - explore an arena with a 120 degree view cone

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use delve::config::DEFAULT_CONFIG_PATH;
use delve::game::WalkerSession;
use delve::term::CrosstermConsole;
use delve::{GameConfig, Grid};

#[derive(Debug, Parser)]
#[command(version, about = "Walk an arena and see only what is in front of you")]
struct Args {
    /// RON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to a file so output does not tear the raw-mode screen
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("walker.log")
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
    }

    log::info!("Starting walker v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load_or_default(&args.config);
    let mut session = WalkerSession::new(Grid::walker_arena(), config.walker);
    let mut console = CrosstermConsole::new();

    let result = session.run(&mut console);
    match result {
        Ok(()) => {
            log::info!("Walker shut down cleanly");
            Ok(())
        }
        Err(e) => {
            log::error!("Walker exited with error: {}", e);
            Err(e.into())
        }
    }
}
