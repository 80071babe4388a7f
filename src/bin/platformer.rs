//! Platformer - run and jump across a few platforms

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use delve::config::DEFAULT_CONFIG_PATH;
use delve::game::Platformer;
use delve::term::CrosstermConsole;
use delve::GameConfig;

#[derive(Debug, Parser)]
#[command(version, about = "A tiny side-scrolling platformer")]
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
        .open("platformer.log")
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
    }

    log::info!("Starting platformer v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load_or_default(&args.config);
    let mut game = Platformer::new(config.platformer);
    let mut console = CrosstermConsole::new();

    let result = game.run(&mut console);
    match result {
        Ok(()) => {
            log::info!("Platformer shut down cleanly");
            Ok(())
        }
        Err(e) => {
            log::error!("Platformer exited with error: {}", e);
            Err(e.into())
        }
    }
}
