use anyhow::{Context, Result};
use clap::Parser;
use rock_snake::game::GameConfig;
use rock_snake::modes::PlayMode;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rock_snake")]
#[command(version, about = "Snake on a wrapping board, with an apple to eat and a rock to dodge")]
struct Cli {
    /// Write diagnostics to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the game, so logs only ever go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    log::info!("Starting with {:?}", config);

    let mut play_mode = PlayMode::new(config)?;
    play_mode.run().await?;

    Ok(())
}
