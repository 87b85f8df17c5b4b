//! Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tictactoe::Strategy;
use tictactoe_cli::{Cli, Command, Console, GameConfig, play, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { config, seed } => run_play(config, seed),
        Command::Simulate {
            games,
            x_strategy,
            o_strategy,
            seed,
        } => run_simulate(games, x_strategy, o_strategy, seed),
    }
}

/// Installs the fmt subscriber. Defaults to `warn` so logs stay out of the game text.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init(); // Don't panic if already initialized
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(); // Don't panic if already initialized
        }
    }
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = config
        .map(|path| {
            GameConfig::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        })
        .transpose()?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let outcome = play(&mut console, config, seed)?;
    info!(?outcome, "Game finished");
    Ok(())
}

/// Run a computer-vs-computer batch and print the tally
#[instrument]
fn run_simulate(
    games: u32,
    x_strategy: Strategy,
    o_strategy: Strategy,
    seed: Option<u64>,
) -> Result<()> {
    let summary = simulate(games, x_strategy, o_strategy, seed)?;
    println!("{}", summary);
    Ok(())
}
