//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Strategy;

/// Tic-Tac-Toe - Two players, one 3x3 board
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config; prompts for setup when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for computer move selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play computer-vs-computer games and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 100)]
        games: u32,

        /// Strategy for the X player (random, heuristic)
        #[arg(long = "x", default_value = "heuristic")]
        x_strategy: Strategy,

        /// Strategy for the O player (random, heuristic)
        #[arg(long = "o", default_value = "random")]
        o_strategy: Strategy,

        /// Seed for move selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            config: None,
            seed: None,
        }
    }
}
