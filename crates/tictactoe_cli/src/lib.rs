//! Terminal front end for the tictactoe engine.
//!
//! Holds everything that talks to a person: setup prompts, board
//! rendering, the interactive loop, and TOML game configs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod driver;
mod render;
mod setup;
mod simulate;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, PlayerConfig, PlayerType, default_name};
pub use console::Console;
pub use driver::{InputError, Outcome, parse_move, play, run_game};
pub use render::{COLUMN_HEADER, render_board};
pub use setup::prompt_game_config;
pub use simulate::{SimulationSummary, simulate};
