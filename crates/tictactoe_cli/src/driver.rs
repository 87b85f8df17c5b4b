//! Interactive game loop.
//!
//! Humans type moves as `row,col`; computer seats ask the
//! [`MoveSelector`]. The loop ends on a win, a tie, or end of input.

use crate::config::GameConfig;
use crate::console::Console;
use crate::render::render_board;
use crate::setup::prompt_game_config;
use anyhow::{Context, Result};
use derive_more::Display;
use std::io::{BufRead, Write};
use tictactoe::{GameSession, GameState, Mark, MoveError, MoveSelector, Position};
use tracing::{debug, info, instrument};

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// Winner's name.
        name: String,
        /// Winner's mark.
        mark: Mark,
    },
    /// The board filled without a line.
    Tied,
    /// Input ran out before the game ended.
    Aborted,
}

/// Why a line of human input is not a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputError {
    /// Not exactly two comma-separated parts.
    #[display("Invalid input. Please enter as row,col (Example: 1,2)")]
    Format,
    /// One of the parts is not an integer.
    #[display("Invalid numbers. Try again.")]
    Numbers,
}

/// Parses `row,col` as 32-bit integers. Whitespace around each part is
/// ignored and trailing empty parts are dropped, so `1,` is a format error.
pub fn parse_move(line: &str) -> Result<(i32, i32), InputError> {
    let mut parts: Vec<&str> = line.trim().split(',').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    let [row, col] = parts.as_slice() else {
        return Err(InputError::Format);
    };
    let row = row.trim().parse().map_err(|_| InputError::Numbers)?;
    let col = col.trim().parse().map_err(|_| InputError::Numbers)?;
    Ok((row, col))
}

/// Sets up players (from `config` or by prompting), then plays one game.
#[instrument(skip(console, config))]
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: Option<GameConfig>,
    seed: Option<u64>,
) -> Result<Outcome> {
    let config = match config {
        Some(config) => config,
        None => prompt_game_config(console).context("Failed to read player setup")?,
    }
    .with_seed(seed);

    let mut session = config.build_session()?;
    let mut selector = MoveSelector::from_seed(*config.seed());

    console.say("")?;
    console.say(format!(
        "Starting Tic-Tac-Toe: {} (X) vs {} (O)",
        session.player_x().name(),
        session.player_o().name()
    ))?;
    console.say(render_board(session.board()))?;

    run_game(console, &mut session, &mut selector)
}

/// Plays a session to completion.
#[instrument(skip_all)]
pub fn run_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
    selector: &mut MoveSelector,
) -> Result<Outcome> {
    loop {
        match session.state() {
            GameState::Won => return announce_winner(console, session),
            GameState::Tied => {
                console.say("It's a draw.")?;
                return Ok(Outcome::Tied);
            }
            GameState::InProgress => {}
        }

        let player = session.current_player().clone();
        let (row, col) = if player.is_computer() {
            let Some(position) = selector.select_for(session.board(), &player) else {
                console.say("No available moves. It's a draw.")?;
                return Ok(Outcome::Tied);
            };
            console.say(format!("{} plays: {}", player, position))?;
            match (i32::try_from(position.row), i32::try_from(position.col)) {
                (Ok(row), Ok(col)) => (row, col),
                _ => anyhow::bail!("Selected position {} does not fit the board", position),
            }
        } else {
            console.prompt(format!(
                "{}, enter your move as row,col [0,2]: ",
                player
            ))?;
            let Some(line) = console.read_line()? else {
                console.say("")?;
                console.say("No input detected. Exiting.")?;
                info!("Game aborted on end of input");
                return Ok(Outcome::Aborted);
            };
            match parse_move(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    debug!(%line, error = ?e, "Rejected input");
                    console.say(e.to_string())?;
                    continue;
                }
            }
        };

        // Negative coordinates are reported like any other off-board position.
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            console.say(format!(
                "Position ({}, {}) is out of bounds. Try again.",
                row, col
            ))?;
            continue;
        };

        match session.play(Position::new(r, c)) {
            Ok(state) => {
                console.say("")?;
                console.say(render_board(session.board()))?;
                debug!(%state, "Move applied");
            }
            Err(MoveError::SessionAlreadyOver) => {
                console.say("Game is already over. Invalid move.")?;
                return Ok(Outcome::Aborted);
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                console.say(format!("{}. Try again.", e))?;
            }
        }
    }
}

fn announce_winner<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> Result<Outcome> {
    let winner = session
        .winner()
        .context("Won session has no winning player")?;
    console.say(format!("Winner: {}", winner))?;
    info!(winner = %winner, "Game won");
    Ok(Outcome::Won {
        name: winner.name().to_string(),
        mark: winner.mark(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1,2"), Ok((1, 2)));
        assert_eq!(parse_move("  0 , 2 "), Ok((0, 2)));
        assert_eq!(parse_move("-1,4"), Ok((-1, 4)));
        assert_eq!(parse_move("1 2"), Err(InputError::Format));
        assert_eq!(parse_move("1,2,3"), Err(InputError::Format));
        assert_eq!(parse_move(""), Err(InputError::Format));
        assert_eq!(parse_move("a,b"), Err(InputError::Numbers));
        assert_eq!(parse_move(",2"), Err(InputError::Numbers));
        assert_eq!(parse_move("1,"), Err(InputError::Format));
    }

    #[test]
    fn test_parse_move_rejects_overflow() {
        assert_eq!(parse_move("3000000000,0"), Err(InputError::Numbers));
        assert_eq!(parse_move("0,-3000000000"), Err(InputError::Numbers));
        assert_eq!(parse_move("2147483647,0"), Ok((i32::MAX, 0)));
    }
}
