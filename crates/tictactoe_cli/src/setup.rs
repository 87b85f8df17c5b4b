//! Interactive player setup.

use crate::config::{GameConfig, PlayerConfig, PlayerType, default_name};
use crate::console::Console;
use std::io::{self, BufRead, Write};
use tictactoe::{Mark, Strategy};
use tracing::{info, instrument};

/// Asks for both seats: kind and name for X then O, then strategies for
/// any computer seats.
#[instrument(skip(console))]
pub fn prompt_game_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<GameConfig> {
    let kind_x = ask_player_type(console, Mark::X)?;
    let name_x = ask_name(console, Mark::X, kind_x)?;
    let kind_o = ask_player_type(console, Mark::O)?;
    let name_o = ask_name(console, Mark::O, kind_o)?;

    let strategy_x = ask_strategy(console, Mark::X, kind_x)?;
    let strategy_o = ask_strategy(console, Mark::O, kind_o)?;

    info!(%kind_x, %kind_o, "Players configured");
    Ok(GameConfig::new(
        PlayerConfig::new(Some(name_x), kind_x, strategy_x),
        PlayerConfig::new(Some(name_o), kind_o, strategy_o),
        None,
    ))
}

fn ask_player_type<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mark: Mark,
) -> io::Result<PlayerType> {
    loop {
        let answer = console.ask(
            &format!("Is Player {} human or computer? [h/c]: ", mark),
            "h",
        )?;
        match answer.to_lowercase().as_str() {
            "h" => return Ok(PlayerType::Human),
            "c" => return Ok(PlayerType::Computer),
            _ => console.say("Please enter 'h' or 'c'.")?,
        }
    }
}

fn ask_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mark: Mark,
    kind: PlayerType,
) -> io::Result<String> {
    console.ask(
        &format!("Enter name for Player {}: ", mark),
        &default_name(kind, mark),
    )
}

// Anything other than "r" means the heuristic player.
fn ask_strategy<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mark: Mark,
    kind: PlayerType,
) -> io::Result<Strategy> {
    if kind == PlayerType::Human {
        return Ok(Strategy::Heuristic);
    }
    let answer = console.ask(
        &format!("Should Player {} be smart or random? [s/r]: ", mark),
        "s",
    )?;
    Ok(if answer.eq_ignore_ascii_case("r") {
        Strategy::Random
    } else {
        Strategy::Heuristic
    })
}
