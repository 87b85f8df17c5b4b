//! Computer-vs-computer batches.

use derive_getters::Getters;
use tictactoe::{GameSession, GameState, Mark, MoveSelector, Player, PlayerSetupError, Strategy};
use tracing::{debug, info, instrument};

/// Tally of a simulation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct SimulationSummary {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl SimulationSummary {
    fn record(&mut self, session: &GameSession) {
        self.games += 1;
        match (session.state(), session.board().winner()) {
            (GameState::Won, Some(Mark::X)) => self.x_wins += 1,
            (GameState::Won, Some(Mark::O)) => self.o_wins += 1,
            _ => self.ties += 1,
        }
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played: {}", self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "Ties: {}", self.ties)
    }
}

/// Plays `games` games between two computer players.
///
/// One selector drives the whole batch, so a seed fixes every game.
#[instrument]
pub fn simulate(
    games: u32,
    x_strategy: Strategy,
    o_strategy: Strategy,
    seed: Option<u64>,
) -> Result<SimulationSummary, PlayerSetupError> {
    let player_x = Player::computer(format!("Computer X ({})", x_strategy), Mark::X, x_strategy)?;
    let player_o = Player::computer(format!("Computer O ({})", o_strategy), Mark::O, o_strategy)?;
    let mut selector = MoveSelector::from_seed(seed);
    let mut summary = SimulationSummary::default();

    for game in 0..games {
        let mut session = GameSession::new(player_x.clone(), player_o.clone())?;
        while !session.is_over() {
            let player = session.current_player().clone();
            let Some(position) = selector.select_for(session.board(), &player) else {
                break;
            };
            if let Err(e) = session.play(position) {
                debug!(game, error = %e, "Selector produced an illegal move");
                break;
            }
        }
        summary.record(&session);
    }

    info!(
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        ties = summary.ties,
        "Simulation finished"
    );
    Ok(summary)
}
