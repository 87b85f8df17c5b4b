//! The cached session state agrees with the board.

use super::Invariant;
use crate::{GameSession, GameState};

/// Invariant: the session state equals the state derived from its board.
pub struct StateMatchesBoardInvariant;

impl Invariant<GameSession> for StateMatchesBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        session.state() == GameState::from_board(session.board())
    }

    fn description() -> &'static str {
        "Session state matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Player};

    #[test]
    fn test_detects_stale_state() {
        let mut game = GameSession::new(
            Player::new("Alice", Mark::X).unwrap(),
            Player::new("Bob", Mark::O).unwrap(),
        )
        .unwrap();
        assert!(StateMatchesBoardInvariant::holds(&game));

        for col in 0..3 {
            game.board_mut().place_mark(0, col, Mark::X).unwrap();
        }
        assert!(!StateMatchesBoardInvariant::holds(&game));
    }
}
