//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: the board equals a replay of the move history.
///
/// Replaying fails if a move targets an already-marked cell, and the
/// replayed board differs if any cell was overwritten or cleared.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mov in session.history() {
            let (row, col) = mov.position.coords();
            if replayed.place_mark(row, col, mov.mark).is_err() {
                return false;
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
