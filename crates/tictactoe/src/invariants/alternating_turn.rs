//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: players alternate turns, starting with X.
///
/// While the game is in progress the current player must hold the mark
/// that did not make the last move. After a terminal move the turn stays
/// with whoever made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if history.first().is_some_and(|first| first.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let current = session.current_player().mark();
        match history.last() {
            None => current == Mark::X,
            Some(last) if session.is_over() => current == last.mark,
            Some(last) => current == last.mark.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
