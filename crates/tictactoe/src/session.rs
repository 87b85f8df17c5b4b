//! Game session: two players, one board, strict turn alternation.

use crate::board::Board;
use crate::error::{MoveError, PlayerSetupError};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::player::Player;
use crate::types::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameState {
    /// Moves are accepted.
    InProgress,
    /// A line was completed; terminal.
    Won,
    /// The board filled with no line; terminal.
    Tied,
}

impl GameState {
    /// Derives the state from a board.
    pub fn from_board(board: &Board) -> Self {
        if board.winner().is_some() {
            GameState::Won
        } else if board.is_full() {
            GameState::Tied
        } else {
            GameState::InProgress
        }
    }

    /// Checks if no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }
}

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Collects players before a session starts.
///
/// Players may be added in any order; `build` routes them by mark.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    players: Vec<Player>,
}

impl SessionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player.
    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Starts the session.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] unless exactly two players were added,
    /// one holding each mark, both with non-blank names.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub fn build(self) -> Result<GameSession, PlayerSetupError> {
        let count = self.players.len();
        if count != 2 {
            warn!(count, "Wrong number of players");
            return Err(PlayerSetupError::new(format!(
                "A session needs exactly two players, got {}",
                count
            )));
        }

        let mut players = self.players.into_iter();
        let (first, second) = match (players.next(), players.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(PlayerSetupError::new("Players cannot be missing")),
        };

        if first.mark() == second.mark() {
            warn!(mark = %first.mark(), "Duplicate marks");
            return Err(PlayerSetupError::new(format!(
                "Players must hold different marks, both hold {}",
                first.mark()
            )));
        }

        match first.mark() {
            Mark::X => GameSession::new(first, second),
            Mark::O => GameSession::new(second, first),
        }
    }
}

/// A game between two players.
///
/// The session is the only mutator of its board. Its state is cached and
/// recomputed once per accepted move; after `Won` or `Tied` nothing changes.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    player_x: Player,
    player_o: Player,
    current: Mark,
    state: GameState,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session. X always moves first.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if `player_x` does not hold X, `player_o`
    /// does not hold O, or either name is blank.
    #[instrument(skip_all, fields(player_x = %player_x, player_o = %player_o))]
    pub fn new(player_x: Player, player_o: Player) -> Result<Self, PlayerSetupError> {
        if player_x.mark() != Mark::X || player_o.mark() != Mark::O {
            warn!("Players hold the wrong marks");
            return Err(PlayerSetupError::new(
                "Player X must have mark 'X' and Player O must have mark 'O'",
            ));
        }

        debug_assert!(
            !player_x.name().trim().is_empty() && !player_o.name().trim().is_empty(),
            "Player names are validated on construction"
        );

        info!("Creating new game session");
        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            current: Mark::X,
            state: GameState::InProgress,
            history: Vec::new(),
        })
    }

    /// Returns a builder that accepts players in any order.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Returns the session state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player holding the turn.
    ///
    /// After a terminal move this stays on the player who made it.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player holding X.
    pub fn player_x(&self) -> &Player {
        &self.player_x
    }

    /// Returns the player holding O.
    pub fn player_o(&self) -> &Player {
        &self.player_o
    }

    /// Returns the player holding a mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the session reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Places the current player's mark at (row, col).
    ///
    /// On success returns the new state. The turn passes to the other
    /// player only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SessionAlreadyOver`] once the game is won or tied
    /// - any placement error from [`Board::place_mark`], unchanged
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.is_over() {
            warn!(state = %self.state, "Move attempted after game over");
            return Err(MoveError::SessionAlreadyOver);
        }

        let mark = self.current;
        self.board.place_mark(row, col, mark).inspect_err(|e| {
            debug!(error = %e, "Invalid move");
        })?;
        self.history.push(Move::new(mark, Position::new(row, col)));

        self.state = GameState::from_board(&self.board);
        if self.state == GameState::InProgress {
            self.current = mark.opponent();
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated after move"
        );

        info!(row, col, status = %self.state, "Move completed successfully");
        Ok(self.state)
    }

    /// Places the current player's mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::make_move`].
    pub fn play(&mut self, position: Position) -> Result<GameState, MoveError> {
        self.make_move(position.row, position.col)
    }

    /// Returns the winning player, only when the state is `Won`.
    pub fn winner(&self) -> Option<&Player> {
        if self.state != GameState::Won {
            return None;
        }
        self.board.winner().map(|mark| self.player(mark))
    }

    /// Checks if (row, col) would be accepted right now.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        let valid = self.state == GameState::InProgress && self.board.is_empty(row, col);
        debug!(row, col, valid, "Checked move");
        valid
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}

impl std::fmt::Display for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Current player: {}", self.current_player().name())?;
        write!(f, "{}", self.board)
    }
}
