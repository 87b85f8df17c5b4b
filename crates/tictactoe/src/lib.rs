//! Tic-tac-toe rules engine.
//!
//! This crate owns the game logic and nothing else: no terminal I/O,
//! no persistence. A driver composes the pieces like this:
//!
//! - **Board**: the 3x3 grid, placement, and win/tie detection
//! - **Player**: a name paired with a mark, optionally computer-controlled
//! - **Selector**: random and heuristic move selection for computer players
//! - **Session**: turn order and the in-progress/won/tied lifecycle
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, GameState, Mark, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let alice = Player::new("Alice", Mark::X)?;
//! let bob = Player::new("Bob", Mark::O)?;
//! let mut session = GameSession::new(alice, bob)?;
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.make_move(row, col)?;
//! }
//!
//! assert_eq!(session.state(), GameState::Won);
//! assert_eq!(session.winner().map(|p| p.name()), Some("Alice"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod player;
mod selector;
mod session;
mod types;

// Crate-level exports - Board
pub use board::{BOARD_SIZE, Board, LINES};

// Crate-level exports - Errors
pub use error::{MoveError, PlayerSetupError};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, SessionInvariants, StateMatchesBoardInvariant,
};

// Crate-level exports - Players
pub use player::{Player, PlayerKind, Strategy};

// Crate-level exports - Move selection
pub use selector::{MoveSelector, select_heuristic_move, select_random_move};

// Crate-level exports - Session management
pub use session::{GameSession, GameState, Move, SessionBuilder};

// Crate-level exports - Domain types
pub use types::{Cell, Mark, Position};
