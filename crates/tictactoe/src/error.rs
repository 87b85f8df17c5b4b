//! Error types for board placement and session setup.

use derive_more::{Display, Error};
use std::convert::Infallible;
use tracing::instrument;

/// Reason a placement or move was rejected.
///
/// Every variant is recoverable: the caller reports it and asks again
/// (or stops, for [`MoveError::SessionAlreadyOver`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Position ({row}, {col}) is out of bounds")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Position ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The supplied symbol is neither `X` nor `O`.
    #[display("Mark must be 'X' or 'O', got: {_0}")]
    InvalidMark(char),

    /// The session already reached a won or tied state.
    #[display("Game is already over")]
    SessionAlreadyOver,
}

impl std::error::Error for MoveError {}

// Lets `Board::place_mark` accept a `Mark` directly through `TryInto`.
impl From<Infallible> for MoveError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Invalid player or session setup, with the location that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Player setup error: {} at {}:{}", message, file, line)]
pub struct PlayerSetupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerSetupError {
    /// Creates a new setup error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
