//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Symbol identifying a player's placements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark `X` (moves first).
    X,
    /// Mark `O` (moves second).
    O,
}

impl Mark {
    /// Returns the complementary mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark as a character.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = MoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            other => Err(MoveError::InvalidMark(other)),
        }
    }
}

impl FromStr for Mark {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::try_from(c),
            (Some(c), Some(_)) => Err(MoveError::InvalidMark(c)),
            (None, _) => Err(MoveError::InvalidMark(' ')),
        }
    }
}

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark; never changes again.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(mark) => write!(f, "{}", mark),
        }
    }
}

/// A (row, column) coordinate on the board.
///
/// Positions are not range-checked on construction; the board decides
/// whether a coordinate is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// Corners in the order the heuristic tries them.
    pub const CORNERS: [Position; 4] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 2 },
    ];

    /// Edges in the order the heuristic tries them.
    pub const EDGES: [Position; 4] = [
        Position { row: 0, col: 1 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 1 },
    ];

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..3).flat_map(|row| (0..3).map(move |col| Position { row, col }))
    }

    /// Returns the coordinate pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
