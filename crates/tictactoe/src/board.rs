//! The 3x3 grid and its terminal conditions.

use crate::error::MoveError;
use crate::types::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 3;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    // Columns
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    // Diagonals
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever move from [`Cell::Empty`] to [`Cell::Marked`]; the single
/// mutator is [`Board::place_mark`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the coordinates lie on the board.
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Checks whether a cell is empty. Out-of-range coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.is_valid_position(row, col) && self.cells[row][col].is_empty()
    }

    /// Returns the cell state, or [`Cell::Empty`] for out-of-range coordinates.
    pub fn get_mark(&self, row: usize, col: usize) -> Cell {
        if !self.is_valid_position(row, col) {
            return Cell::Empty;
        }
        self.cells[row][col]
    }

    /// Returns the cell at a position (see [`Board::get_mark`]).
    pub fn cell(&self, position: Position) -> Cell {
        self.get_mark(position.row, position.col)
    }

    /// Places a mark on an empty cell.
    ///
    /// Accepts a [`Mark`] or anything that converts into one, such as a raw
    /// `char`. Checks run in order: position, occupancy, then the mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] if the coordinates are off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::InvalidMark`] if the symbol is neither `X` nor `O`
    #[instrument(skip(self, mark))]
    pub fn place_mark<M>(&mut self, row: usize, col: usize, mark: M) -> Result<(), MoveError>
    where
        M: TryInto<Mark>,
        MoveError: From<M::Error>,
    {
        if !self.is_valid_position(row, col) {
            return Err(MoveError::InvalidPosition { row, col });
        }

        if !self.cells[row][col].is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }

        let mark = mark.try_into()?;
        self.cells[row][col] = Cell::Marked(mark);
        debug!(row, col, %mark, "Placed mark");
        Ok(())
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the mark that fills a complete line, if any.
    ///
    /// Lines are scanned in [`LINES`] order: rows, columns, main diagonal,
    /// anti-diagonal.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cell(a).mark()?;
            (self.cell(b) == Cell::Marked(mark) && self.cell(c) == Cell::Marked(mark))
                .then_some(mark)
        })
    }

    /// Checks if the board has a winner or no empty cells.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|p| self.cell(*p).is_empty())
    }

    /// Number of cells holding a given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}  ", row)?;
            for (col, cell) in cells.iter().enumerate() {
                write!(f, "{}", cell)?;
                if col < BOARD_SIZE - 1 {
                    write!(f, " | ")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n  -----------\n")?;
            }
        }
        Ok(())
    }
}
