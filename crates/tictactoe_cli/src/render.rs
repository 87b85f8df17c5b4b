//! Board rendering for the terminal.

use tictactoe::Board;

/// Column header printed above the grid.
pub const COLUMN_HEADER: &str = "   0   1   2";

/// Renders the board with column and row labels.
pub fn render_board(board: &Board) -> String {
    format!("{}\n{}", COLUMN_HEADER, board)
}
