//! Move selection for computer players.
//!
//! Both selectors read the board and never mutate it. Randomness is
//! injected so seeded generators give reproducible games.

use crate::board::{Board, LINES};
use crate::player::{Player, Strategy};
use crate::types::{Cell, Mark, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks a uniformly random empty cell, or `None` on a full board.
#[instrument(skip(board, rng))]
pub fn select_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empties: Vec<Position> = board.empty_positions().collect();
    let choice = empties.choose(rng).copied();
    debug!(candidates = empties.len(), ?choice, "Random move selected");
    choice
}

/// Picks a move by fixed priority: win, block, center, corner, edge.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board))]
pub fn select_heuristic_move(board: &Board, mark: Mark) -> Option<Position> {
    if let Some(win) = find_completing_move(board, mark) {
        debug!(position = %win, "Taking winning move");
        return Some(win);
    }

    if let Some(block) = find_completing_move(board, mark.opponent()) {
        debug!(position = %block, "Blocking opponent");
        return Some(block);
    }

    std::iter::once(Position::CENTER)
        .chain(Position::CORNERS)
        .chain(Position::EDGES)
        .find(|p| board.cell(*p).is_empty())
}

/// First empty cell (row-major) where `mark` would complete a line.
fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .find(|candidate| would_complete_line(board, *candidate, mark))
}

/// Speculative check: would `mark` at `candidate` fill any line through it?
///
/// Only lines passing through the candidate are considered, so diagonals are
/// checked only for cells on them.
fn would_complete_line(board: &Board, candidate: Position, mark: Mark) -> bool {
    LINES
        .iter()
        .filter(|line| line.contains(&candidate))
        .any(|line| {
            line.iter()
                .all(|p| *p == candidate || board.cell(*p) == Cell::Marked(mark))
        })
}

/// Move selector owning its random source.
///
/// Dispatches on [`Strategy`] and falls back to a random move when the
/// heuristic finds nothing.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Creates a selector seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible selector.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Picks a random empty cell.
    pub fn random_move(&mut self, board: &Board) -> Option<Position> {
        select_random_move(board, &mut self.rng)
    }

    /// Picks a move for `mark` using `strategy`.
    #[instrument(skip(self, board))]
    pub fn select(&mut self, board: &Board, strategy: Strategy, mark: Mark) -> Option<Position> {
        match strategy {
            Strategy::Random => self.random_move(board),
            Strategy::Heuristic => {
                select_heuristic_move(board, mark).or_else(|| self.random_move(board))
            }
        }
    }

    /// Picks a move for a computer player; `None` for humans or a full board.
    pub fn select_for(&mut self, board: &Board, player: &Player) -> Option<Position> {
        let strategy = player.strategy()?;
        self.select(board, strategy, player.mark())
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, symbol) in row.chars().enumerate() {
                if symbol != '.' {
                    board.place_mark(r, c, symbol).unwrap();
                }
            }
        }
        board
    }

    #[test]
    fn test_random_move_is_empty_cell() {
        let board = board_from(["XO.", "OX.", "XOX"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let choice = select_random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(choice.row, choice.col));
        }
    }

    #[test]
    fn test_random_move_single_candidate() {
        let board = board_from([".OX", "OXO", "OXO"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_random_move(&board, &mut rng), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_random_move_full_board() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_reaches_every_cell() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(select_random_move(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_heuristic_wins() {
        let board = board_from(["XX.", "...", "..."]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_heuristic_blocks() {
        let board = board_from(["...", "...", ".OO"]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        // O threatens (2,0); X wins at (0,2).
        let board = board_from(["XX.", "...", ".OO"]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_heuristic_diagonal_win() {
        let board = board_from(["XO.", ".X.", "O.."]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_heuristic_anti_diagonal_win() {
        let board = board_from(["X.O", "XO.", "..."]);
        assert_eq!(select_heuristic_move(&board, Mark::O), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_heuristic_diagonals_only_for_cells_on_them() {
        // (0,0) sits on the main diagonal with (1,1) but (2,2) is empty.
        let board = board_from(["...", ".X.", ".X."]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_heuristic_first_winning_cell_row_major() {
        let board = board_from(["XX.", "X..", "..."]);
        // (0,2) completes the top row, (2,0) the left column; row-major wins.
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_heuristic_center_on_empty_board() {
        assert_eq!(
            select_heuristic_move(&Board::new(), Mark::X),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn test_heuristic_corner_when_center_taken() {
        let board = board_from(["...", ".O.", "..."]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(0, 0)));

        let board = board_from(["X..", ".O.", "..."]);
        assert_eq!(select_heuristic_move(&board, Mark::O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_heuristic_edge_when_center_and_corners_taken() {
        let board = board_from(["XOX", ".OX", "OXO"]);
        assert_eq!(select_heuristic_move(&board, Mark::X), Some(Position::new(1, 0)));
        assert_eq!(select_heuristic_move(&board, Mark::O), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_heuristic_full_board() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(select_heuristic_move(&board, Mark::X), None);
    }

    #[test]
    fn test_selector_dispatch() {
        let mut selector = MoveSelector::seeded(3);
        let board = Board::new();
        assert_eq!(
            selector.select(&board, Strategy::Heuristic, Mark::X),
            Some(Position::CENTER)
        );
        let random = selector.select(&board, Strategy::Random, Mark::X).unwrap();
        assert!(board.is_empty(random.row, random.col));
    }

    #[test]
    fn test_selector_is_reproducible() {
        let board = Board::new();
        let mut a = MoveSelector::seeded(99);
        let mut b = MoveSelector::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.random_move(&board), b.random_move(&board));
        }
    }

    #[test]
    fn test_select_for_human_is_none() {
        let mut selector = MoveSelector::seeded(0);
        let human = Player::new("Alice", Mark::X).unwrap();
        let bot = Player::computer("Bot", Mark::O, Strategy::Heuristic).unwrap();
        assert_eq!(selector.select_for(&Board::new(), &human), None);
        assert_eq!(selector.select_for(&Board::new(), &bot), Some(Position::CENTER));
    }
}
