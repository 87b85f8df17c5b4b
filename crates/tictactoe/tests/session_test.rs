//! Tests for full games played through the session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe::{
    Board, Cell, GameSession, GameState, InvariantSet, Mark, MoveError, MoveSelector, Player,
    SessionInvariants, Strategy, select_random_move,
};

fn alice_and_bob() -> GameSession {
    GameSession::new(
        Player::new("Alice", Mark::X).unwrap(),
        Player::new("Bob", Mark::O).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_row_win_scenario() {
    let mut session = alice_and_bob();
    session.make_move(0, 0).unwrap();
    session.make_move(2, 2).unwrap();
    session.make_move(0, 1).unwrap();
    session.make_move(2, 0).unwrap();
    assert_eq!(session.make_move(0, 2), Ok(GameState::Won));

    let winner = session.winner().expect("Row win should have a winner");
    assert_eq!(winner.mark(), Mark::X);
    assert_eq!(winner.name(), "Alice");
}

#[test]
fn test_full_board_tie_scenario() {
    let mut session = alice_and_bob();
    // X O X / X O O / O X X
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
        session.make_move(row, col).unwrap();
    }
    assert_eq!(session.board().winner(), None);
    assert!(session.board().is_full());
    assert_eq!(session.state(), GameState::Tied);
    assert!(session.winner().is_none());
}

#[test]
fn test_out_of_range_always_invalid_position() {
    let mut session = alice_and_bob();
    for (row, col) in [(1, 1), (0, 0), (2, 2)] {
        assert_eq!(
            session.make_move(3, 0),
            Err(MoveError::InvalidPosition { row: 3, col: 0 })
        );
        session.make_move(row, col).unwrap();
    }
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = alice_and_bob();
        let mut previous = session.board().clone();

        while !session.is_over() {
            let mover = session.current_player().mark();
            let position = select_random_move(session.board(), &mut rng)
                .expect("In-progress game has an empty cell");

            // Occasionally poke at a taken or off-board cell first.
            if rng.random_bool(0.2) {
                let _ = session.make_move(rng.random_range(0..5), rng.random_range(0..5));
                if session.current_player().mark() != mover {
                    continue;
                }
            }

            if !session.is_valid_move(position.row, position.col) {
                continue;
            }
            let state = session.play(position).unwrap();

            for p in tictactoe::Position::all() {
                if let Cell::Marked(mark) = previous.cell(p) {
                    assert_eq!(session.board().cell(p), Cell::Marked(mark));
                }
            }
            if state == GameState::InProgress {
                assert_ne!(session.current_player().mark(), mover);
            }
            assert_eq!(
                session.board().is_game_over(),
                session.board().winner().is_some() || session.board().is_full()
            );
            assert!(SessionInvariants::check_all(&session).is_ok());
            previous = session.board().clone();
        }

        let frozen = session.board().clone();
        assert_eq!(session.make_move(1, 1), Err(MoveError::SessionAlreadyOver));
        assert_eq!(session.board(), &frozen);
        assert!(session.history().len() <= 9);
    }
}

#[test]
fn test_heuristic_self_play_ties() {
    let mut session = GameSession::new(
        Player::computer("Bot X", Mark::X, Strategy::Heuristic).unwrap(),
        Player::computer("Bot O", Mark::O, Strategy::Heuristic).unwrap(),
    )
    .unwrap();
    let mut selector = MoveSelector::seeded(0);

    while !session.is_over() {
        let player = session.current_player().clone();
        let position = selector
            .select_for(session.board(), &player)
            .expect("Computer player must find a move");
        session.play(position).unwrap();
    }

    assert_eq!(session.state(), GameState::Tied);
    assert_eq!(session.history().len(), 9);
}

#[test]
fn test_board_snapshot_is_independent() {
    let mut session = alice_and_bob();
    session.make_move(0, 0).unwrap();
    let snapshot: Board = session.board().clone();
    session.make_move(1, 1).unwrap();
    assert!(snapshot.is_empty(1, 1));
    assert!(!session.board().is_empty(1, 1));
}
