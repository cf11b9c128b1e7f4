//! Rule and evaluator invariants over every reachable position

use oxo::tictactoe::{self, Board, Cell, Player};

mod common;

#[test]
fn turn_alternates_after_every_transition() {
    for board in common::reachable_boards() {
        if tictactoe::terminal(&board) {
            continue;
        }
        let mover = tictactoe::current_player(&board);
        for action in tictactoe::legal_actions(&board) {
            let child = tictactoe::apply_action(&board, action).unwrap();
            assert_ne!(
                tictactoe::current_player(&child),
                mover,
                "turn must alternate after applying {action} to {}",
                board.encode()
            );
        }
    }
}

#[test]
fn legal_action_count_matches_empty_cells() {
    for board in common::reachable_boards() {
        assert_eq!(
            tictactoe::legal_actions(&board).len(),
            board.empty_count(),
            "legal actions must be exactly the empty cells of {}",
            board.encode()
        );
    }
}

#[test]
fn initial_board_has_nine_actions_and_full_board_none() {
    assert_eq!(tictactoe::legal_actions(&Board::initial()).len(), 9);

    let full = Board::from_string("XOXXOOOXX").unwrap();
    assert!(tictactoe::legal_actions(&full).is_empty());
}

#[test]
fn transitions_change_exactly_the_target_cell() {
    for board in common::reachable_boards() {
        if tictactoe::terminal(&board) {
            continue;
        }
        let mark = tictactoe::current_player(&board).to_cell();
        for action in tictactoe::legal_actions(&board) {
            let child = tictactoe::apply_action(&board, action).unwrap();
            assert_eq!(child.get(action.row, action.col).unwrap(), mark);

            for row in 0..3 {
                for col in 0..3 {
                    if (row, col) != (action.row, action.col) {
                        assert_eq!(
                            child.get(row, col).unwrap(),
                            board.get(row, col).unwrap(),
                            "cell ({row}, {col}) must carry over unchanged"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn read_accessors_are_idempotent() {
    for board in common::reachable_boards() {
        let before = board;
        assert_eq!(tictactoe::winner(&board), tictactoe::winner(&board));
        assert_eq!(tictactoe::terminal(&board), tictactoe::terminal(&board));
        if tictactoe::terminal(&board) {
            assert_eq!(tictactoe::utility(&board), tictactoe::utility(&board));
        }
        assert_eq!(board, before, "read accessors must not mutate the board");
    }
}

#[test]
fn utility_is_signed_and_consistent_with_winner() {
    for board in common::reachable_boards() {
        if !tictactoe::terminal(&board) {
            continue;
        }
        let utility = tictactoe::utility(&board);
        assert!((-1..=1).contains(&utility));
        assert_eq!(utility == 1, tictactoe::winner(&board) == Some(Player::X));
        assert_eq!(utility == -1, tictactoe::winner(&board) == Some(Player::O));
        assert_eq!(utility == 0, tictactoe::winner(&board).is_none());
    }
}

#[test]
fn completed_line_ends_the_game_before_the_board_fills() {
    // O completes the left column with three cells still empty
    let board = Board::from_string("OX.OX.O.X").unwrap();
    assert!(board.empty_count() > 0);
    assert!(tictactoe::terminal(&board));
    assert_eq!(tictactoe::winner(&board), Some(Player::O));
}

#[test]
fn reachable_boards_never_break_the_count_invariant() {
    for board in common::reachable_boards() {
        let (x, o) = board.mark_counts();
        assert!(
            x == o || x == o + 1,
            "board {} violates the mark-count invariant",
            board.encode()
        );
        let empty = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| board.get(r, c).unwrap() == Cell::Empty)
            .count();
        assert_eq!(empty, 9 - x - o);
    }
}
