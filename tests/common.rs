//! Shared helpers for integration tests

use std::collections::HashSet;

use oxo::tictactoe::{self, Board};

/// Enumerate every board reachable from the initial position under legal
/// play, stopping expansion at terminal boards (which are still included).
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut stack = vec![Board::initial()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board.encode()) {
            continue;
        }
        boards.push(board);
        if tictactoe::terminal(&board) {
            continue;
        }
        for action in tictactoe::legal_actions(&board) {
            stack.push(tictactoe::apply_action(&board, action).unwrap());
        }
    }

    boards
}

#[test]
fn test_reachable_boards_count() {
    // The well-known count of distinct legal Tic-Tac-Toe positions,
    // excluding play continuing past a completed line
    assert_eq!(reachable_boards().len(), 5478);
}
