//! Terminal-state detection, winner detection, and numeric utility

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines,
};

/// Outcome of a position, derived from the board and never stored on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

/// Get the winner if there is one.
///
/// Checks X before O; under legal play at most one player can have a
/// completed line, so the check order never affects the result.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| lines::has_won(board, player))
}

/// Check if the game is over (completed line or full board).
///
/// A completed line ends the game even while empty cells remain.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Signed utility of a terminal board: +1 if X won, -1 if O won, 0 for a draw.
///
/// Precondition: `terminal(board)` is true. Not re-validated here; a
/// non-terminal board simply evaluates to 0 like a draw.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Derive the full outcome of a position
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
