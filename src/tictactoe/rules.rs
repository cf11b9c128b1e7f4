//! Pure rule functions: turn order, legal actions, and transitions

use super::board::{Action, Board, Cell, Player, SIZE};

/// Determine whose turn it is by counting marks.
///
/// X moves first, so X is to move whenever the counts are equal and O is to
/// move whenever X is ahead by one. This is recomputed on every call; the
/// board carries no turn field, so turn order can never desynchronize from
/// the board contents.
pub fn current_player(board: &Board) -> Player {
    let (x, o) = board.mark_counts();
    if x > o {
        Player::O
    } else {
        Player::X
    }
}

/// All actions whose target cell is empty, in row-major order.
///
/// The order is deterministic so that tie-breaking in the search is
/// reproducible. Returns an empty vector when the board is full.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    let mut actions = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            if board.cell(row, col) == Cell::Empty {
                actions.push(Action::new(row, col));
            }
        }
    }
    actions
}

/// Apply an action for the current player, returning the successor board.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAction`] if the action is not in
/// [`legal_actions`] for this board. This is a contract violation by the
/// caller (a stale action or unvalidated external input), not a recoverable
/// game condition.
pub fn apply_action(board: &Board, action: Action) -> Result<Board, crate::Error> {
    if !legal_actions(board).contains(&action) {
        return Err(crate::Error::InvalidAction {
            row: action.row,
            col: action.col,
        });
    }
    let mark = current_player(board).to_cell();
    board.with_move(action.row, action.col, mark)
}
