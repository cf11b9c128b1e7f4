//! Alpha-beta minimax search for the optimal action
//!
//! X maximizes utility (+1 for an X win) and O minimizes it. The recursion
//! threads the alpha/beta bounds by value, so sibling branches never share
//! mutable state; every recursive call removes one empty cell, bounding the
//! depth at 9.

use super::{
    board::{Action, Board, Player},
    evaluator, rules,
};

/// Compute the game-theoretically optimal action for the current player.
///
/// Returns `None` on a terminal board: there is no move to make, and the
/// caller is expected to have checked [`evaluator::terminal`] first. This is
/// a tolerated no-op rather than an error. On any non-terminal board the
/// result is always `Some`.
///
/// Ties are broken deterministically: among equally good actions, the first
/// in the row-major enumeration of [`rules::legal_actions`] wins.
pub fn optimal_action(board: &Board) -> Option<Action> {
    if evaluator::terminal(board) {
        return None;
    }
    let (_, action) = match rules::current_player(board) {
        Player::X => max_value(board, i32::MIN, i32::MAX),
        Player::O => min_value(board, i32::MIN, i32::MAX),
    };
    action
}

/// Compute the exact minimax value of a position.
///
/// Alpha-beta pruning never changes this value, only the number of nodes
/// visited. Terminal boards evaluate to their utility.
pub fn position_value(board: &Board) -> i32 {
    if evaluator::terminal(board) {
        return evaluator::utility(board);
    }
    match rules::current_player(board) {
        Player::X => max_value(board, i32::MIN, i32::MAX).0,
        Player::O => min_value(board, i32::MIN, i32::MAX).0,
    }
}

/// Compute the optimal line of play from a position to its end.
///
/// Both sides take their optimal action until the board is terminal. Empty
/// for a terminal board.
pub fn principal_variation(board: &Board) -> Vec<Action> {
    let mut line = Vec::new();
    let mut state = *board;
    while let Some(action) = optimal_action(&state) {
        state = rules::apply_action(&state, action)
            .expect("optimal action is legal in the position it was computed for");
        line.push(action);
    }
    line
}

fn max_value(board: &Board, mut alpha: i32, beta: i32) -> (i32, Option<Action>) {
    if evaluator::terminal(board) {
        return (evaluator::utility(board), None);
    }

    let mut v = i32::MIN;
    let mut best = None;

    for action in rules::legal_actions(board) {
        let child = rules::apply_action(board, action)
            .expect("actions from legal_actions apply cleanly");
        let (child_value, _) = min_value(&child, alpha, beta);
        // Strict inequality: the first action achieving the maximum wins ties
        if child_value > v {
            v = child_value;
            best = Some(action);
        }
        alpha = alpha.max(v);
        if v >= beta {
            // Beta cutoff: the opponent already has a better alternative
            break;
        }
    }

    (v, best)
}

fn min_value(board: &Board, alpha: i32, mut beta: i32) -> (i32, Option<Action>) {
    if evaluator::terminal(board) {
        return (evaluator::utility(board), None);
    }

    let mut v = i32::MAX;
    let mut best = None;

    for action in rules::legal_actions(board) {
        let child = rules::apply_action(board, action)
            .expect("actions from legal_actions apply cleanly");
        let (child_value, _) = max_value(&child, alpha, beta);
        if child_value < v {
            v = child_value;
            best = Some(action);
        }
        beta = beta.min(v);
        if v <= alpha {
            // Alpha cutoff
            break;
        }
    }

    (v, best)
}
