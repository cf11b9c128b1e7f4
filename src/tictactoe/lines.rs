//! Winning line analysis for Tic-Tac-Toe

use super::board::{Action, Board, Cell, Player};

/// Winning line coordinates on the 3x3 board, as (row, col) triples
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Check if a player has completed any line
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board.cell(r, c) == target))
}

/// Find all actions that would immediately complete a line for the player
pub fn winning_actions(board: &Board, player: Player) -> Vec<Action> {
    let mut actions = Vec::new();
    for line in &WINNING_LINES {
        if let Some(action) = winning_action_in_line(board, player, line) {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
    }
    actions
}

/// Find the completing move in a specific line, if one exists
fn winning_action_in_line(
    board: &Board,
    player: Player,
    line: &[(usize, usize); 3],
) -> Option<Action> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty = None;

    for &(r, c) in line {
        match board.cell(r, c) {
            Cell::Empty => {
                if empty.is_some() {
                    // More than one empty cell, not a completing move
                    return None;
                }
                empty = Some(Action::new(r, c));
            }
            cell if cell == target => count += 1,
            _ => return None, // Opponent mark in line
        }
    }

    if count == 2 { empty } else { None }
}
