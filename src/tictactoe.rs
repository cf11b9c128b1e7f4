//! Tic-Tac-Toe game implementation

pub mod board;
pub mod evaluator;
pub mod game;
pub mod lines;
pub mod rules;
pub mod search;

pub use board::{Action, Board, Cell, Player, SIZE};
pub use evaluator::{outcome, terminal, utility, winner, Outcome};
pub use game::{Game, Move};
pub use lines::{has_won, winning_actions, WINNING_LINES};
pub use rules::{apply_action, current_player, legal_actions};
pub use search::{optimal_action, position_value, principal_variation};
