//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - An immutable board representation with derived turn order
//! - Pure rule functions (current player, legal actions, transitions)
//! - Terminal-state evaluation and game-theoretic utility
//! - Exact alpha-beta minimax search for the optimal action
//! - A CLI driver for solving positions and playing interactively

pub mod cli;
pub mod error;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{Action, Board, Cell, Outcome, Player};
