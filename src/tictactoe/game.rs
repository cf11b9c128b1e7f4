//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Action, Board, Player},
    evaluator::{self, Outcome},
    rules,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A complete game with history.
///
/// The current state and outcome are always derived by replaying the move
/// list through [`rules::apply_action`], so the history can never
/// desynchronize from the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the initial position
    pub fn new() -> Self {
        Game {
            initial: Board::initial(),
            moves: Vec::new(),
        }
    }

    /// Play an action for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, or
    /// [`crate::Error::InvalidAction`] if the action is not legal in the
    /// current position.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        let current = self.current_state()?;
        if evaluator::terminal(&current) {
            return Err(crate::Error::GameOver);
        }

        let player = rules::current_player(&current);
        rules::apply_action(&current, action)?;
        self.moves.push(Move { action, player });
        Ok(())
    }

    /// Get the current board state by replaying the history.
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position
    /// it is applied to. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for m in &self.moves {
            state = rules::apply_action(&state, m.action)?;
        }
        Ok(state)
    }

    /// Get the sequence of board states, starting with the initial position.
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position
    /// it is applied to. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for m in &self.moves {
            state = rules::apply_action(&state, m.action)?;
            states.push(state);
        }
        Ok(states)
    }

    /// Derive the outcome of the current position.
    ///
    /// # Errors
    ///
    /// Returns error if the history is corrupted (see [`Game::current_state`]).
    pub fn outcome(&self) -> Result<Outcome, crate::Error> {
        Ok(evaluator::outcome(&self.current_state()?))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
