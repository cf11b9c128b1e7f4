//! Interactive terminal play
//!
//! Alternates: display board, check for the end of the game, obtain an
//! action for the side to move, apply it. Each side can be driven by a
//! human, the optimal engine, or a uniform random mover.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use rand::prelude::IndexedRandom;

use crate::tictactoe::{self, Action, Game, Outcome, Player};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mover {
    /// Read actions from stdin as "row col"
    Human,
    /// Play the minimax-optimal action
    Engine,
    /// Play a uniformly random legal action
    Random,
}

#[derive(clap::Args)]
pub struct PlayArgs {
    /// Who plays X
    #[arg(long, value_enum, default_value_t = Mover::Human)]
    x: Mover,

    /// Who plays O
    #[arg(long, value_enum, default_value_t = Mover::Engine)]
    o: Mover,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut rng = rand::rng();
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let state = game.current_state()?;
        println!("\n{state}");

        if tictactoe::terminal(&state) {
            match game.outcome()? {
                Outcome::Win(player) => println!("\n{player} wins."),
                Outcome::Draw => println!("\nDraw."),
                Outcome::InProgress => bail!("terminal board reported an in-progress outcome"),
            }
            return Ok(());
        }

        let player = tictactoe::current_player(&state);
        let mover = match player {
            Player::X => args.x,
            Player::O => args.o,
        };

        let action = match mover {
            Mover::Engine => tictactoe::optimal_action(&state)
                .context("non-terminal position has an optimal action")?,
            Mover::Random => *tictactoe::legal_actions(&state)
                .choose(&mut rng)
                .context("non-terminal position has a legal action")?,
            Mover::Human => prompt_action(&mut input, &state, player)?,
        };

        println!("{player} plays {action}");
        game.play(action)?;
    }
}

/// Prompt until the human enters a legal "row col" pair
fn prompt_action(
    input: &mut impl BufRead,
    state: &tictactoe::Board,
    player: Player,
) -> Result<Action> {
    let legal = tictactoe::legal_actions(state);
    let threats = tictactoe::winning_actions(state, player.opponent());
    if !threats.is_empty() {
        let cells: Vec<String> = threats.iter().map(Action::to_string).collect();
        println!("{} threatens to win at {}", player.opponent(), cells.join(" "));
    }

    loop {
        print!("{player} to move (row col): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }

        match parse_action(&line) {
            Some(action) if legal.contains(&action) => return Ok(action),
            Some(action) => println!("{action} is not a legal move here"),
            None => println!("enter two numbers in 0-2, e.g. '1 1'"),
        }
    }
}

fn parse_action(line: &str) -> Option<Action> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("1 2"), Some(Action::new(1, 2)));
        assert_eq!(parse_action("  0   0  "), Some(Action::new(0, 0)));
        assert_eq!(parse_action("1"), None);
        assert_eq!(parse_action("1 2 3"), None);
        assert_eq!(parse_action("a b"), None);
    }

    #[test]
    fn test_prompt_action_rejects_illegal_then_accepts() {
        let board = tictactoe::Board::from_string("X........").unwrap();
        // First entry is occupied, second is legal
        let mut input = io::Cursor::new(b"0 0\n1 1\n".to_vec());
        let action = prompt_action(&mut input, &board, Player::O).unwrap();
        assert_eq!(action, Action::new(1, 1));
    }

    #[test]
    fn test_prompt_action_fails_on_closed_input() {
        let board = tictactoe::Board::initial();
        let mut input = io::Cursor::new(Vec::new());
        assert!(prompt_action(&mut input, &board, Player::X).is_err());
    }
}
