//! Optimal play analysis
//!
//! Computes the minimax-optimal action, the exact position value, and the
//! principal variation for a position.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::{
    cli::output,
    tictactoe::{self, Action, Board},
};

#[derive(clap::Args)]
pub struct SolveArgs {
    /// Board position as 9 row-major characters ('.', 'X', 'O')
    #[arg(long)]
    board: Option<String>,

    /// Write the analysis as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SolveExport {
    board: String,
    to_move: tictactoe::Player,
    value: i32,
    optimal_action: Option<Action>,
    principal_variation: Vec<Action>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    output::print_section("Optimal play analysis");

    let board = match &args.board {
        Some(s) => {
            let board = Board::from_string(s)?;
            analyze_position(&board, "Custom position");
            board
        }
        None => {
            let empty = Board::initial();
            analyze_position(&empty, "Empty board");
            analyze_position(&Board::from_string("....X....")?, "Center taken by X");
            analyze_position(&Board::from_string("X........")?, "Corner taken by X");
            empty
        }
    };

    if let Some(path) = &args.export {
        let export = build_export(&board);
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

fn analyze_position(board: &Board, description: &str) {
    println!("\n{description}:");
    println!("{board}");

    if tictactoe::terminal(board) {
        println!("  (position is terminal: {})", describe_value(tictactoe::utility(board)));
        return;
    }

    let value = tictactoe::position_value(board);
    let action = tictactoe::optimal_action(board)
        .expect("non-terminal position has an optimal action");
    let line = tictactoe::principal_variation(board);

    output::print_kv("To move", &tictactoe::current_player(board).to_string());
    output::print_kv("Value", describe_value(value));
    output::print_kv("Optimal action", &action.to_string());
    output::print_kv(
        "Optimal line",
        &line
            .iter()
            .map(Action::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    );
}

fn describe_value(value: i32) -> &'static str {
    match value {
        1 => "X wins with optimal play",
        -1 => "O wins with optimal play",
        _ => "draw with optimal play",
    }
}

fn build_export(board: &Board) -> SolveExport {
    SolveExport {
        board: board.encode(),
        to_move: tictactoe::current_player(board),
        value: tictactoe::position_value(board),
        optimal_action: tictactoe::optimal_action(board),
        principal_variation: tictactoe::principal_variation(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");

        let args = SolveArgs {
            board: Some("X........".to_string()),
            export: Some(path.clone()),
        };
        execute(args).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["board"], "X........");
        assert_eq!(parsed["value"], 0);
        assert_eq!(parsed["optimal_action"]["row"], 1);
        assert_eq!(parsed["optimal_action"]["col"], 1);
    }

    #[test]
    fn test_execute_rejects_bad_board() {
        let args = SolveArgs {
            board: Some("garbage".to_string()),
            export: None,
        };
        assert!(execute(args).is_err());
    }
}
