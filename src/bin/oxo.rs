//! oxo CLI - perfect-play Tic-Tac-Toe engine
//!
//! This CLI provides a unified interface for:
//! - Solving positions (optimal action, exact value, principal variation)
//! - Playing interactive games against the engine or a random mover

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal action and exact value for a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play an interactive game in the terminal
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
