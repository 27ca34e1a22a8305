//! noughts CLI - play tic-tac-toe against a perfect minimax opponent
//!
//! This CLI provides a unified interface for:
//! - Playing interactive matches (human, search, or random in either seat)
//! - Running selfplay batches with aggregate statistics
//! - Solving arbitrary positions move-by-move

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a perfect minimax opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run a batch of agent-vs-agent games
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),

    /// Evaluate every legal move of a position
    Solve(noughts::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
    }
}
