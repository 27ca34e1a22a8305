//! Solve command - evaluate every legal move of a position

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::output;
use crate::engine::{Board, GameEngine, Status};
use crate::search::SearchAgent;

#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Board literal, row-major: '.' empty, 'X', 'O' (e.g. "XX.OO....")
    #[arg(long)]
    pub board: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    match GameEngine::judge(&board) {
        Status::Won(player) => bail!("board is already decided: {player} has won"),
        Status::Draw => bail!("board is already decided: draw"),
        Status::InProgress => {}
    }

    let player = board.side_to_move();
    let turn = board.occupied_count();

    output::print_section(&format!("Position, {player} to move"));
    println!("{}", board.render());

    let values = SearchAgent.evaluate_moves(&board, player, turn);
    let ((best_row, best_col), best_value) = SearchAgent.best_move(&board, player, turn);

    println!("Move evaluations for {player} (positive is winning):");
    for ((row, col), value) in values {
        let marker = if (row, col) == (best_row, best_col) {
            "  <- best"
        } else {
            ""
        };
        output::print_kv(&format!("({row}, {col})"), &format!("{value:>3}{marker}"));
    }

    Ok(())
}
