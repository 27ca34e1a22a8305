//! Exhaustive minimax search for the artificial player
//!
//! The full game tree for a 3x3 board is small enough to walk without
//! pruning or caching, so the search visits every continuation and the
//! returned move is optimal under perfect play by both sides.

use crate::engine::{Board, GameEngine, Player, Status};
use crate::error::{Error, Result};
use crate::ports::Agent;

/// Perfect player backed by depth-first minimax over a private board copy
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchAgent;

impl SearchAgent {
    /// Find the optimal move for `player` on `board` at the given turn count.
    ///
    /// Returns the chosen cell and its minimax value. Terminal positions are
    /// scored `+(empty_cells + 1)` when `player` has won, `-(empty_cells + 1)`
    /// when the opponent has won, and `0` for a draw, so among equally
    /// winning lines the search prefers the fastest win and among losing
    /// lines the slowest loss. Ties between equal-valued moves break toward
    /// the first candidate in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `board` is terminal or has no empty cell. Callers must check
    /// the game status first.
    pub fn best_move(&self, board: &Board, player: Player, turn: usize) -> ((usize, usize), i32) {
        let mut scratch = *board;
        let (value, cell) = Self::explore(&mut scratch, player, turn);
        let cell = cell.expect("best_move requires an in-progress board with an empty cell");
        (cell, value)
    }

    /// Minimax value of every legal move for the side to move at `turn`
    pub fn evaluate_moves(
        &self,
        board: &Board,
        player: Player,
        turn: usize,
    ) -> Vec<((usize, usize), i32)> {
        let mover = Player::on_turn(turn);
        let mut scratch = *board;
        let mut values = Vec::new();
        for (row, col) in board.empty_cells() {
            scratch.place(row, col, mover.to_cell());
            let (value, _) = Self::explore(&mut scratch, player, turn + 1);
            scratch.clear(row, col);
            values.push(((row, col), value));
        }
        values
    }

    fn explore(scratch: &mut Board, me: Player, turn: usize) -> (i32, Option<(usize, usize)>) {
        let status = GameEngine::judge(scratch);
        if status.is_terminal() {
            return (Self::leaf_value(scratch, me, status), None);
        }

        let mover = Player::on_turn(turn);
        let maximizing = mover == me;

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_cell = None;

        for (row, col) in scratch.empty_cells() {
            scratch.place(row, col, mover.to_cell());
            let (value, _) = Self::explore(scratch, me, turn + 1);
            scratch.clear(row, col);

            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_cell = Some((row, col));
            }
        }

        (best_value, best_cell)
    }

    fn leaf_value(board: &Board, me: Player, status: Status) -> i32 {
        let swing = board.empty_count() as i32 + 1;
        match status {
            Status::Won(winner) if winner == me => swing,
            Status::Won(_) => -swing,
            _ => 0,
        }
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, engine: &GameEngine) -> Result<(usize, usize)> {
        if engine.status().is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let board = engine.board();
        let (cell, _) = self.best_move(&board, engine.current_player(), engine.turn_count());
        Ok(cell)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
