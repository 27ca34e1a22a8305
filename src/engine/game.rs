//! Game engine: the single source of truth for a match in progress

use serde::{Deserialize, Serialize};

use super::board::{Board, Player, SIZE};
use super::lines;
use crate::error::{Error, Result};

/// Current status of the game
///
/// Derived deterministically from board contents; `Won` and `Draw` are
/// terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

impl Status {
    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// Owns the board, the current player, and the turn counter, and enforces
/// move legality. Read accessors return copies; the board is never aliased
/// for mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    turn: usize,
    status: Status,
}

impl GameEngine {
    /// Create a new game on an empty board with X to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            to_move: Player::X,
            turn: 0,
            status: Status::InProgress,
        }
    }

    /// Judge any board: winning line first, then full-board draw, else in progress
    pub fn judge(board: &Board) -> Status {
        if let Some(winner) = lines::line_owner(board) {
            return Status::Won(winner);
        }
        if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        }
    }

    /// Place the current player's mark at the given coordinates.
    ///
    /// On success the turn counter advances, the current player switches, and
    /// the status is recomputed. Rejected moves leave the engine untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has already ended
    /// - [`Error::OutOfBounds`] if `row` or `col` is outside the grid
    /// - [`Error::CellOccupied`] if the target cell already holds a mark
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<()> {
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(Error::CellOccupied { row, col });
        }

        self.board.place(row, col, self.to_move.to_cell());
        self.turn += 1;
        self.to_move = self.to_move.opponent();
        self.status = Self::judge(&self.board);
        Ok(())
    }

    /// Current game status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Number of moves applied since game start
    pub fn turn_count(&self) -> usize {
        self.turn
    }

    /// Copy of the current board
    pub fn board(&self) -> Board {
        self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
