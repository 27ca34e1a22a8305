//! Tic-tac-toe rule engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player, SIZE};
pub use game::{GameEngine, Status};
pub use lines::LINES;
