//! Agent port - abstraction over move sources

use crate::Result;
use crate::engine::GameEngine;

/// A participant in a match: anything that can produce a move for the
/// current game state.
///
/// Implementations receive a read-only view of the engine and answer with
/// the coordinates they want to play. They never mutate the game; the
/// session driver owns move application.
pub trait Agent {
    /// Select a move for the current position.
    ///
    /// The returned coordinates must name an empty cell; adapters are
    /// expected to validate their proposal against the board snapshot before
    /// returning it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when asked to move on a
    /// terminal board, or an input error if the move source fails.
    fn select_move(&mut self, engine: &GameEngine) -> Result<(usize, usize)>;

    /// Get the agent's display name
    fn name(&self) -> &str;
}
