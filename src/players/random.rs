//! Random baseline player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::engine::GameEngine;
use crate::error::{Error, Result};
use crate::ports::Agent;

/// Plays a uniformly random legal move. Useful as a baseline opponent and
/// for exercising the engine in tests.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, engine: &GameEngine) -> Result<(usize, usize)> {
        if engine.status().is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let cells = engine.board().empty_cells();
        if cells.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..cells.len());
        Ok(cells[index])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_only_empty_cells() {
        let mut engine = GameEngine::new();
        engine.apply_move(1, 1).unwrap();
        engine.apply_move(0, 0).unwrap();

        let mut agent = RandomAgent::with_seed(42);
        for _ in 0..50 {
            let (row, col) = agent.select_move(&engine).unwrap();
            assert!(engine.board().is_empty(row, col));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let engine = GameEngine::new();
        let first = RandomAgent::with_seed(7).select_move(&engine).unwrap();
        let second = RandomAgent::with_seed(7).select_move(&engine).unwrap();
        assert_eq!(first, second);
    }
}
