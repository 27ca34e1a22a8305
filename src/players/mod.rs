//! Player adapters implementing the [`Agent`](crate::ports::Agent) port

pub mod human;
pub mod random;

use clap::ValueEnum;

pub use human::{HumanAgent, keypad_cell};
pub use random::RandomAgent;

use crate::ports::Agent;
use crate::search::SearchAgent;

/// The kinds of player a match slot can be filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Keyboard input
    Human,
    /// Exhaustive minimax search
    Search,
    /// Uniformly random legal moves
    Random,
}

impl AgentKind {
    /// Creates a boxed agent trait object from the kind
    pub fn into_boxed_agent(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Human => Box::new(HumanAgent::from_stdin()),
            AgentKind::Search => Box::new(SearchAgent),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }

    /// Whether this kind blocks on interactive input
    pub fn is_interactive(self) -> bool {
        self == AgentKind::Human
    }
}
