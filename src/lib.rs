//! Tic-tac-toe rule engine with an exhaustive minimax opponent
//!
//! This crate provides:
//! - A 3x3 game rule engine with move validation and win/draw detection
//! - An exhaustive minimax search agent that plays perfectly
//! - Pluggable player adapters (human input, search, random baseline)
//! - A session driver that alternates turns between two agents

pub mod cli;
pub mod engine;
pub mod error;
pub mod players;
pub mod ports;
pub mod search;
pub mod session;

pub use engine::{Board, Cell, GameEngine, Player, Status};
pub use error::{Error, Result};
pub use players::{AgentKind, HumanAgent, RandomAgent};
pub use ports::Agent;
pub use search::SearchAgent;
pub use session::{MatchStats, Session};
