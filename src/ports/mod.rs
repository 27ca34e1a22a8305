//! Ports (trait boundaries) between the game core and its players.
//!
//! The engine does not care where moves come from. Anything that can
//! produce a move given the current game state plugs in through the
//! [`Agent`] trait: a human at the keyboard, the minimax search, or a
//! random baseline.

pub mod agent;

pub use agent::Agent;
