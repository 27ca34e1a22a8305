//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for playing matches,
//! running selfplay batches, and solving positions.

pub mod commands;
pub mod output;
