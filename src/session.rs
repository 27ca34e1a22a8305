//! Turn-alternation driver and match bookkeeping

use serde::{Deserialize, Serialize};

use crate::engine::{GameEngine, Player, Status};
use crate::error::Result;
use crate::ports::Agent;

/// Drives a single match between two agents.
///
/// The first agent plays X and therefore opens; the second plays O. The
/// session owns the engine: agents only ever see read-only snapshots and the
/// driver applies every move, so an agent proposing an illegal cell surfaces
/// as an engine rejection rather than corrupted state.
pub struct Session {
    engine: GameEngine,
    first: Box<dyn Agent>,
    second: Box<dyn Agent>,
}

impl Session {
    /// Create a session; `first` plays X, `second` plays O
    pub fn new(first: Box<dyn Agent>, second: Box<dyn Agent>) -> Self {
        Session {
            engine: GameEngine::new(),
            first,
            second,
        }
    }

    /// Read access to the underlying engine
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Name of the agent playing the given side
    pub fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::X => self.first.name(),
            Player::O => self.second.name(),
        }
    }

    /// Play the match to completion and return the terminal status
    pub fn run(&mut self) -> Result<Status> {
        self.run_with(|_| {})
    }

    /// Play the match to completion, invoking `on_turn` with the engine
    /// after every accepted move
    pub fn run_with<F>(&mut self, mut on_turn: F) -> Result<Status>
    where
        F: FnMut(&GameEngine),
    {
        while self.engine.status() == Status::InProgress {
            let agent = match self.engine.current_player() {
                Player::X => self.first.as_mut(),
                Player::O => self.second.as_mut(),
            };
            let (row, col) = agent.select_move(&self.engine)?;
            self.engine.apply_move(row, col)?;
            on_turn(&self.engine);
        }
        Ok(self.engine.status())
    }
}

/// Aggregate result of a batch of matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStats {
    /// Total games played
    pub total_games: usize,

    /// Games won by X (the first agent)
    pub x_wins: usize,

    /// Games won by O (the second agent)
    pub o_wins: usize,

    /// Drawn games
    pub draws: usize,

    /// X win rate
    pub x_win_rate: f64,

    /// O win rate
    pub o_win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,
}

impl MatchStats {
    /// Create match stats, computing the rates
    pub fn new(total_games: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save stats to a pretty-printed JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load stats from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let stats = serde_json::from_reader(file)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::players::{HumanAgent, RandomAgent};
    use crate::search::SearchAgent;

    #[test]
    fn test_scripted_human_match() {
        // X takes the top row; O answers on the middle row
        let first = HumanAgent::new(Cursor::new("7\n8\n9\n"));
        let second = HumanAgent::new(Cursor::new("4\n5\n"));

        let mut session = Session::new(Box::new(first), Box::new(second));
        let status = session.run().unwrap();

        assert_eq!(status, Status::Won(Player::X));
        assert_eq!(session.engine().turn_count(), 5);
    }

    #[test]
    fn test_run_with_reports_every_move() {
        let first = HumanAgent::new(Cursor::new("7\n8\n9\n"));
        let second = HumanAgent::new(Cursor::new("4\n5\n"));

        let mut session = Session::new(Box::new(first), Box::new(second));
        let mut turns = Vec::new();
        session
            .run_with(|engine| turns.push(engine.turn_count()))
            .unwrap();

        assert_eq!(turns, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_random_matches_terminate_legally() {
        for seed in 0..20 {
            let mut session = Session::new(
                Box::new(RandomAgent::with_seed(seed)),
                Box::new(RandomAgent::with_seed(seed.wrapping_add(1))),
            );
            let status = session.run().unwrap();
            assert!(status.is_terminal());
            assert!(session.engine().turn_count() <= 9);
        }
    }

    #[test]
    fn test_search_never_loses_to_random() {
        for seed in 0..10 {
            let mut session = Session::new(
                Box::new(RandomAgent::with_seed(seed)),
                Box::new(SearchAgent),
            );
            let status = session.run().unwrap();
            assert_ne!(status, Status::Won(Player::X), "seed {seed} beat minimax");
        }
    }

    #[test]
    fn test_agent_names() {
        let session = Session::new(
            Box::new(RandomAgent::with_seed(0)),
            Box::new(SearchAgent),
        );
        assert_eq!(session.agent_name(Player::X), "Random");
        assert_eq!(session.agent_name(Player::O), "Minimax");
    }

    #[test]
    fn test_match_stats_rates() {
        let stats = MatchStats::new(10, 5, 2, 3);
        assert_eq!(stats.x_win_rate, 0.5);
        assert_eq!(stats.o_win_rate, 0.2);
        assert_eq!(stats.draw_rate, 0.3);

        let empty = MatchStats::new(0, 0, 0, 0);
        assert_eq!(empty.x_win_rate, 0.0);
    }
}
