//! Selfplay command - batches of agent-vs-agent matches

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::output;
use crate::engine::{Player, Status};
use crate::players::AgentKind;
use crate::session::{MatchStats, Session};

#[derive(Debug, Parser)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// Agent playing X (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::Search)]
    pub first: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value_t = AgentKind::Search)]
    pub second: AgentKind,

    /// Seed for random agents; each game derives its own offset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the JSON summary to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    if args.first.is_interactive() || args.second.is_interactive() {
        bail!("selfplay requires non-interactive agents (search or random)");
    }

    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;

    let pb = output::create_match_progress(args.games as u64);
    for game in 0..args.games {
        let game_seed = args.seed.map(|s| s.wrapping_add(game as u64 * 2));
        let first = args.first.into_boxed_agent(game_seed);
        let second = args
            .second
            .into_boxed_agent(game_seed.map(|s| s.wrapping_add(1)));

        let mut session = Session::new(first, second);
        match session.run()? {
            Status::Won(Player::X) => x_wins += 1,
            Status::Won(Player::O) => o_wins += 1,
            Status::Draw => draws += 1,
            Status::InProgress => unreachable!("session ended while in progress"),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = MatchStats::new(args.games, x_wins, o_wins, draws);

    output::print_section("Selfplay results");
    output::print_kv("Games", &stats.total_games.to_string());
    output::print_kv(
        "X wins",
        &format!("{} ({:.1}%)", stats.x_wins, stats.x_win_rate * 100.0),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({:.1}%)", stats.o_wins, stats.o_win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", stats.draws, stats.draw_rate * 100.0),
    );

    if let Some(path) = &args.out {
        stats.save(path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
