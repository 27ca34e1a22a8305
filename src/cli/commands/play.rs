//! Play command - run an interactive match

use anyhow::Result;
use clap::Parser;

use crate::engine::{Player, Status};
use crate::players::AgentKind;
use crate::session::Session;

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Agent playing X (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::Human)]
    pub first: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value_t = AgentKind::Search)]
    pub second: AgentKind,

    /// Seed for random agents
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let first = args.first.into_boxed_agent(args.seed);
    let second = args.second.into_boxed_agent(args.seed.map(|s| s.wrapping_add(1)));

    let mut session = Session::new(first, second);
    println!(
        "X: {}  vs  O: {}",
        session.agent_name(Player::X),
        session.agent_name(Player::O)
    );
    println!("\n{}", session.engine().board().render());

    let status = session.run_with(|engine| {
        println!("{}", engine.board().render());
    })?;

    match status {
        Status::Won(player) => println!("Player {player} wins!"),
        Status::Draw => println!("Draw!"),
        Status::InProgress => unreachable!("session ended while in progress"),
    }

    Ok(())
}
