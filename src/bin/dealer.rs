//! Table Runner Binary
//!
//! Deals a batch of bot-vs-bot hands through the room, audits every
//! finished hand by replaying its log, and prints the outcomes.

use clap::Parser;
use colored::Colorize;
use holdem_engine::Chips;
use holdem_engine::players::Fish;
use holdem_engine::players::Policy;
use holdem_engine::replay;
use holdem_engine::room::Room;

#[derive(Parser, Debug)]
#[command(about = "deal bot-vs-bot hands and audit the logs")]
struct Args {
    /// Seats at the table
    #[arg(long, default_value_t = 3)]
    seats: usize,
    /// Starting stack per seat
    #[arg(long, default_value_t = 1000)]
    stack: Chips,
    /// Big blind
    #[arg(long, default_value_t = 40)]
    blind: Chips,
    /// Hands to deal
    #[arg(long, default_value_t = 10)]
    hands: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let room = Room::new();
    for i in 0..args.hands {
        let names = (0..args.seats).map(|s| format!("bot{}", s)).collect();
        let stacks = vec![args.stack; args.seats];
        let policies = (0..args.seats)
            .map(|_| Some(Box::new(Fish::default()) as Box<dyn Policy>))
            .collect();
        let dealer = i % args.seats;
        let snapshot = room.start_hand(names, stacks, dealer, args.blind, policies)?;
        let payoffs = snapshot
            .payoffs
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("bot hand did not finish"))?;
        let (setup, plays) = room.export(snapshot.id)?;
        replay::verify(&setup, &plays, payoffs)?;
        let deltas = payoffs
            .iter()
            .map(|p| match p {
                p if *p > 0 => format!("+{}", p).green().to_string(),
                p if *p < 0 => p.to_string().red().to_string(),
                _ => "0".to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ");
        println!(
            "hand {:>3} pot {:>5} [{}] {}",
            i,
            snapshot.pot,
            deltas,
            "verified".dimmed()
        );
        room.remove(snapshot.id)?;
    }
    Ok(())
}
