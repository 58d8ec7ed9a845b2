//! Interactive blackjack session on the terminal.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bjsim::{Game, GameOptions, Human};
use clap::Parser;
use tracing::info;

/// Play a session of blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(name = "bjsim", version, about)]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 3)]
    decks: u8,
    /// Number of rounds to play.
    #[arg(long, default_value_t = 10)]
    rounds: usize,
    /// Blackjack payout ratio.
    #[arg(long, default_value_t = 1.5)]
    blackjack_pays: f64,
    /// Smallest accepted wager.
    #[arg(long, default_value_t = 100)]
    min_bet: usize,
    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Log level written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Args {
    fn options(&self) -> GameOptions {
        GameOptions::default()
            .with_decks(self.decks)
            .with_rounds(self.rounds)
            .with_blackjack_pays(self.blackjack_pays)
            .with_min_bet(self.min_bet)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, decks = args.decks, rounds = args.rounds, "starting session");

    let mut game = Game::new(args.options(), seed);
    let stdin = io::stdin();
    let mut human = Human::new(stdin.lock(), io::stdout());

    let balance = game.play(&mut human).context("session aborted")?;
    println!("Final balance: {balance}");

    Ok(())
}
