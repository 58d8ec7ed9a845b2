//! A multi-round blackjack session simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the shoe, the running balance,
//! and the per-round state machine (betting, player turns, dealer turn,
//! settlement). Bets and moves come from a [`Player`] implementation; the
//! dealer always follows the fixed [`DealerPolicy`].
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{Game, GameOptions, Human};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let stdin = std::io::stdin();
//! let mut human = Human::new(stdin.lock(), std::io::stdout());
//! let balance = game.play(&mut human).unwrap_or_default();
//! println!("final balance: {balance}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, SessionError, SettleError};
pub use game::{Game, GameState, MAX_BET};
pub use hand::{DealerHand, Hand, is_blackjack, is_soft, min_score, score};
pub use options::{GameOptions, RoundingMode};
#[cfg(feature = "std")]
pub use player::Human;
pub use player::{DealerPolicy, Move, Player};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{CardSource, ShuffledShoe, StackedShoe, standard_shoe};
