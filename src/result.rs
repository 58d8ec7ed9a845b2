//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts, dealer blackjack, or lower score).
    Lose,
    /// Push (tie, including blackjack against blackjack).
    Push,
    /// Player has blackjack and the dealer does not.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The wager on this hand.
    pub bet: usize,
    /// Amount added to the balance (negative on a loss).
    pub net: isize,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each player hand, in play order.
    pub hands: Vec<HandResult>,
    /// The settled player hands.
    pub player_hands: Vec<Hand>,
    /// The settled dealer hand.
    pub dealer_hand: DealerHand,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Sum of every hand's net result.
    pub net: isize,
    /// Session balance after this round.
    pub balance: isize,
}
