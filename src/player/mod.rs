//! Decision makers that choose wagers and moves.

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

mod dealer;
#[cfg(feature = "std")]
mod human;

pub use dealer::DealerPolicy;
#[cfg(feature = "std")]
pub use human::Human;

/// A move the acting party can make on its current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw one card.
    Hit,
    /// End the turn for this hand.
    Stand,
    /// Double the wager, draw exactly one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
}

/// The capability set the round driver consumes.
///
/// Calls block the round until they return.
pub trait Player {
    /// Chooses the wager for the next round.
    ///
    /// `shuffled` is true when the shoe was reshuffled just before this bet.
    fn bet(&mut self, shuffled: bool) -> usize;

    /// Chooses a move for `hand` given the dealer's face-up card.
    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Move;

    /// Receives the final hands once the round has been settled.
    fn results(&mut self, hands: &[Hand], dealer: &[Card]);

    /// Notified when a chosen move was rejected and the turn continues.
    fn rejected(&mut self, _error: ActionError) {}
}

impl<P: Player + ?Sized> Player for &mut P {
    fn bet(&mut self, shuffled: bool) -> usize {
        (**self).bet(shuffled)
    }

    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Move {
        (**self).play(hand, dealer_up)
    }

    fn results(&mut self, hands: &[Hand], dealer: &[Card]) {
        (**self).results(hands, dealer);
    }

    fn rejected(&mut self, error: ActionError) {
        (**self).rejected(error);
    }
}
